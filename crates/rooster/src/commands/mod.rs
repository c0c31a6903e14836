//! Command handlers, one module per top-level command.

pub mod config_cmd;
pub mod profile;
pub mod publications;
pub mod schedule;

use clap::ValueEnum;

use rooster_config::Config;
use rooster_core::{App, ViewState};

use crate::cli::{ColorMode, Command, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{self, Painter};

/// Presentation settings resolved from flags, then config defaults.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub output: OutputFormat,
    pub painter: Painter,
    pub quiet: bool,
}

impl Context {
    pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<Self, CliError> {
        let output = match global.output {
            Some(format) => format,
            None => parse_default("defaults.output", &config.defaults.output)?,
        };
        let color = match global.color {
            Some(mode) => mode,
            None => parse_default::<ColorMode>("defaults.color", &config.defaults.color)?,
        };
        Ok(Self {
            output,
            painter: Painter::new(output::should_color(color)),
            quiet: global.quiet,
        })
    }
}

fn parse_default<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}

/// Unwrap a store view for a one-shot command.
///
/// A failed fetch becomes an error carrying the retry command; an empty
/// result prints the empty-state notice and yields an empty list.
pub(crate) fn settle<T>(
    view: ViewState<Vec<T>>,
    retry: &str,
    empty_notice: &str,
    ctx: &Context,
) -> Result<Vec<T>, CliError> {
    match view {
        ViewState::Failed { message } => Err(CliError::FetchFailed {
            message,
            retry: retry.into(),
        }),
        ViewState::Empty => {
            output::print_notice(empty_notice, ctx.quiet);
            Ok(Vec::new())
        }
        ViewState::Ready(items) => Ok(items),
        // Fetches are awaited before rendering.
        ViewState::Loading => Ok(Vec::new()),
    }
}

/// Route a data command to its handler.
pub async fn dispatch(cmd: Command, app: &App, ctx: &Context) -> Result<(), CliError> {
    match cmd {
        Command::Publications(args) => publications::handle(app, args, ctx).await,
        Command::Schedule(args) => schedule::handle(app, args, ctx).await,
        Command::Profile(args) => {
            profile::handle(app, args, ctx);
            Ok(())
        }
        // Config is handled before the app starts
        Command::Config(_) => unreachable!(),
    }
}
