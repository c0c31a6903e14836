mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rooster_core::{App, AppConfig, Backend};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands work even when the file is broken
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        cmd => {
            let path = commands::config_cmd::resolved_path(&cli.global);
            let cfg = rooster_config::load_config_from(&path)?;
            let ctx = commands::Context::resolve(&cli.global, &cfg)?;
            let app = App::new(&build_app_config(&cli.global, &cfg)?)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &app, &ctx).await
        }
    }
}

/// Translate the loaded config and apply flag overrides.
fn build_app_config(
    global: &GlobalOpts,
    cfg: &rooster_config::Config,
) -> Result<AppConfig, CliError> {
    let mut app_config = cfg.to_app_config()?;

    if global.offline {
        match &mut app_config.backend {
            Backend::Mock { offline, .. } => *offline = true,
            Backend::Http => {
                return Err(CliError::Validation {
                    field: "--offline".into(),
                    reason: "only the mock backend can be taken offline".into(),
                });
            }
        }
    }

    Ok(app_config)
}
