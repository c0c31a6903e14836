//! Config subcommand handlers.

use std::path::PathBuf;

use rooster_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// The file `--config` points at, else the platform default.
pub fn resolved_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config::config_path)
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = resolved_path(global);

    match args.command {
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_from(&path)?;
            // Validate so a broken file is reported here rather than later.
            cfg.to_app_config()?;
            let out = match global.output.unwrap_or(OutputFormat::Table) {
                OutputFormat::Table | OutputFormat::Plain => toml::to_string_pretty(&cfg)?,
                format => output::render_single(format, &cfg, |_| String::new(), |_| String::new()),
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            config::save_config_to(&Config::default(), &path)?;
            output::print_notice(
                &format!("Wrote default configuration to {}", path.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}
