mod commands;

use std::path::PathBuf;

use anyhow::Context;
use bk_core::config::Config;
use bk_telemetry::logging::{init_logging, LogFormat};
use clap::{Parser, Subcommand, ValueEnum};

/// bracket CLI -- inspect the loading views of every routed page.
#[derive(Parser)]
#[command(name = "bk", version, about)]
struct Cli {
    /// Config file (defaults to ~/.bracket/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route with its pattern and loading view (default).
    Routes {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the loading view for a URL path or route id.
    Show {
        /// URL path (`/en/series/42/ranking`) or route id (`series_ranking`).
        target: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,
    },

    /// Verify every route has a non-empty, deterministic loading view.
    Check,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Tree,
    Json,
    Html,
}

/// Config plus where it came from, so the load can be logged once the
/// subscriber (whose level the config decides) is installed.
fn load_config(path: Option<PathBuf>) -> anyhow::Result<(Config, String)> {
    match path {
        Some(path) => {
            let config = Config::load_from(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            Ok((config, path.display().to_string()))
        }
        None => {
            let default_path = Config::default_path();
            let source = if default_path.exists() {
                default_path.display().to_string()
            } else {
                "built-in defaults".to_string()
            };
            let config = Config::load().context("failed to load config")?;
            Ok((config, source))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) = load_config(cli.config)?;

    init_logging(
        "bk",
        &config.general.log_level,
        LogFormat::from_json_flag(cli.log_json),
    );
    tracing::debug!(%source, log_level = %config.general.log_level, "config loaded");

    match cli.command {
        None => commands::routes::run(false),
        Some(Commands::Routes { json }) => commands::routes::run(json),
        Some(Commands::Show { target, format }) => commands::show::run(&config, &target, format),
        Some(Commands::Check) => commands::check::run(),
    }
}
