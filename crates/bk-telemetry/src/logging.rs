use tracing_subscriber::{fmt, EnvFilter};

/// Output format of the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for terminals.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_level` (e.g. "info", "bk_core=debug,warn").
/// Logs go to stderr so command output on stdout stays clean. Calling this
/// again once a subscriber is installed does nothing.
pub fn init_logging(service_name: &str, default_level: &str, format: LogFormat) {
    let installed = match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(filter(default_level))
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .try_init()
            .is_ok(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter(default_level))
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::debug!(service = service_name, ?format, "logging initialised");
    }
}
