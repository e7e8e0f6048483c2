//! Structured Logging
//!
//! JSON output for production, pretty-printed output for development.
//! Logs go to stderr so lookup output on stdout stays machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{CliError, CliResult};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str =
    "fb_cli=info,fb_api=info,fb_store=info,fb_client=info,tower_http=info";

/// Log format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Pretty-printed for development
    #[default]
    Pretty,
    /// JSON for production
    Json,
    /// Compact single-line
    Compact,
}

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> CliResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(DEFAULT_FILTER).map_err(|e| CliError::config(e.to_string())),
    }
}

/// Install the global subscriber
pub fn init_logging(format: LogFormat) -> CliResult<()> {
    let filter = env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| CliError::config(format!("logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_log_format_names() {
        assert_eq!(LogFormat::from_str("json", true).unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("Compact", true).unwrap(), LogFormat::Compact);
        assert!(LogFormat::from_str("xml", true).is_err());
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }
}
