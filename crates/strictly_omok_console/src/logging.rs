//! Tracing setup for the console binary.
//!
//! The log filter lives in the config file, so the config has to be read
//! before the global subscriber exists. [`load_config`] runs that read under
//! a scoped bootstrap subscriber so its logs still reach the output.

use crate::config::{ConfigError, OmokConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Filter used before any config has been read.
pub const BOOTSTRAP_LOG_FILTER: &str = "info";

/// `RUST_LOG` if set and valid, otherwise `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Loads `path` (or defaults) with a temporary subscriber writing to `writer`.
pub fn load_config<W>(path: &Path, filter: EnvFilter, writer: W) -> Result<OmokConfig, ConfigError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(bootstrap, || OmokConfig::load_or_default(path))
}

/// Installs the global subscriber on stderr, filtered per `config`.
///
/// Logs go to stderr so they never interleave with the board.
pub fn init(config: &OmokConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(std::io::stderr)
        .init();
}
