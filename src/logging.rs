//! log4rs initialization.
//!
//! The library only logs through the `log` facade. Applications that want the
//! output call [`init_logging`] once at startup.

use std::error::Error;
use std::path::Path;

/// Environment variable naming the log4rs config file.
pub const LOG_CONFIG_ENV: &str = "IPV4_TOOLKIT_LOG_CONFIG";
/// Config file used when neither an explicit path nor [`LOG_CONFIG_ENV`] is set.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Resolve the log4rs config path.
///
/// An explicit `config` wins, then [`LOG_CONFIG_ENV`] (a `.env` file is loaded
/// first), then [`DEFAULT_LOG_CONFIG`].
pub fn log_config_path(config: Option<&str>) -> String {
    if let Some(path) = config {
        return path.to_string();
    }
    dotenv::dotenv().ok();
    std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string())
}

/// Initialize the global logger from a log4rs YAML file.
///
/// # Arguments
/// * `config` - Optional path to the config file, see [`log_config_path`]
///
/// # Returns
/// * `Err` - If the file does not exist, cannot be parsed, or a logger is already set
pub fn init_logging(config: Option<&str>) -> Result<(), Box<dyn Error>> {
    let path = log_config_path(config);
    if !Path::new(&path).exists() {
        return Err(format!("Log config file does not exist: {path}").into());
    }
    log4rs::init_file(&path, Default::default())
        .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
    log::info!("#Logging initialized from {path}");
    Ok(())
}
