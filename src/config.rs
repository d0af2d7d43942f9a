use std::path::PathBuf;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "evgrab=info";

#[derive(Clone, Debug)]
pub struct Config {
    pub device: PathBuf,
}

impl Config {
    pub fn new(device: PathBuf) -> Self {
        Self { device }
    }
}

/// Diagnostics filter from `RUST_LOG`, or the default when unset or blank.
pub fn log_filter_from_env() -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

impl From<&crate::cli::Args> for Config {
    fn from(a: &crate::cli::Args) -> Self {
        Self::new(a.device.clone())
    }
}
