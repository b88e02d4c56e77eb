//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system, falling back to `default_level` when `RUST_LOG` is unset
///
/// Logs go to stderr. Only the first call installs a logger; it returns `false`
/// when a logger was already in place.
pub fn init_with_level(default_level: &str) -> bool {
    let env = env_logger::Env::default().default_filter_or(default_level);
    env_logger::Builder::from_env(env).try_init().is_ok()
}
