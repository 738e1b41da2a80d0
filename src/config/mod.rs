//! Configuration module for Folio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOLIO_*)
//! 3. Project config (folio.toml)
//! 4. User config (~/.config/folio/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{config_file, user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    BuildConfig, CheckConfig, ColorMode, Config, ContentConfig, OutputConfig, Verbosity,
};
