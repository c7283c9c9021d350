//! Configuration file loading for supplement-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ADVISOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./advisor.toml` or `./.advisor.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/supplement-advisor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLoggingConfig, FileOutputConfig, FileScoringConfig};
pub use loader::ConfigLoader;
