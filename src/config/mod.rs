//! Configuration loading and management for the exit compliance engine.
//!
//! This module loads the matching window, compliance thresholds and display
//! formats from a YAML file, falling back to built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use exit_compliance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Match window: {} min", loader.config().matching.window_minutes);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, DisplayConfig, MatchingConfig, ReconciliationConfig,
    ThresholdConfig,
};
