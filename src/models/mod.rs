pub mod config;

pub use config::{ConfigError, FileConfig, Overrides, Params};
