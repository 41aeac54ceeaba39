//! Configuration loading, persistence, and CLI overrides for Orrery.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, WindowConfig};
pub use error::ConfigError;
