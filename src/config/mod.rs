//! Configuration loading.
//!
//! Settings live in `~/.config/countrylens/config.toml` (or the platform
//! equivalent). A missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SourceConfig, ViewConfig};
