//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config struct, errors and loading
//! - [`parser`]: Date context and encoding fallback for log reading
//! - [`log`]: Log level and output format

mod defaults;
mod log;
mod parser;
mod types;

pub use log::{LogConfig, LogFormat};
pub use types::Config;
