//! Supporting utilities

pub mod config;

pub use config::{ConfigError, SvpConfig, SystemConfig};
