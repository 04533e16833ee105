//! Configuration types for repeatcal.

mod global_config;

pub use global_config::GlobalConfig;
