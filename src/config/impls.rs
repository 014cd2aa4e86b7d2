//! Implementation blocks for configuration types.

pub mod configuration;
pub mod configuration_error;
pub mod identity_config;
