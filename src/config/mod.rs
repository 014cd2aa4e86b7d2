//! Configuration management module.
//!
//! Loads, validates and generates the TOML configuration file used by the
//! `keystore-tls` binary.
//!
//! # Configuration Structure
//!
//! ```toml
//! log_level = "info"
//!
//! [identity]
//! keystore_path = "server.p12"
//! keystore_password = "changeit"
//! ca_bundle_path = ""
//! selfsigned_domain = "localhost"
//! ```
//!
//! An empty `ca_bundle_path` means the platform trust store is used to verify
//! client certificates.
//!
//! # Example
//!
//! ```rust,ignore
//! use keystore_tls::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
