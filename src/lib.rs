//! # keystore-tls
//!
//! Hot-reloadable server identity for long-running mutual-TLS services built
//! on rustls.
//!
//! ## Overview
//!
//! The service identity is a password-protected PKCS#12 keystore on disk. It
//! is decoded into a certificate chain, private key and parsed leaf, and
//! published through a lock-free slot that every TLS handshake reads. A reload
//! decodes the keystore again and swaps the result in atomically; if anything
//! goes wrong the previous identity keeps serving.
//!
//! On top of the identity sits a fixed, hardened policy: TLS 1.2 minimum, four
//! ECDHE/AES-GCM suites for TLS 1.2, server cipher preference, and mandatory,
//! verified client certificates.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keystore_tls::ssl::ssl::{build_server_tls_policy, create_certificate_store};
//! use keystore_tls::ssl::structs::certificate_store_config::CertificateStoreConfig;
//!
//! let store = create_certificate_store(CertificateStoreConfig::new("server.p12", "secret".into()))?;
//! let policy = build_server_tls_policy("", store.clone())?;
//! let server_config = std::sync::Arc::new(policy.server_config()?);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - TOML configuration loading and validation
//! - [`ssl`] - Keystore decoding, reloadable store and TLS policy
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains the `fern` logging setup and the `CustomError` type used by the
/// binary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, generating and validating the TOML configuration file.
pub mod config;

/// Keystore identity and TLS policy module.
///
/// Provides the PKCS#12 decoder, the reloadable certificate store, the rustls
/// certificate resolver and the mutual-TLS policy builder.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
