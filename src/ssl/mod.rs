//! Reloadable TLS identity and mutual-TLS policy.
//!
//! The service identity lives in a password-protected PKCS#12 keystore on
//! disk. It is decoded into a [`CertificateBundle`] and published in a
//! [`CertificateStore`]. rustls handshakes read the published bundle through a
//! [`DynamicCertificateResolver`] without taking any lock, while
//! [`CertificateStore::reload`] swaps in a freshly decoded keystore in one
//! atomic step.
//!
//! # Reload semantics
//!
//! - A reload reads, decrypts and parses the keystore completely before
//!   anything is published.
//! - Any failure (unreadable file, wrong passphrase, key/certificate mismatch,
//!   unparsable leaf) leaves the previous bundle serving.
//! - Handshakes racing a reload see either the old or the new bundle, never a
//!   mix of both.
//!
//! Deciding *when* to reload (signals, file watching, timers) is left to the
//! caller.
//!
//! # Policy
//!
//! [`build_server_tls_policy`] pins TLS 1.2 as the minimum version, restricts
//! TLS 1.2 to four ECDHE/AES-GCM suites, prefers the server's suite order and
//! requires a client certificate that chains to the configured CA bundle (or
//! the platform roots).
//!
//! # Example
//!
//! ```rust,ignore
//! use keystore_tls::ssl::ssl::{build_server_tls_policy, create_certificate_store};
//! use keystore_tls::ssl::structs::certificate_store_config::CertificateStoreConfig;
//!
//! let store = create_certificate_store(CertificateStoreConfig::new("server.p12", "secret".into()))?;
//! let policy = build_server_tls_policy("ca-bundle.pem", store.clone())?;
//! let server_config = policy.server_config()?;
//!
//! // Later, e.g. on SIGHUP:
//! if let Err(e) = store.reload() {
//!     log::warn!("keeping previous certificate: {}", e);
//! }
//! ```
//!
//! [`CertificateBundle`]: structs::certificate_bundle::CertificateBundle
//! [`CertificateStore`]: structs::certificate_store::CertificateStore
//! [`CertificateStore::reload`]: structs::certificate_store::CertificateStore::reload
//! [`DynamicCertificateResolver`]: structs::dynamic_certificate_resolver::DynamicCertificateResolver
//! [`build_server_tls_policy`]: ssl::build_server_tls_policy

/// Error and mode enumerations.
pub mod enums;

/// Implementation blocks for the ssl structs.
pub mod impls;

/// Store creation and policy assembly.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Data structures for bundles, stores, trust roots and the policy.
pub mod structs;
