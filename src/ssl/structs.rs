//! Data structures for the reloadable identity and the TLS policy.

/// Keystore passphrase with redacted formatting.
pub mod passphrase;

/// Keystore location and passphrase owned by a store.
pub mod certificate_store_config;

/// Parsed leaf certificate metadata.
pub mod leaf_info;

/// Decoded certificate chain, private key and leaf metadata.
pub mod certificate_bundle;

/// PKCS#12 keystore codec.
pub mod container_decoder;

/// Store holding the atomically published bundle.
pub mod certificate_store;

/// rustls certificate resolver backed by a store.
pub mod dynamic_certificate_resolver;

/// Trusted root certificates.
pub mod trust_bundle;

/// Assembled mutual-TLS policy.
pub mod server_tls_policy;
