//! Implementation blocks for the ssl structs.

pub mod passphrase;
pub mod certificate_store_config;
pub mod leaf_info;
pub mod certificate_bundle;

/// PKCS#12 decode/encode pipeline.
pub mod container_decoder;

/// Load, reload and lock-free reads of the published bundle.
pub mod certificate_store;

pub mod dynamic_certificate_resolver;

/// File and platform root loading.
pub mod trust_bundle;

/// rustls server and client configuration rendering.
pub mod server_tls_policy;
