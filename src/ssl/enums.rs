//! Enumerations for certificate, trust bundle and policy handling.

/// Errors raised while loading, decoding or serving the keystore identity.
pub mod certificate_error;

/// Errors raised while loading the CA trust bundle.
pub mod trust_bundle_error;

/// Errors raised while assembling the TLS policy.
pub mod policy_error;

/// Where a trust bundle came from (file or platform store).
pub mod trust_bundle_source;

/// Client authentication requirement of the TLS policy.
pub mod client_auth_mode;
