use crate::ssl::enums::trust_bundle_error::TrustBundleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error(transparent)]
    TrustBundle(#[from] TrustBundleError),
    #[error("Failed to build client certificate verifier: {0}")]
    Verifier(String),
    #[error("Failed to build TLS configuration: {0}")]
    Rustls(String),
}
