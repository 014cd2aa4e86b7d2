use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrustBundleError {
    #[error("Failed to read CA bundle file: {0}")]
    FileRead(String),
    #[error("Unable to parse CA bundle: {0}")]
    TrustBundleParse(String),
    #[error("Platform trust store unavailable: {0}")]
    PlatformTrustStore(String),
}
