use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Failed to read keystore file: {0}")]
    FileRead(String),
    #[error("Failed to decode keystore container: {0}")]
    ContainerDecode(String),
    #[error("Failed to encode keystore container: {0}")]
    ContainerEncode(String),
    #[error("Private key does not match the leaf certificate public key")]
    KeyPairMismatch,
    #[error("Failed to parse leaf certificate: {0}")]
    LeafParse(String),
    #[error("No certificate has been loaded yet")]
    NotLoaded,
}
