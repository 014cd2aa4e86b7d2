use crate::ssl::structs::passphrase::Passphrase;

#[derive(Debug, Clone)]
pub struct CertificateStoreConfig {
    pub keystore_path: String,
    pub keystore_password: Passphrase,
}
