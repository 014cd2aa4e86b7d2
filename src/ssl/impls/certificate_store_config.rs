use crate::config::structs::identity_config::IdentityConfig;
use crate::ssl::structs::certificate_store_config::CertificateStoreConfig;
use crate::ssl::structs::passphrase::Passphrase;

impl CertificateStoreConfig {
    pub fn new(keystore_path: &str, keystore_password: Passphrase) -> Self {
        Self {
            keystore_path: keystore_path.to_string(),
            keystore_password,
        }
    }
}

impl From<&IdentityConfig> for CertificateStoreConfig {
    fn from(identity: &IdentityConfig) -> Self {
        Self::new(&identity.keystore_path, identity.keystore_password.clone())
    }
}
