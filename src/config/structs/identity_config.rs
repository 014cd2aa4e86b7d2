use serde::{Deserialize, Serialize};
use crate::ssl::structs::passphrase::Passphrase;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IdentityConfig {
    pub keystore_path: String,
    pub keystore_password: Passphrase,
    #[serde(default)]
    pub ca_bundle_path: String,
    #[serde(default = "IdentityConfig::default_selfsigned_domain")]
    pub selfsigned_domain: String,
}
