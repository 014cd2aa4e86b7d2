use serde::{Deserialize, Serialize};
use crate::config::structs::identity_config::IdentityConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub identity: IdentityConfig,
}
