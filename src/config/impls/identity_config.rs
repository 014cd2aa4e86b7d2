use crate::config::structs::identity_config::IdentityConfig;

impl IdentityConfig {
    pub(crate) fn default_selfsigned_domain() -> String {
        String::from("localhost")
    }
}
