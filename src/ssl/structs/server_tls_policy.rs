use crate::ssl::enums::client_auth_mode::ClientAuthMode;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::trust_bundle::TrustBundle;
use rustls::{ProtocolVersion, SupportedCipherSuite, SupportedProtocolVersion};
use std::sync::Arc;

/// Fixed mutual-TLS policy bound to one reloadable identity.
pub struct ServerTlsPolicy {
    pub(crate) trust_bundle: Arc<TrustBundle>,
    pub(crate) min_protocol_version: ProtocolVersion,
    pub(crate) protocol_versions: Vec<&'static SupportedProtocolVersion>,
    pub(crate) cipher_suites: Vec<SupportedCipherSuite>,
    pub(crate) client_auth: ClientAuthMode,
    pub(crate) prefer_server_cipher_suites: bool,
    pub(crate) resolver: Arc<DynamicCertificateResolver>,
}
