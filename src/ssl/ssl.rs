use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::client_auth_mode::ClientAuthMode;
use crate::ssl::enums::policy_error::PolicyError;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::certificate_store_config::CertificateStoreConfig;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::server_tls_policy::ServerTlsPolicy;
use crate::ssl::structs::trust_bundle::TrustBundle;
use rustls::crypto::ring::cipher_suite;
use rustls::{ProtocolVersion, SupportedCipherSuite};
use std::sync::Arc;

pub const MIN_PROTOCOL_VERSION: ProtocolVersion = ProtocolVersion::TLSv1_2;

/// ECDHE with RSA or ECDSA signatures, AES-GCM 128 and 256.
pub fn allowed_cipher_suites() -> Vec<SupportedCipherSuite> {
    vec![
        cipher_suite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        cipher_suite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        cipher_suite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        cipher_suite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
    ]
}

pub fn tls13_cipher_suites() -> Vec<SupportedCipherSuite> {
    vec![
        cipher_suite::TLS13_AES_128_GCM_SHA256,
        cipher_suite::TLS13_AES_256_GCM_SHA384,
    ]
}

pub fn create_certificate_store(
    config: CertificateStoreConfig,
) -> Result<Arc<CertificateStore>, CertificateError> {
    CertificateStore::new(config).map(Arc::new)
}

/// Binds the trust bundle at `ca_bundle_path` (platform roots when empty) and
/// `store` into the fixed mutual-TLS policy.
pub fn build_server_tls_policy(
    ca_bundle_path: &str,
    store: Arc<CertificateStore>,
) -> Result<ServerTlsPolicy, PolicyError> {
    let trust_bundle = TrustBundle::load(ca_bundle_path)?;
    Ok(ServerTlsPolicy {
        trust_bundle: Arc::new(trust_bundle),
        min_protocol_version: MIN_PROTOCOL_VERSION,
        protocol_versions: vec![&rustls::version::TLS13, &rustls::version::TLS12],
        cipher_suites: allowed_cipher_suites(),
        client_auth: ClientAuthMode::RequireAndVerify,
        prefer_server_cipher_suites: true,
        resolver: Arc::new(DynamicCertificateResolver::new(store)),
    })
}
