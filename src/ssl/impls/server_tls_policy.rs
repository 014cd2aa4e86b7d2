use crate::ssl::enums::client_auth_mode::ClientAuthMode;
use crate::ssl::enums::policy_error::PolicyError;
use crate::ssl::ssl::tls13_cipher_suites;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::server_tls_policy::ServerTlsPolicy;
use crate::ssl::structs::trust_bundle::TrustBundle;
use rustls::crypto::CryptoProvider;
use rustls::server::WebPkiClientVerifier;
use rustls::{ClientConfig, ProtocolVersion, ServerConfig, SupportedCipherSuite, SupportedProtocolVersion};
use std::sync::Arc;

impl std::fmt::Debug for ServerTlsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerTlsPolicy")
            .field("trust_bundle", &self.trust_bundle)
            .field("min_protocol_version", &self.min_protocol_version)
            .field("cipher_suites", &self.cipher_suites)
            .field("client_auth", &self.client_auth)
            .field("prefer_server_cipher_suites", &self.prefer_server_cipher_suites)
            .finish()
    }
}

impl ServerTlsPolicy {
    pub fn trust_bundle(&self) -> &Arc<TrustBundle> {
        &self.trust_bundle
    }

    pub fn min_protocol_version(&self) -> ProtocolVersion {
        self.min_protocol_version
    }

    pub fn protocol_versions(&self) -> &[&'static SupportedProtocolVersion] {
        &self.protocol_versions
    }

    /// TLS 1.2 cipher allow-list, in server preference order.
    pub fn cipher_suites(&self) -> &[SupportedCipherSuite] {
        &self.cipher_suites
    }

    pub fn client_auth(&self) -> ClientAuthMode {
        self.client_auth
    }

    pub fn prefer_server_cipher_suites(&self) -> bool {
        self.prefer_server_cipher_suites
    }

    pub fn resolver(&self) -> &Arc<DynamicCertificateResolver> {
        &self.resolver
    }

    /// ring provider restricted to the allow-list plus the TLS 1.3 AES-GCM
    /// suites.
    pub fn crypto_provider(&self) -> Arc<CryptoProvider> {
        let mut cipher_suites = self.cipher_suites.clone();
        cipher_suites.extend(tls13_cipher_suites());
        Arc::new(CryptoProvider {
            cipher_suites,
            ..rustls::crypto::ring::default_provider()
        })
    }

    /// rustls server configuration: client certificates required and verified
    /// against the trust bundle, certificate served from the reloadable store.
    pub fn server_config(&self) -> Result<ServerConfig, PolicyError> {
        let provider = self.crypto_provider();
        let verifier = match self.client_auth {
            ClientAuthMode::RequireAndVerify => WebPkiClientVerifier::builder_with_provider(
                Arc::clone(&self.trust_bundle.roots),
                Arc::clone(&provider),
            )
            .build()
            .map_err(|e| PolicyError::Verifier(e.to_string()))?,
        };
        let mut config = ServerConfig::builder_with_provider(provider)
            .with_protocol_versions(&self.protocol_versions)
            .map_err(|e| PolicyError::Rustls(e.to_string()))?
            .with_client_cert_verifier(verifier)
            .with_cert_resolver(self.resolver.clone());
        config.ignore_client_order = self.prefer_server_cipher_suites;
        Ok(config)
    }

    /// rustls client configuration for outbound connections made with the same
    /// identity: trusts the policy roots and presents the reloadable certificate.
    pub fn client_config(&self) -> Result<ClientConfig, PolicyError> {
        let config = ClientConfig::builder_with_provider(self.crypto_provider())
            .with_protocol_versions(&self.protocol_versions)
            .map_err(|e| PolicyError::Rustls(e.to_string()))?
            .with_root_certificates(Arc::clone(&self.trust_bundle.roots))
            .with_client_cert_resolver(self.resolver.clone());
        Ok(config)
    }
}
