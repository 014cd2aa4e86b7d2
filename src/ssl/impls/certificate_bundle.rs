use crate::ssl::structs::certificate_bundle::CertificateBundle;
use rustls::pki_types::CertificateDer;

impl CertificateBundle {
    pub fn leaf_der(&self) -> &CertificateDer<'static> {
        &self.certs[0]
    }

    pub fn common_name(&self) -> Option<&str> {
        self.leaf.common_name.as_deref()
    }
}

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certs.len())
            .field("leaf", &self.leaf)
            .field("source_path", &self.source_path)
            .field("generation", &self.generation)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}
