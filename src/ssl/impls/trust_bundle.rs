use crate::ssl::enums::trust_bundle_error::TrustBundleError;
use crate::ssl::enums::trust_bundle_source::TrustBundleSource;
use crate::ssl::structs::trust_bundle::TrustBundle;
use log::{debug, warn};
use rustls::RootCertStore;
use rustls::pki_types::CertificateDer;
use rustls_pemfile::Item;
use std::sync::Arc;

impl std::fmt::Debug for TrustBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustBundle")
            .field("source", &self.source)
            .field("roots_count", &self.roots.len())
            .finish()
    }
}

impl TrustBundle {
    /// Loads trusted roots from a PEM file, or from the platform store when
    /// `path` is empty.
    pub fn load(path: &str) -> Result<TrustBundle, TrustBundleError> {
        if path.is_empty() {
            return Self::platform();
        }
        let data = std::fs::read(path)
            .map_err(|e| TrustBundleError::FileRead(format!("{}: {}", path, e)))?;
        let roots = Self::roots_from_pem(&data)
            .ok_or_else(|| TrustBundleError::TrustBundleParse(format!("no valid certificates in {}", path)))?;
        debug!("[TRUST] Loaded {} root certificates from {}", roots.len(), path);
        Ok(TrustBundle {
            roots: Arc::new(roots),
            source: TrustBundleSource::File(path.to_string()),
        })
    }

    pub fn platform() -> Result<TrustBundle, TrustBundleError> {
        let result = rustls_native_certs::load_native_certs();
        for e in &result.errors {
            warn!("[TRUST] Skipping platform certificate: {}", e);
        }
        let mut roots = RootCertStore::empty();
        let (added, ignored) = roots.add_parsable_certificates(result.certs);
        if added == 0 {
            return Err(TrustBundleError::PlatformTrustStore(format!(
                "no usable root certificates ({} ignored, {} errors)",
                ignored,
                result.errors.len()
            )));
        }
        debug!("[TRUST] Loaded {} platform root certificates ({} ignored)", added, ignored);
        Ok(TrustBundle {
            roots: Arc::new(roots),
            source: TrustBundleSource::Platform,
        })
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// `None` when no certificate in `data` could be added. Malformed PEM
    /// blocks are skipped.
    fn roots_from_pem(data: &[u8]) -> Option<RootCertStore> {
        let mut reader = data;
        let mut certs: Vec<CertificateDer<'static>> = Vec::new();
        loop {
            let remaining = reader.len();
            match rustls_pemfile::read_one(&mut reader) {
                Ok(Some(Item::X509Certificate(cert))) => certs.push(cert),
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(e) => {
                    warn!("[TRUST] Skipping malformed PEM block in CA bundle: {}", e);
                    if reader.len() == remaining {
                        break;
                    }
                }
            }
        }
        let mut roots = RootCertStore::empty();
        let (added, ignored) = roots.add_parsable_certificates(certs);
        if ignored > 0 {
            warn!("[TRUST] Ignored {} unparsable certificates in CA bundle", ignored);
        }
        (added > 0).then_some(roots)
    }
}
