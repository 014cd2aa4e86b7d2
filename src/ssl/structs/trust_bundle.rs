use crate::ssl::enums::trust_bundle_source::TrustBundleSource;
use rustls::RootCertStore;
use std::sync::Arc;

pub struct TrustBundle {
    pub roots: Arc<RootCertStore>,
    pub source: TrustBundleSource,
}
