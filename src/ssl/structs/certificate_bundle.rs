use crate::ssl::structs::leaf_info::LeafInfo;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// A decoded keystore: certificate chain (leaf first), its private key, the
/// signing form handed to rustls, and the parsed leaf.
///
/// Never mutated once published by the store.
pub struct CertificateBundle {
    pub certs: Vec<CertificateDer<'static>>,
    pub key: PrivateKeyDer<'static>,
    pub certified_key: Arc<CertifiedKey>,
    pub leaf: LeafInfo,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub source_path: String,
    pub generation: u64,
}
