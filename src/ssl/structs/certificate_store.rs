use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store_config::CertificateStoreConfig;
use arc_swap::ArcSwapOption;
use std::sync::atomic::AtomicU64;

pub struct CertificateStore {
    pub(crate) config: CertificateStoreConfig,
    pub(crate) current: ArcSwapOption<CertificateBundle>,
    pub(crate) generation: AtomicU64,
}
