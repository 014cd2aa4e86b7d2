use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::certificate_store_config::CertificateStoreConfig;
use crate::ssl::structs::container_decoder::ContainerDecoder;
use arc_swap::ArcSwapOption;
use log::{error, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateStore")
            .field("keystore_path", &self.config.keystore_path)
            .field("loaded", &self.is_loaded())
            .field("generation", &self.generation())
            .finish()
    }
}

impl CertificateStore {
    /// Creates the store and performs the initial load. A store that cannot
    /// load its keystore is never handed out.
    pub fn new(config: CertificateStoreConfig) -> Result<Self, CertificateError> {
        let store = Self::unloaded(config);
        store.load()?;
        Ok(store)
    }

    pub(crate) fn unloaded(config: CertificateStoreConfig) -> Self {
        Self {
            config,
            current: ArcSwapOption::empty(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &CertificateStoreConfig {
        &self.config
    }

    pub fn load(&self) -> Result<(), CertificateError> {
        self.refresh("Loaded")
    }

    /// Re-reads the keystore and swaps the new bundle in. On any failure the
    /// previously published bundle stays in place. Concurrent reloads decode
    /// independently; the one that finishes decoding last is published.
    pub fn reload(&self) -> Result<(), CertificateError> {
        self.refresh("Reloaded")
    }

    /// Lock-free read of the published bundle.
    pub fn get_current(&self) -> Result<Arc<CertificateBundle>, CertificateError> {
        self.current.load_full().ok_or(CertificateError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// Generation of the published bundle, 0 when nothing is published.
    pub fn generation(&self) -> u64 {
        self.current
            .load()
            .as_ref()
            .map(|bundle| bundle.generation)
            .unwrap_or(0)
    }

    fn refresh(&self, action: &str) -> Result<(), CertificateError> {
        match self.read_bundle() {
            Ok(mut bundle) => {
                bundle.generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                let bundle = Arc::new(bundle);
                if self.publish(&bundle) {
                    info!(
                        "[CERTIFICATE] {} keystore {} (generation {}): {}",
                        action, bundle.source_path, bundle.generation, bundle.leaf
                    );
                } else {
                    info!(
                        "[CERTIFICATE] Keystore {} generation {} superseded by generation {}",
                        bundle.source_path,
                        bundle.generation,
                        self.generation()
                    );
                }
                Ok(())
            }
            Err(e) => {
                error!(
                    "[CERTIFICATE] Keystore {} not applied, keeping generation {}: {}",
                    self.config.keystore_path,
                    self.generation(),
                    e
                );
                Err(e)
            }
        }
    }

    fn read_bundle(&self) -> Result<CertificateBundle, CertificateError> {
        let path = &self.config.keystore_path;
        let container = std::fs::read(path)
            .map_err(|e| CertificateError::FileRead(format!("{}: {}", path, e)))?;
        let mut bundle = ContainerDecoder::decode(&container, &self.config.keystore_password)?;
        bundle.source_path = path.clone();
        Ok(bundle)
    }

    /// Swaps `bundle` in unless a newer generation is already published.
    /// Returns whether `bundle` became current.
    pub(crate) fn publish(&self, bundle: &Arc<CertificateBundle>) -> bool {
        let previous = self.current.rcu(|current| match current {
            Some(current) if current.generation > bundle.generation => Some(Arc::clone(current)),
            _ => Some(Arc::clone(bundle)),
        });
        previous.is_none_or(|previous| previous.generation < bundle.generation)
    }
}
