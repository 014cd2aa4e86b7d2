#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum TrustBundleSource {
    File(String),
    Platform,
}
