/// Turns PKCS#12 keystores into [`CertificateBundle`]s and back.
///
/// [`CertificateBundle`]: crate::ssl::structs::certificate_bundle::CertificateBundle
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerDecoder;
