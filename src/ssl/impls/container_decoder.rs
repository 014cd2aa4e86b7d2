use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::container_decoder::ContainerDecoder;
use crate::ssl::structs::leaf_info::LeafInfo;
use crate::ssl::structs::passphrase::Passphrase;
use openssl::error::ErrorStack;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::PKey;
use openssl::stack::Stack;
use openssl::x509::X509;
use rcgen::{CertificateParams, DnType, ExtendedKeyUsagePurpose, KeyPair};
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer,
    PrivatePkcs8KeyDer
};
use rustls::sign::CertifiedKey;
use rustls_pemfile::Item;
use std::sync::Arc;

const KEYSTORE_FRIENDLY_NAME: &str = "keystore-tls";

impl ContainerDecoder {
    /// Decrypts a PKCS#12 keystore and builds a bundle from its contents.
    pub fn decode(
        container: &[u8],
        passphrase: &Passphrase,
    ) -> Result<CertificateBundle, CertificateError> {
        let pem_bytes = Self::container_to_pem(container, passphrase)?;
        Self::decode_pem(&pem_bytes)
    }

    /// Builds a bundle from concatenated PEM blocks: certificates leaf first,
    /// plus one private key. Other block types are skipped.
    pub fn decode_pem(pem_bytes: &[u8]) -> Result<CertificateBundle, CertificateError> {
        let (certs, key) = Self::parse_pem_blocks(pem_bytes)?;
        Self::verify_key_pair(&certs[0], &key)?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key).map_err(|e| {
            CertificateError::ContainerDecode(format!("unsupported private key: {}", e))
        })?;
        let certified_key = CertifiedKey::new(certs.clone(), signing_key);
        let leaf = LeafInfo::from_der(&certs[0])?;
        Ok(CertificateBundle {
            certs,
            key,
            certified_key: Arc::new(certified_key),
            leaf,
            loaded_at: chrono::Utc::now(),
            source_path: String::new(),
            generation: 0,
        })
    }

    /// Packs a certificate chain (leaf first) and its key into a PKCS#12
    /// keystore protected by `passphrase`.
    pub fn encode(
        certs: &[CertificateDer<'_>],
        key: &PrivateKeyDer<'_>,
        passphrase: &Passphrase,
    ) -> Result<Vec<u8>, CertificateError> {
        let encode_err = |e: ErrorStack| CertificateError::ContainerEncode(e.to_string());
        let (leaf, chain) = certs.split_first().ok_or_else(|| {
            CertificateError::ContainerEncode("empty certificate chain".to_string())
        })?;
        let leaf = X509::from_der(leaf).map_err(encode_err)?;
        let pkey = PKey::private_key_from_der(key.secret_der()).map_err(encode_err)?;

        let mut builder = Pkcs12::builder();
        builder.name(KEYSTORE_FRIENDLY_NAME).pkey(&pkey).cert(&leaf);
        if !chain.is_empty() {
            let mut ca = Stack::new().map_err(encode_err)?;
            for cert in chain {
                ca.push(X509::from_der(cert).map_err(encode_err)?)
                    .map_err(encode_err)?;
            }
            builder.ca(ca);
        }
        builder
            .build2(passphrase.expose())
            .and_then(|pkcs12| pkcs12.to_der())
            .map_err(encode_err)
    }

    /// Generates a self-signed certificate for `common_name` and returns it as
    /// a PKCS#12 keystore. Meant for development only.
    pub fn generate_self_signed(
        common_name: &str,
        passphrase: &Passphrase,
    ) -> Result<Vec<u8>, CertificateError> {
        let generate_err = |e: rcgen::Error| CertificateError::ContainerEncode(e.to_string());
        let mut params = CertificateParams::new(vec![common_name.to_string()]).map_err(generate_err)?;
        params.distinguished_name.push(DnType::CommonName, common_name);
        params.extended_key_usages = vec![
            ExtendedKeyUsagePurpose::ServerAuth,
            ExtendedKeyUsagePurpose::ClientAuth,
        ];
        let key_pair = KeyPair::generate().map_err(generate_err)?;
        let cert = params.self_signed(&key_pair).map_err(generate_err)?;
        let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));
        Self::encode(std::slice::from_ref(cert.der()), &key, passphrase)
    }

    fn container_to_pem(
        container: &[u8],
        passphrase: &Passphrase,
    ) -> Result<Vec<u8>, CertificateError> {
        let decode_err = |e: ErrorStack| {
            CertificateError::ContainerDecode(format!("invalid passphrase or malformed keystore: {}", e))
        };
        let parsed = Pkcs12::from_der(container)
            .and_then(|pkcs12| pkcs12.parse2(passphrase.expose()))
            .map_err(decode_err)?;

        let mut pem_bytes = Vec::new();
        if let Some(cert) = &parsed.cert {
            pem_bytes.extend(cert.to_pem().map_err(decode_err)?);
        }
        if let Some(ca) = &parsed.ca {
            for cert in ca.iter() {
                pem_bytes.extend(cert.to_pem().map_err(decode_err)?);
            }
        }
        if let Some(pkey) = &parsed.pkey {
            pem_bytes.extend(pkey.private_key_to_pem_pkcs8().map_err(decode_err)?);
        }
        Ok(pem_bytes)
    }

    fn parse_pem_blocks(
        pem_bytes: &[u8],
    ) -> Result<(Vec<CertificateDer<'static>>, PrivateKeyDer<'static>), CertificateError> {
        let mut reader = pem_bytes;
        let mut certs = Vec::new();
        let mut key = None;
        for item in rustls_pemfile::read_all(&mut reader) {
            match item.map_err(|e| CertificateError::ContainerDecode(e.to_string()))? {
                Item::X509Certificate(cert) => certs.push(cert),
                Item::Pkcs8Key(pkcs8) if key.is_none() => key = Some(PrivateKeyDer::Pkcs8(pkcs8)),
                Item::Pkcs1Key(pkcs1) if key.is_none() => key = Some(PrivateKeyDer::Pkcs1(pkcs1)),
                Item::Sec1Key(sec1) if key.is_none() => key = Some(PrivateKeyDer::Sec1(sec1)),
                _ => {}
            }
        }
        if certs.is_empty() {
            return Err(CertificateError::ContainerDecode(
                "no certificate found in keystore".to_string(),
            ));
        }
        let key = key.ok_or_else(|| {
            CertificateError::ContainerDecode("no private key found in keystore".to_string())
        })?;
        Ok((certs, key))
    }

    fn verify_key_pair(
        leaf: &CertificateDer<'_>,
        key: &PrivateKeyDer<'_>,
    ) -> Result<(), CertificateError> {
        let leaf_key = X509::from_der(leaf)
            .and_then(|leaf| leaf.public_key())
            .map_err(|e| CertificateError::LeafParse(e.to_string()))?;
        let private_key = PKey::private_key_from_der(key.secret_der())
            .map_err(|e| CertificateError::ContainerDecode(e.to_string()))?;
        if !leaf_key.public_eq(&private_key) {
            return Err(CertificateError::KeyPairMismatch);
        }
        Ok(())
    }
}
