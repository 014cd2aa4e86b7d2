#![allow(dead_code)]
use keystore_tls::ssl::structs::certificate_bundle::CertificateBundle;
use keystore_tls::ssl::structs::container_decoder::ContainerDecoder;
use keystore_tls::ssl::structs::leaf_info::LeafInfo;
use keystore_tls::ssl::structs::passphrase::Passphrase;
use openssl::pkey::PKey;
use openssl::x509::X509;
use rcgen::{BasicConstraints, CertificateParams, DnType, ExtendedKeyUsagePurpose, IsCa, Issuer, KeyPair};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer, ServerName};
use rustls::{ClientConfig, ClientConnection, ConnectionCommon, RootCertStore, ServerConfig, ServerConnection, SideData};
use std::ops::DerefMut;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub const PASSPHRASE: &str = "secret";
pub const SERVER_NAME: &str = "server.example.com";
pub const SERVER2_NAME: &str = "server2.example.com";

pub struct TestCa {
    pub cert: CertificateDer<'static>,
    pub pem: String,
    params: CertificateParams,
    key: KeyPair,
}

pub struct TestIdentity {
    pub certs: Vec<CertificateDer<'static>>,
    pub key: PrivateKeyDer<'static>,
}

impl TestCa {
    pub fn new(common_name: &str) -> TestCa {
        let key = KeyPair::generate().expect("Failed to generate CA key");
        let mut params = CertificateParams::new(Vec::<String>::new()).expect("Invalid CA params");
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        params.distinguished_name.push(DnType::CommonName, common_name);
        let cert = params.self_signed(&key).expect("Failed to self-sign CA");
        TestCa {
            cert: cert.der().clone(),
            pem: cert.pem(),
            params,
            key,
        }
    }

    pub fn issue(&self, common_name: &str, usage: ExtendedKeyUsagePurpose) -> TestIdentity {
        let key = KeyPair::generate().expect("Failed to generate leaf key");
        let mut params = CertificateParams::new(vec![common_name.to_string()]).expect("Invalid leaf params");
        params.distinguished_name.push(DnType::CommonName, common_name);
        params.extended_key_usages = vec![usage];
        let issuer = Issuer::from_params(&self.params, &self.key);
        let cert = params.signed_by(&key, &issuer).expect("Failed to sign leaf");
        TestIdentity {
            certs: vec![cert.der().clone(), self.cert.clone()],
            key: PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key.serialize_der())),
        }
    }

    pub fn roots(&self) -> RootCertStore {
        let mut roots = RootCertStore::empty();
        roots.add(self.cert.clone()).expect("CA should be a valid trust anchor");
        roots
    }

    pub fn write_pem(&self, dir: &TempDir, name: &str) -> String {
        write_file(dir, name, self.pem.as_bytes())
    }
}

impl TestIdentity {
    pub fn keystore(&self, passphrase: &str) -> Vec<u8> {
        ContainerDecoder::encode(&self.certs, &self.key, &Passphrase::from(passphrase))
            .expect("Failed to encode keystore")
    }
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, data).expect("Failed to write file");
    path.to_str().expect("Temp path should be UTF-8").to_string()
}

/// Replaces `path` through a rename so readers of the file never see a
/// partially written keystore.
pub fn replace_file(path: &str, data: &[u8]) {
    let staging = format!("{}.staging", path);
    std::fs::write(&staging, data).expect("Failed to write staging file");
    std::fs::rename(&staging, Path::new(path)).expect("Failed to rename staging file");
}

pub fn self_signed_keystore(common_name: &str, passphrase: &str) -> Vec<u8> {
    ContainerDecoder::generate_self_signed(common_name, &Passphrase::from(passphrase))
        .expect("Failed to generate keystore")
}

/// Checks that chain, signing key, private key and leaf metadata of a bundle
/// all belong to the same certificate.
pub fn assert_bundle_consistent(bundle: &CertificateBundle) {
    assert_eq!(bundle.certified_key.cert, bundle.certs);
    assert_eq!(LeafInfo::from_der(&bundle.certs[0]).unwrap(), bundle.leaf);
    let leaf_key = X509::from_der(&bundle.certs[0]).unwrap().public_key().unwrap();
    let private_key = PKey::private_key_from_der(bundle.key.secret_der()).unwrap();
    assert!(leaf_key.public_eq(&private_key));
}

pub fn client_config_without_cert(roots: RootCertStore) -> ClientConfig {
    ClientConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_root_certificates(roots)
        .with_no_client_auth()
}

pub fn client_config_with_cert(roots: RootCertStore, identity: TestIdentity) -> ClientConfig {
    ClientConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_root_certificates(roots)
        .with_client_auth_cert(identity.certs, identity.key)
        .unwrap()
}

pub fn connect(
    client_config: ClientConfig,
    server_config: ServerConfig,
) -> (ClientConnection, ServerConnection, Result<(), rustls::Error>) {
    let mut client = ClientConnection::new(
        Arc::new(client_config),
        ServerName::try_from(SERVER_NAME).unwrap(),
    )
    .unwrap();
    let mut server = ServerConnection::new(Arc::new(server_config)).unwrap();
    let result = handshake(&mut client, &mut server);
    (client, server, result)
}

pub fn handshake(client: &mut ClientConnection, server: &mut ServerConnection) -> Result<(), rustls::Error> {
    for _ in 0..10 {
        transfer(client, server)?;
        transfer(server, client)?;
        if !client.is_handshaking() && !server.is_handshaking() {
            return Ok(());
        }
    }
    Err(rustls::Error::General("handshake did not complete".to_string()))
}

fn transfer(
    left: &mut impl DerefMut<Target = ConnectionCommon<impl SideData>>,
    right: &mut impl DerefMut<Target = ConnectionCommon<impl SideData>>,
) -> Result<(), rustls::Error> {
    while left.wants_write() {
        let mut buf = Vec::new();
        left.write_tls(&mut buf).unwrap();
        let mut offset = 0;
        while offset < buf.len() {
            offset += right.read_tls(&mut &buf[offset..]).unwrap();
        }
        right.process_new_packets()?;
    }
    Ok(())
}
