use std::process::exit;
use clap::Parser;
use log::{error, info};
use keystore_tls::common::common::setup_logging;
use keystore_tls::config::structs::configuration::Configuration;
use keystore_tls::ssl::ssl::{build_server_tls_policy, create_certificate_store};
use keystore_tls::ssl::structs::certificate_store_config::CertificateStoreConfig;
use keystore_tls::ssl::structs::container_decoder::ContainerDecoder;
use keystore_tls::structs::Cli;

fn main()
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.keystore_gen {
        keystore_gen(&config);
        exit(0);
    }

    let store = match create_certificate_store(CertificateStoreConfig::from(&config.identity)) {
        Ok(store) => store,
        Err(e) => {
            error!("[CERTIFICATE] Unable to load keystore {}: {}", config.identity.keystore_path, e);
            exit(1);
        }
    };

    let policy = match build_server_tls_policy(&config.identity.ca_bundle_path, store.clone()) {
        Ok(policy) => policy,
        Err(e) => {
            error!("[POLICY] Unable to build TLS policy: {}", e);
            exit(1);
        }
    };

    if let Err(e) = policy.server_config() {
        error!("[POLICY] Unable to build server configuration: {}", e);
        exit(1);
    }

    match store.get_current() {
        Ok(bundle) => {
            info!("[CERTIFICATE] Serving {}", bundle.leaf);
            info!("[CERTIFICATE] Chain length {}, generation {}", bundle.certs.len(), bundle.generation);
        }
        Err(e) => {
            error!("[CERTIFICATE] {}", e);
            exit(1);
        }
    }
    info!(
        "[POLICY] Client certificates {:?}, minimum version {:?}, {} trusted roots ({:?})",
        policy.client_auth(),
        policy.min_protocol_version(),
        policy.trust_bundle().len(),
        policy.trust_bundle().source
    );
}

fn keystore_gen(config: &Configuration)
{
    info!("[KEYSTOREGEN] Requesting to generate a self-signed keystore for {}", config.identity.selfsigned_domain);

    let container = match ContainerDecoder::generate_self_signed(
        &config.identity.selfsigned_domain,
        &config.identity.keystore_password,
    ) {
        Ok(container) => container,
        Err(e) => {
            error!("[KEYSTOREGEN] {}", e);
            exit(1);
        }
    };

    match std::fs::write(&config.identity.keystore_path, container) {
        Ok(_) => {
            info!("[KEYSTOREGEN] The keystore {} has been generated, use it only for development reasons", config.identity.keystore_path);
        }
        Err(e) => {
            error!("[KEYSTOREGEN] The keystore {} could not be generated: {}", config.identity.keystore_path, e);
            exit(1);
        }
    }
}
