// Performance benchmarks for keystore-tls
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keystore_tls::ssl::ssl::create_certificate_store;
use keystore_tls::ssl::structs::certificate_store::CertificateStore;
use keystore_tls::ssl::structs::certificate_store_config::CertificateStoreConfig;
use keystore_tls::ssl::structs::container_decoder::ContainerDecoder;
use keystore_tls::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use keystore_tls::ssl::structs::passphrase::Passphrase;
use std::hint::black_box;
use std::sync::Arc;
use tempfile::TempDir;

fn create_store() -> (TempDir, Arc<CertificateStore>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.p12");
    let passphrase = Passphrase::from("secret");
    std::fs::write(&path, ContainerDecoder::generate_self_signed("server.example.com", &passphrase).unwrap()).unwrap();
    let store = create_certificate_store(CertificateStoreConfig::new(path.to_str().unwrap(), passphrase)).unwrap();
    (dir, store)
}

fn bench_get_current(c: &mut Criterion) {
    let (_dir, store) = create_store();

    c.bench_function("get_current", |b| {
        b.iter(|| {
            black_box(store.get_current().unwrap());
        });
    });
}

fn bench_resolver_current_key(c: &mut Criterion) {
    let (_dir, store) = create_store();
    let resolver = DynamicCertificateResolver::new(store);

    c.bench_function("resolver_current_key", |b| {
        b.iter(|| {
            black_box(resolver.current_key());
        });
    });
}

fn bench_get_current_contended(c: &mut Criterion) {
    let (_dir, store) = create_store();
    let mut group = c.benchmark_group("get_current_with_readers");

    for readers in [1usize, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(readers), readers, |b, &readers| {
            b.iter(|| {
                std::thread::scope(|scope| {
                    for _ in 0..readers {
                        scope.spawn(|| {
                            for _ in 0..1000 {
                                black_box(store.get_current().unwrap());
                            }
                        });
                    }
                });
            });
        });
    }

    group.finish();
}

fn bench_reload(c: &mut Criterion) {
    let (_dir, store) = create_store();

    c.bench_function("reload", |b| {
        b.iter(|| {
            store.reload().unwrap();
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let passphrase = Passphrase::from("secret");
    let container = ContainerDecoder::generate_self_signed("server.example.com", &passphrase).unwrap();

    c.bench_function("decode_keystore", |b| {
        b.iter(|| {
            black_box(ContainerDecoder::decode(&container, &passphrase).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_get_current,
    bench_resolver_current_key,
    bench_get_current_contended,
    bench_reload,
    bench_decode,
);

criterion_main!(benches);
