//! # Response Verification Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Full signature check (two Ed25519 verifications) | < 200μs |
//! | Rejected payload signature | < 200μs |
//! | Blob decode only | < 5μs |
//! | Parallel verification | scales with cores |

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rayon::prelude::*;

use rv_signing::{SignatureBlob, SignatureParameters, SignatureVerifier, TracingLogger};
use rv_tests::fixtures::{signer_expiring_in, test_clock};

/// Verifier whose failures go to `tracing`. No subscriber is installed, so
/// failing iterations do not accumulate log records.
fn verifier() -> SignatureVerifier {
    SignatureVerifier::new(Arc::new(test_clock()), Arc::new(TracingLogger))
}

fn bench_signature_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature-verification");
    group.measurement_time(Duration::from_secs(10));

    let (root, signer) = signer_expiring_in(30);
    let root_key = root.verifying_key();
    let verifier = verifier();

    for body_size in [0usize, 1_024, 64 * 1_024] {
        let parameters = SignatureParameters::new(1_710_072_000_000)
            .with_message(vec![b'x'; body_size])
            .with_nonce(b"1234567890ab".to_vec())
            .with_etag("97d4f0d2353d784a");
        let signature = signer.sign_with_random_salt(&parameters).to_base64();

        group.throughput(Throughput::Bytes(body_size as u64));
        group.bench_with_input(
            BenchmarkId::new("verify", body_size),
            &(signature, parameters),
            |b, (signature, parameters)| {
                b.iter(|| black_box(verifier.verify(signature, parameters, &root_key)))
            },
        );
    }

    let parameters = SignatureParameters::new(0).with_message("Hello World");
    let mut tampered = signer.sign_with_random_salt(&parameters);
    tampered.payload[0] ^= 1;
    let tampered = tampered.to_base64();
    group.bench_function("verify_tampered", |b| {
        b.iter(|| black_box(verifier.verify(&tampered, &parameters, &root_key)))
    });

    let signature = signer.sign_with_random_salt(&parameters).to_base64();
    group.bench_function("decode_blob", |b| {
        b.iter(|| black_box(SignatureBlob::from_base64(&signature).is_ok()))
    });

    group.finish();
}

fn bench_parallel_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel-verification");

    let (root, signer) = signer_expiring_in(30);
    let root_key = root.verifying_key();
    let verifier = verifier();

    for batch in [10usize, 100, 1_000] {
        let cases: Vec<(SignatureParameters, String)> = (0..batch as u64)
            .map(|i| {
                let parameters = SignatureParameters::new(i).with_message(i.to_string());
                let signature = signer.sign_with_random_salt(&parameters).to_base64();
                (parameters, signature)
            })
            .collect();

        group.throughput(Throughput::Elements(batch as u64));
        group.bench_with_input(BenchmarkId::new("par_verify", batch), &cases, |b, cases| {
            b.iter(|| {
                cases
                    .par_iter()
                    .all(|(parameters, signature)| verifier.verify(signature, parameters, &root_key))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_signature_verification, bench_parallel_verification);
criterion_main!(benches);
