use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nonce_check::{ConsistencyChecker, SignatureInputs};
use rand::SeedableRng;
use rand::rngs::StdRng;
use secp256k1_scalar::{BigUint, MontgomeryBackend, RandomScalar, Secp256k1, inverse_mod};

fn consistent_inputs() -> SignatureInputs {
    let mut rng = StdRng::seed_from_u64(42);
    let n = Secp256k1::order();
    let k = BigUint::random(&mut rng);
    let d = BigUint::random(&mut rng);
    let r = BigUint::random(&mut rng);
    let z = BigUint::random(&mut rng);
    let s = (inverse_mod(&k, &n).expect("invertible") * (&z + &d * &r)) % &n;
    SignatureInputs { r, s, z, k, d }
}

fn bench_check(c: &mut Criterion) {
    let inputs = consistent_inputs();

    let checker = ConsistencyChecker::secp256k1();
    c.bench_function("check_biguint", |bencher| {
        bencher.iter(|| {
            let report = checker.check(black_box(&inputs)).expect("check");
            black_box(report);
        })
    });

    let checker = ConsistencyChecker::new(MontgomeryBackend);
    c.bench_function("check_montgomery", |bencher| {
        bencher.iter(|| {
            let report = checker.check(black_box(&inputs)).expect("check");
            black_box(report);
        })
    });
}

criterion_group!(benches, bench_check);
criterion_main!(benches);
