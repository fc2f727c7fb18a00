use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use secp256k1_scalar::{
    inverse_mod, BigUint, MontgomeryBackend, RandomScalar, Scalar, ScalarBackend, Secp256k1,
};

fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Scalar::random(&mut rng);
    let b = Scalar::random(&mut rng);
    c.bench_function("montgomery_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });

    let x = a.to_biguint();
    let y = b.to_biguint();
    let n = Secp256k1::order();
    c.bench_function("biguint_mul_mod", |bencher| {
        bencher.iter(|| black_box((black_box(&x) * black_box(&y)) % &n))
    });
}

fn bench_scalar_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let k = Scalar::random(&mut rng);
    c.bench_function("montgomery_invert", |bencher| {
        bencher.iter(|| {
            let inv = MontgomeryBackend.mod_inverse(black_box(&k)).expect("invert");
            black_box(inv);
        })
    });

    let k = BigUint::random(&mut rng);
    let n = Secp256k1::order();
    c.bench_function("biguint_inverse_mod", |bencher| {
        bencher.iter(|| {
            let inv = inverse_mod(black_box(&k), &n).expect("invert");
            black_box(inv);
        })
    });
}

criterion_group!(benches, bench_scalar_mul, bench_scalar_inverse);
criterion_main!(benches);
