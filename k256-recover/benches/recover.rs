//! secp256k1 public key recovery benchmarks

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use k256_recover::{encoding::parse_integer, recover, recover_from_integers};

const DIGEST: &str = "0xfcde2b2edba56bf408601fb721fe9b5c338d10ee429ea04fae5511b68fbf8fb9";
const R: &str = "73822833206246044331228008262087004113076292229679808334250850393445001014761";
const S: &str = "58995174607243353628346858794753620798088291196940745194581481841927132845752";

fn bench_recover(c: &mut Criterion) {
    let mut group = c.benchmark_group("recover");

    group.bench_function("recover", |b| {
        b.iter(|| recover(black_box(DIGEST), black_box(R), black_box(S), 1).unwrap())
    });

    let e = parse_integer(DIGEST).unwrap();
    let r = parse_integer(R).unwrap();
    let s = parse_integer(S).unwrap();

    group.bench_function("recover_from_integers", |b| {
        b.iter(|| recover_from_integers(black_box(&e), black_box(&r), black_box(&s), 1).unwrap())
    });

    group.bench_function("wrong_parity", |b| {
        b.iter(|| recover_from_integers(black_box(&e), black_box(&r), black_box(&s), 0).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_recover);
criterion_main!(benches);
