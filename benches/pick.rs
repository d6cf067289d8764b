// Copyright 2025 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rand_seq::{IndexedPick, IteratorPick};

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench
);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    c.bench_function("seq_slice_pick_1_of_100", |b| {
        let mut rng = Pcg32::seed_from_u64(123);
        let mut buf = [0i32; 100];
        rng.fill(&mut buf);
        let x = black_box(&buf);

        b.iter(|| x.pick(&mut rng).unwrap())
    });

    c.bench_function("seq_iter_pick_1_of_100_hinted", |b| {
        let mut rng = Pcg32::seed_from_u64(123);
        b.iter(|| (0..black_box(100u32)).pick(&mut rng).unwrap())
    });

    c.bench_function("seq_iter_pick_1_of_100_unhinted", |b| {
        let mut rng = Pcg32::seed_from_u64(123);
        // The filter defeats the exact size hint, forcing the reservoir
        // path.
        b.iter(|| {
            (0..100u32)
                .filter(|_| black_box(true))
                .pick(&mut rng)
                .unwrap()
        })
    });
}
