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
use rand_seq::{IteratorShuffle, SliceShuffle};

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench
);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    c.bench_function("seq_shuffle_100", |b| {
        let mut rng = Pcg32::seed_from_u64(123);
        let mut buf = [0i32; 100];
        rng.fill(&mut buf);
        let x = black_box(&mut buf);
        b.iter(|| {
            x.shuffle(&mut rng);
            x[0]
        })
    });

    for length in [1, 10, 100, 1000, 10000] {
        c.bench_function(format!("shuffle_{length}").as_str(), |b| {
            let mut rng = Pcg32::seed_from_u64(123);
            let mut vec: Vec<usize> = (0..length).collect();
            b.iter(|| {
                vec.shuffle(&mut rng);
                vec[0]
            })
        });
    }

    c.bench_function("shuffled_collect_100", |b| {
        let mut rng = Pcg32::seed_from_u64(123);
        b.iter(|| (0..black_box(100u32)).shuffled(&mut rng))
    });
}
