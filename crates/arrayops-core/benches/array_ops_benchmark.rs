// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use arrayops_core::ops::{copy, max, reverse, sum_with};
use arrayops_core::policy::{Checked, OverflowPolicy, Saturating, Wrapping};
use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
    measurement::WallTime,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 4] = [16, 1_024, 65_536, 1_048_576];

/// Seeded input so runs are comparable. Values are small enough that the
/// checked sum never overflows and all policies scan the whole buffer.
fn make_input(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random_range(-1_000..=1_000)).collect()
}

fn bench_sum_policy<P>(group: &mut BenchmarkGroup<'_, WallTime>, data: &[i32])
where
    P: OverflowPolicy,
{
    group.bench_with_input(BenchmarkId::new(P::NAME, data.len()), data, |b, data| {
        b.iter(|| sum_with::<P, i32>(black_box(data)))
    });
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for &len in &SIZES {
        let data = make_input(len);
        group.throughput(Throughput::Elements(len as u64));
        bench_sum_policy::<Wrapping>(&mut group, &data);
        bench_sum_policy::<Checked>(&mut group, &data);
        bench_sum_policy::<Saturating>(&mut group, &data);
    }
    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for &len in &SIZES {
        let mut data = make_input(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                let status = reverse(black_box(&mut data));
                if status.is_failure() {
                    panic!("Benchmark configuration error: reverse rejected a borrowed buffer.");
                }
            })
        });
    }
    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy");
    for &len in &SIZES {
        let src = make_input(len);
        let mut dst = vec![0i32; len];
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                let status = copy(black_box(&mut dst), black_box(&src), len);
                if status.is_failure() {
                    panic!("Benchmark configuration error: copy rejected equally sized buffers.");
                }
            })
        });
    }
    group.finish();
}

fn bench_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("max");
    for &len in &SIZES {
        let data = make_input(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| max(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sum, bench_reverse, bench_copy, bench_max);
criterion_main!(benches);
