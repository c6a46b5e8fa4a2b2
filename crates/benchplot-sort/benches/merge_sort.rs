use benchplot_sort::{merge_sort, random_array};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");
    for exp in [10u32, 14, 18] {
        let size = 1usize << exp;
        let input = random_array(size, &mut StdRng::seed_from_u64(42));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut items = input.clone();
                merge_sort(black_box(&mut items));
                items
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge_sort);
criterion_main!(benches);
