use basic_collections::LinkedList;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

fn bench_linked_list(c: &mut Criterion) {
    let n = 64;
    {
        let mut group = c.benchmark_group("std LinkedList vs LinkedList (PushBack 64)");
        group.bench_function("std::collections::LinkedList", |b| {
            b.iter(|| {
                let mut l = std::collections::LinkedList::new();
                for i in 0..n {
                    l.push_back(black_box(i as i32));
                }
                l
            })
        });

        group.bench_function("LinkedList<i32, u32>", |b| {
            b.iter(|| {
                let mut l: LinkedList<i32> = LinkedList::new();
                for i in 0..n {
                    l.insert_tail(black_box(i as i32));
                }
                l
            })
        });

        group.bench_function("LinkedList<i32, u16>", |b| {
            b.iter(|| {
                let mut l: LinkedList<i32, u16> = LinkedList::new();
                for i in 0..n {
                    l.insert_tail(black_box(i as i32));
                }
                l
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Link-swapping sort (reversed 64)");
        let reversed: LinkedList<i32> = (0..n as i32).rev().collect();
        group.bench_function("LinkedList::sort", |b| {
            b.iter_batched(
                || reversed.clone(),
                |mut l| {
                    l.sort();
                    l
                },
                BatchSize::SmallInput,
            )
        });
        group.finish();
    }
}

criterion_group!(benches, bench_linked_list);
criterion_main!(benches);
