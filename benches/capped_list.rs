use capped_collections::{CappedList, ContiguousCappedList, DynamicCappedList, StackCappedList};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;

fn bench_push(c: &mut Criterion) {
    let n = 64;
    {
        let mut group = c.benchmark_group("PushBack 64");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("ContiguousCappedList<i32>", |b| {
            b.iter(|| {
                let mut l = ContiguousCappedList::new(n);
                for i in 0..n {
                    let _ = l.push_back(black_box(i as i32));
                }
                l
            })
        });

        group.bench_function("DynamicCappedList<i32>", |b| {
            b.iter(|| {
                let mut l = DynamicCappedList::new(n);
                for i in 0..n {
                    let _ = l.push_back(black_box(i as i32));
                }
                l
            })
        });

        group.bench_function("StackCappedList<i32, 64>", |b| {
            b.iter(|| {
                let mut l: StackCappedList<i32, 64> = StackCappedList::new();
                for i in 0..n {
                    let _ = l.push_back(black_box(i as i32));
                }
                l
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("PushFront 64 (shifting)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("ContiguousCappedList<i32>", |b| {
            b.iter(|| {
                let mut l = ContiguousCappedList::new(n);
                for i in 0..n {
                    let _ = l.push_front(black_box(i as i32));
                }
                l
            })
        });

        group.bench_function("DynamicCappedList<i32>", |b| {
            b.iter(|| {
                let mut l = DynamicCappedList::new(n);
                for i in 0..n {
                    let _ = l.push_front(black_box(i as i32));
                }
                l
            })
        });
        group.finish();
    }
}

fn bench_drain_front(c: &mut Criterion) {
    let n = 64;
    let mut group = c.benchmark_group("PopFront 64 (compaction)");

    group.bench_function("ContiguousCappedList<i32>", |b| {
        b.iter(|| {
            let mut l = ContiguousCappedList::new(n);
            l.extend_back(0..n as i32);
            while let Some(x) = l.pop_front() {
                black_box(x);
            }
        })
    });

    group.bench_function("DynamicCappedList<i32>", |b| {
        b.iter(|| {
            let mut l = DynamicCappedList::new(n);
            l.extend_back(0..n as i32);
            while let Some(x) = l.pop_front() {
                black_box(x);
            }
        })
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let n = 64;
    let mut group = c.benchmark_group("IndexOf / LastIndexOf 64");
    let mut l = ContiguousCappedList::new(n);
    l.extend_back((0..n as i32).map(|i| i % 8));

    group.bench_function("index_of", |b| {
        b.iter(|| black_box(l.index_of(black_box(&7))))
    });
    group.bench_function("last_index_of", |b| {
        b.iter(|| black_box(l.last_index_of(black_box(&0))))
    });
    group.finish();
}

criterion_group!(benches, bench_push, bench_drain_front, bench_search);
criterion_main!(benches);
