use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;
use treap_collections::treap::{TreapList, TreapSet};

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_treap_set_insert(c: &mut Criterion) {
    c.bench_function("bench treap set insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = TreapSet::new().seeded([2, 2, 2, 2]);
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_treap_set_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = TreapSet::new().seeded([2, 2, 2, 2]);
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.next_u32();
        set.insert(value);
        values.push(value);
    }

    c.bench_function("bench treap set contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_vec_insert_middle(c: &mut Criterion) {
    c.bench_function("bench vec insert middle", |b| {
        b.iter(|| {
            let mut list = Vec::new();
            for i in 0..NUM_OF_OPERATIONS {
                list.insert(i / 2, i);
            }
        })
    });
}

fn bench_treap_list_insert_middle(c: &mut Criterion) {
    c.bench_function("bench treap list insert middle", |b| {
        b.iter(|| {
            let mut list = TreapList::new().seeded([2, 2, 2, 2]);
            for i in 0..NUM_OF_OPERATIONS {
                black_box(list.insert(i / 2, i)).ok();
            }
        })
    });
}

fn bench_treap_list_get(c: &mut Criterion) {
    let list: TreapList<usize> = (0..NUM_OF_OPERATIONS).collect();
    c.bench_function("bench treap list get", move |b| {
        b.iter(|| {
            for i in 0..NUM_OF_OPERATIONS {
                black_box(list.get(i));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_treap_set_insert,
    bench_treap_set_contains,
    bench_vec_insert_middle,
    bench_treap_list_insert_middle,
    bench_treap_list_get,
);
criterion_main!(benches);
