use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use docroster::{
    core::{query, store::DoctorStore},
    doctor::DoctorDraft,
};

fn draft(i: u64) -> DoctorDraft {
    DoctorDraft::new(
        format!("First{i}"),
        format!("Last{i}"),
        format!("doc{i}@clinic.org"),
        "Cardiology",
        "555-0100",
    )
}

fn filled(n: u64) -> DoctorStore {
    let mut store = DoctorStore::new();
    for i in 0..n {
        let _ = store.create(draft(i)).expect("create");
    }
    store
}

fn bench_creates(c: &mut Criterion) {
    c.bench_function("store_create_10k", |b| {
        b.iter(|| filled(10_000));
    });
}

fn bench_updates(c: &mut Criterion) {
    c.bench_function("store_update_10k", |b| {
        b.iter(|| {
            let mut store = filled(10_000);
            let ids = store.ordered_ids().to_vec();
            for (i, id) in ids.iter().enumerate() {
                let _ = store.update(id, draft(i as u64 + 1)).expect("update");
            }
        });
    });
}

fn bench_list_and_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_query");
    let store = filled(10_000);

    for limit in [10usize, 100usize, 1000usize] {
        group.bench_with_input(BenchmarkId::new("list", limit), &limit, |b, &limit| {
            b.iter(|| store.list(3, limit));
        });
    }

    let all = store.list(1, usize::MAX);
    group.bench_function("search_all", |b| {
        b.iter(|| query::search(&all, "last99"));
    });

    group.finish();
}

criterion_group!(benches, bench_creates, bench_updates, bench_list_and_search);
criterion_main!(benches);
