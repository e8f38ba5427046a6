/// See https://bheisler.github.io/criterion.rs/book/getting_started.html to add more benchmarks.
#[macro_use]
extern crate criterion;

use criterion::Criterion;
use ecmh::group::Secp256k1;
use ecmh::MultisetHash;
use rand::Rng;

fn random_data(n: usize) -> Vec<[u8; 32]> {
  let mut rng = rand::thread_rng();
  (0..n).map(|_| rng.gen()).collect()
}

fn bench_add(elems: &[[u8; 32]]) {
  let mut acc = MultisetHash::<Secp256k1>::new();
  for elem in elems {
    acc.add(elem);
  }
}

fn bench_remove(elems: &[[u8; 32]]) {
  let mut acc = MultisetHash::<Secp256k1>::new();
  for elem in elems {
    acc.remove(elem);
  }
}

fn criterion_benchmark(c: &mut Criterion) {
  let elems = random_data(100);
  let elems_1 = elems.clone();
  let elems_10 = elems.clone();
  let elems_100 = elems.clone();

  c.bench_function("multiset_add_1", move |b| b.iter(|| bench_add(&elems_1[0..1])));
  c.bench_function("multiset_add_10", move |b| {
    b.iter(|| bench_add(&elems_10[0..10]))
  });
  c.bench_function("multiset_add_100", move |b| b.iter(|| bench_add(&elems_100)));

  let elems_remove = elems.clone();
  c.bench_function("multiset_remove_10", move |b| {
    b.iter(|| bench_remove(&elems_remove[0..10]))
  });

  let mut acc = MultisetHash::<Secp256k1>::new();
  for elem in &elems {
    acc.add(elem);
  }
  let other = acc.clone();
  let combined = acc.clone();
  c.bench_function("multiset_combine", move |b| {
    b.iter(|| {
      let mut lhs = combined.clone();
      lhs.combine(&other);
      lhs
    })
  });

  let finalized = acc.clone();
  c.bench_function("multiset_finalize", move |b| b.iter(|| finalized.finalize()));

  let serialized = acc.serialize();
  c.bench_function("multiset_parse", move |b| {
    b.iter(|| MultisetHash::<Secp256k1>::parse(&serialized))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
