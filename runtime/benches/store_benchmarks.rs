//! Store Performance Benchmarks
//!
//! - Reducer execution: pure in-memory transitions
//! - Dispatch throughput with and without listeners
//! - Combined reducer overhead per slice
//!
//! Run with: `cargo bench`

#![allow(missing_docs)] // Benchmarks don't need extensive docs
#![allow(dead_code)] // Benchmark data structures may have unused fields

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use statecraft_core::{combine_reducers, scope_reducer, Reducer, Slice};
use statecraft_runtime::Store;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
struct BenchState {
    counter: i64,
    items: Arc<Vec<u64>>,
}

#[derive(Clone, Debug)]
enum BenchAction {
    Increment,
    Push(u64),
    NoOp,
}

#[derive(Clone, Debug, Default)]
struct BenchReducer;

impl Reducer for BenchReducer {
    type State = BenchState;
    type Action = BenchAction;

    fn reduce(&self, state: Option<&BenchState>, action: Option<&BenchAction>) -> BenchState {
        let state = state.cloned().unwrap_or_default();
        match action {
            Some(BenchAction::Increment) => BenchState {
                counter: state.counter + 1,
                ..state
            },
            Some(BenchAction::Push(item)) => {
                let mut items = Vec::with_capacity(state.items.len() + 1);
                items.extend(state.items.iter().copied());
                items.push(*item);
                BenchState {
                    items: Arc::new(items),
                    ..state
                }
            },
            Some(BenchAction::NoOp) | None => state,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Counter;

impl Reducer for Counter {
    type State = i64;
    type Action = BenchAction;

    fn reduce(&self, state: Option<&i64>, action: Option<&BenchAction>) -> i64 {
        let state = state.copied().unwrap_or_default();
        match action {
            Some(BenchAction::Increment) => state + 1,
            _ => state,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Wide {
    a: i64,
    b: i64,
    c: i64,
    d: i64,
}

fn bench_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducer");
    group.throughput(Throughput::Elements(1));

    let state = BenchState::default();
    group.bench_function("increment", |b| {
        b.iter(|| BenchReducer.reduce(black_box(Some(&state)), black_box(Some(&BenchAction::Increment))));
    });
    group.bench_function("noop", |b| {
        b.iter(|| BenchReducer.reduce(black_box(Some(&state)), black_box(Some(&BenchAction::NoOp))));
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    group.bench_function("no_listeners", |b| {
        let store = Store::new(BenchReducer);
        b.iter(|| store.dispatch(black_box(BenchAction::Increment)));
    });

    for listeners in [1usize, 4, 16] {
        group.bench_function(format!("{listeners}_listeners"), |b| {
            let store = Store::new(BenchReducer);
            let subscriptions: Vec<_> = (0..listeners).map(|_| store.subscribe(|| {})).collect();
            b.iter(|| store.dispatch(black_box(BenchAction::Increment)));
            for subscription in &subscriptions {
                subscription.unsubscribe();
            }
        });
    }

    group.bench_function("push_100", |b| {
        b.iter_batched(
            || Store::new(BenchReducer),
            |store| {
                for i in 0..100 {
                    store.dispatch(BenchAction::Push(i));
                }
                store
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_combined(c: &mut Criterion) {
    let mut group = c.benchmark_group("combined");
    group.throughput(Throughput::Elements(1));

    let slices: Vec<Box<dyn Slice<Wide, BenchAction>>> = vec![
        Box::new(scope_reducer("a", Counter, |s: &Wide| &s.a, |s: &mut Wide, v| s.a = v)),
        Box::new(scope_reducer("b", Counter, |s: &Wide| &s.b, |s: &mut Wide, v| s.b = v)),
        Box::new(scope_reducer("c", Counter, |s: &Wide| &s.c, |s: &mut Wide, v| s.c = v)),
        Box::new(scope_reducer("d", Counter, |s: &Wide| &s.d, |s: &mut Wide, v| s.d = v)),
    ];
    let reducer = combine_reducers(slices);
    let state = reducer.initial_state();

    group.bench_function("four_slices", |b| {
        b.iter(|| reducer.reduce(black_box(Some(&state)), black_box(Some(&BenchAction::Increment))));
    });

    group.finish();
}

criterion_group!(benches, bench_reducer, bench_dispatch, bench_combined);
criterion_main!(benches);
