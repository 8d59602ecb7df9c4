// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for deck navigation operations.
//!
//! Measures the performance of:
//! - Single navigation steps (next/previous)
//! - Direct jumps (select)
//! - A full deck walk including activity bookkeeping

use criterion::{criterion_group, criterion_main, Criterion};
use odyssey_showcase::ui::deck::{slides, NavMessage, State};
use std::hint::black_box;
use std::time::Duration;

const HIDE_DELAY: Duration = Duration::from_secs(3);

/// Benchmark single navigation steps.
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_navigation");

    group.bench_function("next", |b| {
        b.iter(|| {
            let mut deck = State::new(slides::total(), HIDE_DELAY);
            deck.handle(NavMessage::Next);
            black_box(&deck);
        });
    });

    group.bench_function("previous_at_first", |b| {
        b.iter(|| {
            let mut deck = State::new(slides::total(), HIDE_DELAY);
            deck.handle(NavMessage::Previous);
            black_box(&deck);
        });
    });

    group.finish();
}

/// Benchmark direct jumps via indicator selection.
fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_navigation");

    group.bench_function("select_middle", |b| {
        b.iter(|| {
            let mut deck = State::new(slides::total(), HIDE_DELAY);
            deck.handle(NavMessage::Select(9));
            black_box(&deck);
        });
    });

    group.finish();
}

/// Benchmark a full walk across the deck and back.
///
/// This is the realistic worst case for a reader paging through the whole
/// document: every step includes the activity bookkeeping that re-arms the
/// chrome hide deadline.
fn bench_full_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_navigation");

    group.bench_function("walk_there_and_back", |b| {
        b.iter(|| {
            let mut deck = State::new(slides::total(), HIDE_DELAY);
            for _ in 0..deck.total() {
                deck.handle(NavMessage::Next);
            }
            for _ in 0..deck.total() {
                deck.handle(NavMessage::Previous);
            }
            black_box(deck.index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_step, bench_select, bench_full_walk);
criterion_main!(benches);
