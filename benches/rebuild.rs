//! Rebuild-and-replay benchmarks for the ladder engine.
//!
//! Measures the full book-update pipeline (anchor, reallocation,
//! quote/trade/working replay, analytics) as the trade log grows.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ladderbook::{BookSnapshot, LadderEngine, Message, Quote, Side, SymbolConfig, Trade, WorkingOrder};

/// Ten-level book anchored at 99.99 / 100.00.
fn build_book() -> BookSnapshot {
    let bids = (0..10)
        .map(|i| Quote::new(99.99 - 0.01 * i as f64, 2.0 + i as f64))
        .collect();
    let asks = (0..10)
        .map(|i| Quote::new(100.00 + 0.01 * i as f64, 2.0 + i as f64))
        .collect();
    BookSnapshot::new(bids, asks)
}

/// Engine primed with a book, working orders, and `trades` log entries
/// spread across the visible window.
fn build_engine(trades: usize) -> LadderEngine {
    let mut engine = LadderEngine::with_config(SymbolConfig::new(0.01));
    engine.apply(Message::Book(build_book())).unwrap();
    engine
        .apply(Message::WorkingOrders(vec![
            WorkingOrder::new("w1", Side::Buy, 99.97, 1.5),
            WorkingOrder::new("w2", Side::Sell, 100.03, 2.5),
        ]))
        .unwrap();
    for i in 0..trades {
        let price = 99.90 + 0.01 * (i % 20) as f64;
        engine
            .apply(Message::Trade(Trade::new(price, 0.1)))
            .unwrap();
    }
    engine
}

/// Benchmark: full book update with a populated trade log.
fn bench_book_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_update");

    for trades in [0usize, 100, 1000, 4096] {
        group.bench_with_input(
            BenchmarkId::from_parameter(trades),
            &trades,
            |b, &trades| {
                let mut engine = build_engine(trades);
                let book = build_book();
                b.iter(|| {
                    engine
                        .apply(Message::Book(black_box(book.clone())))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: a single trade print against a built grid.
fn bench_trade_reconcile(c: &mut Criterion) {
    c.bench_function("trade_reconcile", |b| {
        let mut engine = build_engine(0);
        b.iter(|| {
            engine
                .apply(Message::Trade(black_box(Trade::new(100.00, 0.1))))
                .unwrap();
        });
    });
}

/// Benchmark: wheel gesture (rebuild without re-anchoring).
fn bench_wheel(c: &mut Criterion) {
    c.bench_function("wheel_rebuild", |b| {
        let mut engine = build_engine(100);
        let mut flip = 1.0f64;
        b.iter(|| {
            flip = -flip;
            engine.wheel(black_box(100.0 * flip));
        });
    });
}

criterion_group!(benches, bench_book_update, bench_trade_reconcile, bench_wheel);
criterion_main!(benches);
