//! Derived trading analytics over the latest book, position, and VWAP.
//!
//! Everything here is a stateless derivation: the engine recomputes an
//! [`Analytics`] on each book update and the render port reads it. Depth
//! reads are `Option`-guarded so a shallow book degrades to missing
//! outputs instead of panicking.

use crate::{BookSnapshot, Position, Quote, Side, SymbolConfig, Volume};

/// Depth index of the ask level used for the header price, spread, the
/// juice ratio, and short-position PnL. The header convention is the
/// tenth ask level, not the touch.
pub const ASK_REFERENCE_LEVEL: usize = 9;

/// Volume a side must carry before a thin-side signal may fire.
const SIGNAL_MIN_VOLUME: Volume = 5.0;

/// Imbalance signal derived from the juice ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// The bid side dwarfs the reference ask level; ask liquidity is thin.
    BuySideThin,
    /// The reference ask level dwarfs the bid touch; bid liquidity is thin.
    SellSideThin,
}

/// The largest resting quote on one side of the book.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lean {
    pub volume: Volume,
    /// This quote's share of the side's total volume, in percent.
    pub share_pct: f64,
    pub price: f64,
}

/// All header analytics derived from one book snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Analytics {
    /// Ask shown in the header: the [`ASK_REFERENCE_LEVEL`]-indexed level.
    pub best_ask: Option<Quote>,
    /// Bid shown in the header: the touch.
    pub best_bid: Option<Quote>,
    /// Reference ask price minus touch bid price.
    pub spread: Option<f64>,
    /// Juice ratio: reference ask volume over touch bid volume. Only
    /// computed while the spread is under two ticks.
    pub ratio: Option<f64>,
    pub signal: Option<Signal>,
    /// Max-volume ask level.
    pub high_lean: Option<Lean>,
    /// Max-volume bid level.
    pub low_lean: Option<Lean>,
    /// Absolute price distance between the two leans.
    pub lean_diff: Option<f64>,
    /// Unrealized PnL; `None` while flat or the book is too shallow.
    pub pnl: Option<f64>,
}

impl Analytics {
    /// Derive the full header analytics for one snapshot.
    pub fn compute(
        book: &BookSnapshot,
        config: &SymbolConfig,
        position: Option<&Position>,
    ) -> Self {
        let best_ask = book.ask_level(ASK_REFERENCE_LEVEL).copied();
        let best_bid = book.bid_level(0).copied();
        let spread = match (best_ask, best_bid) {
            (Some(a), Some(b)) => Some(a.price - b.price),
            _ => None,
        };

        let (ratio, signal) = match (best_ask, best_bid, spread) {
            (Some(a), Some(b), Some(s)) if s < config.tick_size() * 2.0 => {
                let ratio = a.volume / b.volume;
                (Some(ratio), juice_signal(ratio, b.volume, a.volume))
            }
            _ => (None, None),
        };

        let high_lean = lean(book, Side::Sell);
        let low_lean = lean(book, Side::Buy);
        let lean_diff = match (high_lean, low_lean) {
            (Some(h), Some(l)) => Some((h.price - l.price).abs()),
            _ => None,
        };

        let pnl = position.and_then(|p| unrealized_pnl(p, book));

        Self {
            best_ask,
            best_bid,
            spread,
            ratio,
            signal,
            high_lean,
            low_lean,
            lean_diff,
            pnl,
        }
    }
}

/// Map a juice ratio to a thin-side signal.
///
/// Thresholds are strict: a ratio of exactly 0.1 or 10 fires nothing,
/// and the thin side's counterpart must carry at least
/// [`SIGNAL_MIN_VOLUME`] to count as meaningful.
pub fn juice_signal(ratio: f64, bid_volume: Volume, ask_volume: Volume) -> Option<Signal> {
    if ratio < 0.1 && bid_volume >= SIGNAL_MIN_VOLUME {
        Some(Signal::BuySideThin)
    } else if ratio > 10.0 && ask_volume >= SIGNAL_MIN_VOLUME {
        Some(Signal::SellSideThin)
    } else {
        None
    }
}

/// The max-volume quote on a side, with its share of the side's total.
pub fn lean(book: &BookSnapshot, side: Side) -> Option<Lean> {
    let quote = book.max_volume_quote(side)?;
    let total = book.total_volume(side);
    let share_pct = if total > 0.0 {
        quote.volume / total * 100.0
    } else {
        0.0
    };
    Some(Lean {
        volume: quote.volume,
        share_pct,
        price: quote.price,
    })
}

/// Unrealized PnL against the current book.
///
/// Shorts are marked against the reference ask level, longs against the
/// touch bid — the same asymmetric depth convention as the header.
pub fn unrealized_pnl(position: &Position, book: &BookSnapshot) -> Option<f64> {
    if position.is_flat() {
        return None;
    }
    if position.is_short() {
        let ask = book.ask_level(ASK_REFERENCE_LEVEL)?;
        Some((position.avg_price - ask.price) * -1.0 * position.qty)
    } else {
        let bid = book.bid_level(0)?;
        Some((bid.price - position.avg_price) * position.qty)
    }
}

/// Largest adjacent-level price gap near a side's VWAP depth.
///
/// Asks look at the two gaps nearest the reference level (pairs 9–8 and
/// 8–7); bids at the two gaps nearest the touch (pairs 0–1 and 1–2). A
/// local dispersion decoration, not a whole-book statistic.
pub fn max_price_diff(quotes: &[Quote], side: Side) -> Option<f64> {
    let pairs: [(usize, usize); 2] = match side {
        Side::Sell => [(ASK_REFERENCE_LEVEL, ASK_REFERENCE_LEVEL - 1), (8, 7)],
        Side::Buy => [(0, 1), (1, 2)],
    };
    let mut max_diff: Option<f64> = None;
    for (a, b) in pairs {
        let diff = (quotes.get(a)?.price - quotes.get(b)?.price).abs();
        max_diff = Some(max_diff.map_or(diff, |m| diff.max(m)));
    }
    max_diff
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten levels a side: bids descend from `bid0`, asks ascend from
    /// `ask0`, all at `volume` except where a test overrides one level.
    fn deep_book(bid0: f64, ask0: f64, tick: f64, volume: Volume) -> BookSnapshot {
        let bids = (0..10)
            .map(|i| Quote::new(bid0 - tick * i as f64, volume))
            .collect();
        let asks = (0..10)
            .map(|i| Quote::new(ask0 + tick * i as f64, volume))
            .collect();
        BookSnapshot::new(bids, asks)
    }

    #[test]
    fn header_uses_reference_ask_and_touch_bid() {
        let config = SymbolConfig::new(0.01);
        let book = deep_book(99.99, 100.00, 0.01, 2.0);
        let analytics = Analytics::compute(&book, &config, None);

        assert_eq!(analytics.best_bid.unwrap().price, 99.99);
        assert_eq!(analytics.best_ask.unwrap().price, 100.00 + 0.01 * 9.0);
        let spread = analytics.spread.unwrap();
        assert!((spread - 0.10).abs() < 1e-9);
    }

    #[test]
    fn shallow_book_degrades_to_none() {
        let config = SymbolConfig::new(0.01);
        let book = BookSnapshot::new(
            vec![Quote::new(99.99, 1.0)],
            vec![Quote::new(100.00, 1.0)],
        );
        let analytics = Analytics::compute(&book, &config, Some(&Position::new(-1.0, 100.0)));

        assert!(analytics.best_ask.is_none());
        assert!(analytics.spread.is_none());
        assert!(analytics.ratio.is_none());
        assert!(analytics.pnl.is_none());
        // Leans only need a non-empty side.
        assert!(analytics.high_lean.is_some());
    }

    #[test]
    fn juice_only_computed_inside_spread_threshold() {
        let config = SymbolConfig::new(0.01);
        // Reference ask is 9 ticks above the touch ask, so the header
        // spread is wide and no ratio appears.
        let book = deep_book(99.99, 100.00, 0.01, 2.0);
        let analytics = Analytics::compute(&book, &config, None);
        assert!(analytics.ratio.is_none());
        assert!(analytics.signal.is_none());

        // Collapse the ask side onto one price: reference level now sits
        // a single tick above the bid touch.
        let flat_asks = (0..10).map(|_| Quote::new(100.00, 2.0)).collect();
        let book = BookSnapshot::new(book.bids.clone(), flat_asks);
        let analytics = Analytics::compute(&book, &config, None);
        assert!(analytics.ratio.is_some());
    }

    #[test]
    fn buy_side_thin_fires_on_low_ratio() {
        // ratio 0.4 / 5.0 = 0.08 < 0.1 with bid volume at the floor.
        assert_eq!(
            juice_signal(0.4 / 5.0, 5.0, 0.4),
            Some(Signal::BuySideThin)
        );
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(juice_signal(0.1, 100.0, 100.0), None);
        assert_eq!(juice_signal(10.0, 100.0, 100.0), None);
    }

    #[test]
    fn thin_signal_needs_minimum_volume() {
        // Ratio qualifies but the bid side is too small to matter.
        assert_eq!(juice_signal(0.05, 4.9, 0.2), None);
        // Sell-side thin: ask must carry the minimum.
        assert_eq!(juice_signal(20.0, 0.2, 4.9), None);
        assert_eq!(juice_signal(20.0, 0.2, 5.0), Some(Signal::SellSideThin));
    }

    #[test]
    fn pnl_short_marks_against_reference_ask() {
        // Ten asks descending from 98 at the reference level.
        let mut book = deep_book(97.0, 97.1, 0.1, 1.0);
        book.asks[ASK_REFERENCE_LEVEL].price = 98.0;
        let pnl = unrealized_pnl(&Position::new(-2.0, 100.0), &book).unwrap();
        assert!((pnl - 4.0).abs() < 1e-9);
    }

    #[test]
    fn pnl_long_marks_against_touch_bid() {
        let book = deep_book(102.0, 102.1, 0.1, 1.0);
        let pnl = unrealized_pnl(&Position::new(2.0, 100.0), &book).unwrap();
        assert!((pnl - 4.0).abs() < 1e-9);
    }

    #[test]
    fn pnl_flat_is_none() {
        let book = deep_book(99.99, 100.00, 0.01, 1.0);
        assert_eq!(unrealized_pnl(&Position::new(0.0, 100.0), &book), None);
    }

    #[test]
    fn lean_reports_share_of_side() {
        let mut book = deep_book(99.99, 100.00, 0.01, 1.0);
        book.bids[3].volume = 6.0;
        let lean = lean(&book, Side::Buy).unwrap();
        assert_eq!(lean.volume, 6.0);
        assert_eq!(lean.price, book.bids[3].price);
        // 6 of 15 total.
        assert!((lean.share_pct - 40.0).abs() < 1e-9);
    }

    #[test]
    fn lean_diff_is_absolute() {
        let config = SymbolConfig::new(0.01);
        let mut book = deep_book(99.99, 100.00, 0.01, 1.0);
        book.bids[0].volume = 9.0; // low lean at 99.99
        book.asks[5].volume = 9.0; // high lean at 100.05
        let analytics = Analytics::compute(&book, &config, None);
        let diff = analytics.lean_diff.unwrap();
        assert!((diff - 0.06).abs() < 1e-9);
    }

    #[test]
    fn max_price_diff_near_reference_depth() {
        let mut book = deep_book(99.99, 100.00, 0.01, 1.0);
        // Widen the 8->9 ask gap; the 7->8 gap stays one tick.
        book.asks[9].price = 100.20;
        let ask_gap = max_price_diff(&book.asks, Side::Sell).unwrap();
        assert!((ask_gap - 0.12).abs() < 1e-9);

        // Bid gaps near the touch.
        let bid_gap = max_price_diff(&book.bids, Side::Buy).unwrap();
        assert!((bid_gap - 0.01).abs() < 1e-9);
    }

    #[test]
    fn max_price_diff_requires_depth() {
        let shallow = vec![Quote::new(100.0, 1.0), Quote::new(100.1, 1.0)];
        assert_eq!(max_price_diff(&shallow, Side::Sell), None);
        assert_eq!(max_price_diff(&shallow, Side::Buy), None);
    }
}
