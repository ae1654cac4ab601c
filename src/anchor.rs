//! Anchor: the best-bid/best-ask pair that positions the ladder window.

use crate::BookSnapshot;

/// The (best bid, best ask) pair the ladder is anchored to.
///
/// Computed from a snapshot on the first book update or on an explicit
/// recenter gesture, then carried across updates so the window stays put
/// while the market moves through it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub best_bid: f64,
    pub best_ask: f64,
}

impl Anchor {
    /// Compute the anchor from a snapshot: highest bid, lowest ask.
    ///
    /// Returns `None` when either side is empty; the caller must treat
    /// that book update as unusable rather than anchor on garbage.
    pub fn from_book(book: &BookSnapshot) -> Option<Self> {
        Some(Self {
            best_bid: book.best_bid()?,
            best_ask: book.best_ask()?,
        })
    }

    /// Snap the bid anchor to within two ticks of the ask anchor.
    ///
    /// While the gap exceeds two ticks, the bid is walked up one tick at
    /// a time. This keeps both touch prices inside the window when the
    /// real spread is wide, at the cost of displacing the displayed bid
    /// half from the true best bid.
    pub fn normalize(&mut self, tick_size: f64) {
        if tick_size <= 0.0 {
            return;
        }
        while self.best_ask - self.best_bid > tick_size * 2.0 {
            self.best_bid += tick_size;
        }
    }
}
