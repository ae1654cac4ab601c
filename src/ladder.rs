//! Ladder building: allocating the grid's row prices from the anchor.

use crate::{Anchor, HALF_ROWS, PriceGrid, SymbolConfig};

impl PriceGrid {
    /// Reallocate all 40 row prices from the anchor, tick size, and
    /// scroll offset. Every quantity cell comes back empty; callers
    /// replay reconciliation afterwards.
    ///
    /// The window is two independently anchored half-windows:
    /// - top 20 rows descend in tick steps to `best_ask + scroll * tick`,
    /// - bottom 20 rows descend in tick steps from `best_bid + scroll * tick`.
    ///
    /// Anchoring each half to its own touch keeps both sides visible when
    /// the spread is irregular; for wide or crossed books the halves may
    /// gap or overlap, which is accepted.
    pub fn rebuild(&mut self, anchor: Anchor, config: &SymbolConfig, scroll_ticks: i64) {
        self.clear();
        let tick = config.tick_size();
        let scroll = scroll_ticks as f64;

        for r in 0..HALF_ROWS {
            let steps = (HALF_ROWS - 1 - r) as f64;
            self.push_row(config.quantize(anchor.best_ask + (scroll + steps) * tick));
        }
        for x in 0..HALF_ROWS {
            self.push_row(config.quantize(anchor.best_bid + (scroll - x as f64) * tick));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisplayPrice, LADDER_ROWS};

    fn anchor(bid: f64, ask: f64) -> Anchor {
        Anchor {
            best_bid: bid,
            best_ask: ask,
        }
    }

    #[test]
    fn allocates_forty_rows() {
        let config = SymbolConfig::new(0.01);
        let mut grid = PriceGrid::new();
        grid.rebuild(anchor(99.99, 100.00), &config, 0);
        assert_eq!(grid.rows().len(), LADDER_ROWS);
        assert!(grid.rows().iter().all(|r| r.is_blank()));
    }

    #[test]
    fn half_windows_anchor_to_touch_prices() {
        let config = SymbolConfig::new(0.01);
        let mut grid = PriceGrid::new();
        grid.rebuild(anchor(99.99, 100.00), &config, 0);

        // Top half: 100.19 down to 100.00 (ask-anchored).
        assert_eq!(grid.rows()[0].price, DisplayPrice(10_019));
        assert_eq!(grid.rows()[HALF_ROWS - 1].price, DisplayPrice(10_000));
        // Bottom half: 99.99 down to 99.80 (bid-anchored).
        assert_eq!(grid.rows()[HALF_ROWS].price, DisplayPrice(9_999));
        assert_eq!(grid.rows()[LADDER_ROWS - 1].price, DisplayPrice(9_980));
    }

    #[test]
    fn rows_step_one_tick_within_each_half() {
        let config = SymbolConfig::new(0.01);
        let mut grid = PriceGrid::new();
        grid.rebuild(anchor(99.99, 100.00), &config, 3);

        for half in [&grid.rows()[..HALF_ROWS], &grid.rows()[HALF_ROWS..]] {
            for pair in half.windows(2) {
                assert_eq!(pair[0].price.0 - pair[1].price.0, 1);
            }
        }
    }

    #[test]
    fn scroll_offset_shifts_both_halves() {
        let config = SymbolConfig::new(0.01);
        let mut grid = PriceGrid::new();
        grid.rebuild(anchor(99.99, 100.00), &config, 0);
        let centered: Vec<_> = grid.rows().iter().map(|r| r.price).collect();

        grid.rebuild(anchor(99.99, 100.00), &config, 5);
        let scrolled: Vec<_> = grid.rows().iter().map(|r| r.price).collect();

        for (c, s) in centered.iter().zip(&scrolled) {
            assert_eq!(s.0 - c.0, 5);
        }
    }

    #[test]
    fn negative_scroll_moves_window_down() {
        let config = SymbolConfig::new(0.5);
        let mut grid = PriceGrid::new();
        grid.rebuild(anchor(5000.0, 5000.5), &config, -2);
        // Ask half bottom row sits two ticks below the ask touch.
        assert_eq!(
            grid.rows()[HALF_ROWS - 1].price,
            config.quantize(5000.5 - 1.0)
        );
    }

    #[test]
    fn rebuild_discards_previous_cells() {
        let config = SymbolConfig::new(0.01);
        let mut grid = PriceGrid::new();
        grid.rebuild(anchor(99.99, 100.00), &config, 0);
        grid.row_mut(DisplayPrice(10_000)).unwrap().trade = Some(7.0);

        grid.rebuild(anchor(99.99, 100.00), &config, 0);
        assert_eq!(grid.row(DisplayPrice(10_000)).unwrap().trade, None);
    }
}
