//! LadderEngine: the single owner of all ladder state.
//!
//! One engine instance exists per session. Every inbound message and UI
//! gesture is a `&mut self` handler that runs to completion; the render
//! surface and the order port only ever read.

use log::debug;

use crate::analytics::{Analytics, max_price_diff};
use crate::working::working_lines;
use crate::{
    Anchor, BookSnapshot, Command, LadderError, Message, Position, PriceGrid, Quote, ScrollState,
    Side, SymbolConfig, Trade, TradeLog, VwapPair, WorkingOrder,
};

/// Pass-through informational displays, fed by status-family messages.
#[derive(Clone, Debug, Default)]
pub struct StatusBoard {
    /// One line per subscription confirmation, in arrival order.
    pub subscriptions: Vec<String>,
    /// Latest venue connection state.
    pub system: Option<String>,
    /// Latest order acknowledgement.
    pub last_order: Option<String>,
    /// Latest trade print, formatted for the header.
    pub last_trade: Option<String>,
}

/// The ladder reconciliation and analytics engine.
///
/// Owns the grid, anchor, scroll, trade log, working orders, position,
/// VWAP, and status displays. See the crate docs for the message flow.
#[derive(Clone, Debug)]
pub struct LadderEngine {
    config: SymbolConfig,
    book: Option<BookSnapshot>,
    anchor: Option<Anchor>,
    scroll: ScrollState,
    grid: PriceGrid,
    trades: TradeLog,
    working: Vec<WorkingOrder>,
    position: Option<Position>,
    vwap: Option<VwapPair>,
    analytics: Option<Analytics>,
    status: StatusBoard,
}

impl LadderEngine {
    /// An engine with the default cent-tick config, awaiting its first
    /// symbol-config and book messages.
    pub fn new() -> Self {
        Self::with_config(SymbolConfig::default())
    }

    pub fn with_config(config: SymbolConfig) -> Self {
        Self {
            config,
            book: None,
            anchor: None,
            scroll: ScrollState::new(),
            grid: PriceGrid::new(),
            trades: TradeLog::new(),
            working: Vec::new(),
            position: None,
            vwap: None,
            analytics: None,
            status: StatusBoard::default(),
        }
    }

    // === Message dispatch ===

    /// Apply one inbound message. Handlers run to completion; an error
    /// leaves all engine state exactly as it was.
    pub fn apply(&mut self, message: Message) -> Result<(), LadderError> {
        match message {
            Message::Book(book) => self.on_book(book),
            Message::Trade(trade) => {
                self.on_trade(trade);
                Ok(())
            }
            Message::Position(position) => {
                self.position = Some(position);
                self.refresh_analytics();
                Ok(())
            }
            Message::SymbolConfig(config) => {
                self.on_symbol_config(config);
                Ok(())
            }
            Message::WorkingOrders(orders) => {
                self.on_working_orders(orders);
                Ok(())
            }
            Message::Vwap(vwap) => {
                self.vwap = Some(vwap);
                Ok(())
            }
            Message::Subscription(status) => {
                self.status.subscriptions.push(status.to_string());
                Ok(())
            }
            Message::System(status) => {
                self.status.system = Some(status.to_string());
                Ok(())
            }
            Message::OrderStatus(status) => {
                self.status.last_order = Some(status.to_string());
                Ok(())
            }
        }
    }

    fn on_book(&mut self, book: BookSnapshot) -> Result<(), LadderError> {
        if book.bids.is_empty() {
            return Err(LadderError::EmptySide(Side::Buy));
        }
        if book.asks.is_empty() {
            return Err(LadderError::EmptySide(Side::Sell));
        }
        self.book = Some(book);
        if self.anchor.is_none() {
            self.recalc_anchor();
        }
        self.rebuild();
        Ok(())
    }

    fn on_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
        self.status.last_trade = Some(format!(
            "Last Trade: {:.5} @ {}",
            trade.volume,
            self.config.format_raw(trade.price)
        ));
        // Only the new print is reconciled here; the full log is replayed
        // when a rebuild wipes the cells.
        self.grid.apply_trade(&trade, &self.config);
    }

    fn on_symbol_config(&mut self, config: SymbolConfig) {
        debug!(
            "symbol config: tick {} -> {} decimals",
            config.tick_size(),
            config.display_precision()
        );
        self.config = config;
        // Row identity changed with the precision: re-anchor and rebuild
        // against whatever book we hold.
        self.anchor = None;
        if self.book.is_some() {
            self.recalc_anchor();
            self.rebuild();
        }
    }

    fn on_working_orders(&mut self, orders: Vec<WorkingOrder>) {
        self.working = orders;
        self.grid.clear_working();
        let Self {
            grid,
            working,
            config,
            ..
        } = self;
        for order in working.iter() {
            grid.apply_working(order, config);
        }
    }

    // === Gestures ===

    /// Coarse reset: zero the scroll, re-anchor to the current book, and
    /// rebuild.
    pub fn recenter(&mut self) {
        self.scroll.reset();
        self.recalc_anchor();
        self.rebuild();
    }

    /// Fine scroll from a wheel gesture; the anchor stays put.
    pub fn wheel(&mut self, delta: f64) {
        self.scroll.adjust(delta);
        self.rebuild();
    }

    // === Rebuild pipeline ===

    fn recalc_anchor(&mut self) {
        let Some(mut anchor) = self.book.as_ref().and_then(Anchor::from_book) else {
            return;
        };
        anchor.normalize(self.config.tick_size());
        self.anchor = Some(anchor);
    }

    /// Reallocate the grid and replay all visible state into it.
    fn rebuild(&mut self) {
        let Self {
            config,
            book,
            anchor,
            scroll,
            grid,
            trades,
            working,
            ..
        } = self;
        let (Some(anchor), Some(book)) = (anchor.as_mut(), book.as_ref()) else {
            return;
        };
        anchor.normalize(config.tick_size());
        grid.rebuild(*anchor, config, scroll.offset());

        for quote in &book.asks {
            grid.apply_quote(quote, Side::Sell, config);
        }
        for quote in &book.bids {
            grid.apply_quote(quote, Side::Buy, config);
        }
        for trade in trades.iter() {
            grid.apply_trade(trade, config);
        }
        for order in working.iter() {
            grid.apply_working(order, config);
        }
        debug!(
            "ladder rebuilt: scroll {}, {} trades replayed",
            scroll.offset(),
            trades.len()
        );
        self.refresh_analytics();
    }

    fn refresh_analytics(&mut self) {
        self.analytics = self
            .book
            .as_ref()
            .map(|book| Analytics::compute(book, &self.config, self.position.as_ref()));
    }

    // === Read-only surface for the render port ===

    pub fn config(&self) -> &SymbolConfig {
        &self.config
    }

    pub fn grid(&self) -> &PriceGrid {
        &self.grid
    }

    pub fn book(&self) -> Option<&BookSnapshot> {
        self.book.as_ref()
    }

    pub fn analytics(&self) -> Option<&Analytics> {
        self.analytics.as_ref()
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn vwap(&self) -> Option<&VwapPair> {
        self.vwap.as_ref()
    }

    pub fn scroll_offset(&self) -> i64 {
        self.scroll.offset()
    }

    pub fn working_orders(&self) -> &[WorkingOrder] {
        &self.working
    }

    /// `Working: qty @ price` lines, one per order in input order.
    pub fn working_lines(&self) -> Vec<String> {
        working_lines(&self.working, &self.config)
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    pub fn last_trade(&self) -> Option<&Trade> {
        self.trades.last()
    }

    /// VWAP header lines `(ask, bid)`, each decorated with the local
    /// price-gap near that side's VWAP depth.
    pub fn vwap_lines(&self) -> Option<(String, String)> {
        let vwap = self.vwap.as_ref()?;
        let book = self.book.as_ref()?;
        Some((
            vwap_line(&vwap.ask, max_price_diff(&book.asks, Side::Sell), &self.config),
            vwap_line(&vwap.bid, max_price_diff(&book.bids, Side::Buy), &self.config),
        ))
    }

    // === Lookups for the order port ===

    /// Cancel command for the working order resting at a displayed price.
    pub fn cancel_at(&self, price: f64) -> Option<Command> {
        let key = self.config.quantize(price);
        self.working
            .iter()
            .find(|order| self.config.quantize(order.price) == key)
            .map(|order| Command::CancelOrder {
                order_id: order.order_id.clone(),
            })
    }

    /// New-order command at a displayed ladder price.
    pub fn order_at(&self, side: Side, price: f64) -> Command {
        Command::NewOrderSingle { side, price }
    }

    /// Raw price displayed on a grid row, top-first indexing.
    pub fn price_at_row(&self, row: usize) -> Option<f64> {
        self.grid
            .rows()
            .get(row)
            .map(|r| self.config.price_of(r.price))
    }
}

impl Default for LadderEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn vwap_line(quote: &Quote, gap: Option<f64>, config: &SymbolConfig) -> String {
    let mut line = format!(
        "Vwap: {:.3} @ {}",
        quote.volume,
        config.format_raw(quote.price)
    );
    if let Some(gap) = gap {
        line.push_str(&format!(" (-{})", config.format_raw(gap)));
    }
    line
}
