//! # ladderbook
//!
//! A price-ladder reconciliation and analytics engine for real-time
//! market data.
//!
//! The engine consumes a stream of tagged messages — book snapshots,
//! trades, working orders, position, VWAP, symbol metadata — and keeps a
//! fixed 40-row price ladder consistent across them: each row shows the
//! resting bid and ask volume, the trader's working size, and the
//! session's traded volume at that displayed price.
//!
//! ## Features
//!
//! - **Anchored window**: 40 rows split into an ask-anchored top half and
//!   a bid-anchored bottom half, so both touch prices stay visible
//! - **Exact price identity**: rows are keyed by display-quantized prices,
//!   never raw floats
//! - **Rebuild-then-replay**: every re-anchor wipes the grid and replays
//!   the current book, trade history, and working orders
//! - **Header analytics**: spread, thin-side "juice" signal, per-side
//!   lean, unrealized PnL, VWAP price-gap
//!
//! ## Quick Start
//!
//! ```
//! use ladderbook::{BookSnapshot, LadderEngine, Message, Quote, SymbolConfig};
//!
//! let mut engine = LadderEngine::with_config(SymbolConfig::new(0.01));
//!
//! // First book update anchors the window and populates the grid.
//! let bids = (0..10).map(|i| Quote::new(99.99 - 0.01 * i as f64, 2.0)).collect();
//! let asks = (0..10).map(|i| Quote::new(100.00 + 0.01 * i as f64, 2.0)).collect();
//! engine.apply(Message::Book(BookSnapshot::new(bids, asks))).unwrap();
//!
//! assert_eq!(engine.grid().rows().len(), 40);
//! let touch = engine.config().quantize(100.00);
//! assert_eq!(engine.grid().row(touch).unwrap().ask, Some(2.0));
//! ```
//!
//! ## Price Identity
//!
//! All lookups quantize to the symbol's display precision first, so a
//! feed price carrying binary noise still lands on its row:
//!
//! ```
//! use ladderbook::SymbolConfig;
//!
//! let config = SymbolConfig::new(0.01);
//! assert_eq!(config.display_precision(), 2);
//! assert_eq!(config.quantize(0.1 + 0.2), config.quantize(0.3));
//! ```
//!
//! ## Trades accumulate, quotes replace
//!
//! ```
//! use ladderbook::{BookSnapshot, LadderEngine, Message, Quote, SymbolConfig, Trade};
//!
//! let mut engine = LadderEngine::with_config(SymbolConfig::new(0.01));
//! let bids = (0..10).map(|i| Quote::new(99.99 - 0.01 * i as f64, 2.0)).collect();
//! let asks = (0..10).map(|i| Quote::new(100.00 + 0.01 * i as f64, 2.0)).collect();
//! engine.apply(Message::Book(BookSnapshot::new(bids, asks))).unwrap();
//!
//! engine.apply(Message::Trade(Trade::new(100.00, 1.5))).unwrap();
//! engine.apply(Message::Trade(Trade::new(100.00, 0.5))).unwrap();
//!
//! let touch = engine.config().quantize(100.00);
//! assert_eq!(engine.grid().row(touch).unwrap().trade, Some(2.0));
//! ```
//!
//! ## Analytics
//!
//! Header analytics are recomputed on every book update. The displayed
//! "best ask" follows the tenth-level convention, and the juice signal
//! fires when one side dwarfs the other inside a tight spread:
//!
//! ```
//! use ladderbook::{Analytics, BookSnapshot, Position, Quote, Signal, SymbolConfig};
//!
//! let config = SymbolConfig::new(0.01);
//! let bids: Vec<Quote> = (0..10).map(|i| Quote::new(99.99 - 0.01 * i as f64, 5.0)).collect();
//! let asks: Vec<Quote> = (0..10).map(|_| Quote::new(100.00, 0.4)).collect();
//! let book = BookSnapshot::new(bids, asks);
//!
//! let analytics = Analytics::compute(&book, &config, Some(&Position::new(2.0, 99.89)));
//! assert_eq!(analytics.signal, Some(Signal::BuySideThin)); // ratio 0.4 / 5 = 0.08
//! let pnl = analytics.pnl.unwrap(); // (99.99 - 99.89) * 2
//! assert!((pnl - 0.20).abs() < 1e-9);
//! ```
//!
//! ## Scrolling
//!
//! Wheel gestures shift the window in whole ticks without touching the
//! anchor; a recenter zeroes the scroll and re-anchors to the current
//! book:
//!
//! ```
//! use ladderbook::{BookSnapshot, LadderEngine, Message, Quote, SymbolConfig};
//!
//! let mut engine = LadderEngine::with_config(SymbolConfig::new(0.01));
//! let bids = (0..10).map(|i| Quote::new(99.99 - 0.01 * i as f64, 2.0)).collect();
//! let asks = (0..10).map(|i| Quote::new(100.00 + 0.01 * i as f64, 2.0)).collect();
//! engine.apply(Message::Book(BookSnapshot::new(bids, asks))).unwrap();
//!
//! let centered = engine.grid().rows().to_vec();
//! engine.wheel(-100.0); // one tick up
//! assert_ne!(engine.grid().rows(), &centered[..]);
//! engine.recenter();
//! assert_eq!(engine.grid().rows(), &centered[..]);
//! ```

mod anchor;
pub mod analytics;
mod book;
mod command;
mod config;
mod engine;
mod error;
mod grid;
mod ladder;
mod messages;
mod position;
mod reconcile;
mod scroll;
mod side;
mod trade;
mod types;
mod working;

// Re-export public API
pub use anchor::Anchor;
pub use analytics::{ASK_REFERENCE_LEVEL, Analytics, Lean, Signal};
pub use book::{BookSnapshot, Quote, VwapPair};
pub use command::Command;
pub use config::SymbolConfig;
pub use engine::{LadderEngine, StatusBoard};
pub use error::LadderError;
pub use grid::{HALF_ROWS, LADDER_ROWS, PriceGrid, Row};
pub use messages::{Message, OrderStatus, SubscriptionStatus, SystemStatus};
pub use position::Position;
pub use scroll::ScrollState;
pub use side::Side;
pub use trade::{DEFAULT_TRADE_RETENTION, Trade, TradeLog};
pub use types::{DisplayPrice, Volume};
pub use working::{WorkingOrder, working_lines};
