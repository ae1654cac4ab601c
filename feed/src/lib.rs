//! Feed trait and JSON wire codec for ladderbook.
//!
//! The engine consumes already-parsed [`ladderbook::Message`] values;
//! this crate is the boundary that produces them. It provides:
//!
//! - **`MarketFeed`**: the transport trait a real connection implements
//! - **Codec**: topic-tagged JSON decoding and command encoding
//! - **`MockFeed`**: a scripted feed for tests, no network required

pub mod codec;
pub mod error;
pub mod mock;
mod wire;

pub use codec::{decode_message, encode_command};
pub use error::FeedError;
pub use mock::MockFeed;

use ladderbook::{Command, Message};

/// A market-data connection that delivers messages and accepts commands.
///
/// Connection lifecycle, authentication, and reconnect policy live
/// behind implementations of this trait; the engine never sees them.
pub trait MarketFeed {
    /// Open the connection.
    fn connect(&mut self) -> Result<(), FeedError>;

    /// Close gracefully.
    fn disconnect(&mut self) -> Result<(), FeedError>;

    /// Next inbound message, if one is ready. `Ok(None)` means nothing
    /// is queued right now.
    fn poll(&mut self) -> Result<Option<Message>, FeedError>;

    /// Encode and send an outbound command.
    fn send(&mut self, command: &Command) -> Result<(), FeedError>;
}
