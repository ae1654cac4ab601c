//! Mock feed for testing — implements `MarketFeed` with a scripted queue.
//!
//! Use this in integration tests to drive an engine without a network
//! connection, and to assert on the commands a UI gesture produced.
//!
//! ```
//! use ladderbook_feed::{MarketFeed, MockFeed};
//! use ladderbook::{Command, Message, Trade};
//!
//! let mut feed = MockFeed::new();
//! feed.push(Message::Trade(Trade::new(100.0, 0.5)));
//! feed.connect().unwrap();
//!
//! assert!(feed.poll().unwrap().is_some());
//! assert!(feed.poll().unwrap().is_none());
//!
//! feed.send(&Command::CancelOrder { order_id: "o1".into() }).unwrap();
//! assert_eq!(feed.sent().len(), 1);
//! ```

use std::collections::VecDeque;

use ladderbook::{Command, Message};

use crate::codec::decode_message;
use crate::error::FeedError;
use crate::MarketFeed;

/// A feed that replays a scripted message queue and records sent commands.
#[derive(Debug, Default)]
pub struct MockFeed {
    connected: bool,
    inbound: VecDeque<Message>,
    sent: Vec<Command>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an already-parsed message.
    pub fn push(&mut self, message: Message) {
        self.inbound.push_back(message);
    }

    /// Decode a raw frame through the real codec and queue the result.
    pub fn push_frame(&mut self, raw: &str) -> Result<(), FeedError> {
        self.inbound.push_back(decode_message(raw)?);
        Ok(())
    }

    /// Commands sent so far, in order (for assertion in tests).
    pub fn sent(&self) -> &[Command] {
        &self.sent
    }
}

impl MarketFeed for MockFeed {
    fn connect(&mut self) -> Result<(), FeedError> {
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), FeedError> {
        self.connected = false;
        Ok(())
    }

    fn poll(&mut self) -> Result<Option<Message>, FeedError> {
        if !self.connected {
            return Err(FeedError::NotConnected);
        }
        Ok(self.inbound.pop_front())
    }

    fn send(&mut self, command: &Command) -> Result<(), FeedError> {
        if !self.connected {
            return Err(FeedError::NotConnected);
        }
        self.sent.push(command.clone());
        Ok(())
    }
}
