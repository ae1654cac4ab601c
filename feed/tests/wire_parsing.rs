//! Wire-format parsing tests: every topic family, plus a full scripted
//! session pumped through a `MockFeed` into the engine.

use ladderbook::{
    Command, LadderEngine, Message, Position, Quote, Side, SymbolConfig, Trade, VwapPair,
    WorkingOrder,
};
use ladderbook_feed::{MarketFeed, MockFeed, decode_message, encode_command};

// ============================================================================
// Per-topic decoding
// ============================================================================

#[test]
fn decode_book() {
    let raw = r#"{
        "topic": "book",
        "bids": [{"price": 99.99, "volume": 2.0}, {"price": 99.98, "volume": 1.5}],
        "asks": [{"price": 100.00, "volume": 3.0}]
    }"#;
    let Message::Book(book) = decode_message(raw).unwrap() else {
        panic!("expected a book message");
    };
    assert_eq!(book.bids.len(), 2);
    assert_eq!(book.asks, vec![Quote::new(100.00, 3.0)]);
}

#[test]
fn decode_trade() {
    let msg = decode_message(r#"{"topic":"trade","price":100.02,"volume":0.75}"#).unwrap();
    assert_eq!(msg, Message::Trade(Trade::new(100.02, 0.75)));
}

#[test]
fn decode_position() {
    let msg = decode_message(r#"{"topic":"position","qty":-2.0,"avg_price":100.0}"#).unwrap();
    assert_eq!(msg, Message::Position(Position::new(-2.0, 100.0)));
}

#[test]
fn decode_symbol_config_derives_precision() {
    let msg = decode_message(r#"{"topic":"symbol_config","tick_size":0.5}"#).unwrap();
    let Message::SymbolConfig(config) = msg else {
        panic!("expected a symbol config");
    };
    assert_eq!(config, SymbolConfig::new(0.5));
    assert_eq!(config.display_precision(), 1);
}

#[test]
fn decode_working_orders() {
    let raw = r#"{"topic":"working_orders","orders":[
        {"order_id":"o1","side":"b","price":99.98,"qty":1.0},
        {"order_id":"o2","side":"s","price":100.02,"qty":2.0}
    ]}"#;
    let msg = decode_message(raw).unwrap();
    assert_eq!(
        msg,
        Message::WorkingOrders(vec![
            WorkingOrder::new("o1", Side::Buy, 99.98, 1.0),
            WorkingOrder::new("o2", Side::Sell, 100.02, 2.0),
        ])
    );
}

#[test]
fn decode_empty_working_orders() {
    let msg = decode_message(r#"{"topic":"working_orders","orders":[]}"#).unwrap();
    assert_eq!(msg, Message::WorkingOrders(vec![]));
}

#[test]
fn decode_vwap_pair() {
    let raw = r#"{"topic":"vwap",
        "ask":{"price":100.04,"volume":18.5},
        "bid":{"price":99.95,"volume":17.25}}"#;
    let msg = decode_message(raw).unwrap();
    assert_eq!(
        msg,
        Message::Vwap(VwapPair {
            ask: Quote::new(100.04, 18.5),
            bid: Quote::new(99.95, 17.25),
        })
    );
}

#[test]
fn decode_status_family() {
    let sub = decode_message(
        r#"{"topic":"subscription_status","channel_name":"book","pair":"XBT/USD","status":"subscribed"}"#,
    )
    .unwrap();
    assert!(matches!(sub, Message::Subscription(s) if s.to_string() == "book: XBT/USD (subscribed)"));

    let sys =
        decode_message(r#"{"topic":"system_status","event":"systemStatus","status":"online"}"#)
            .unwrap();
    assert!(matches!(sys, Message::System(s) if s.to_string() == "systemStatus: online"));

    // Optional order-status fields may be absent on the wire.
    let ord = decode_message(r#"{"topic":"order_status","status":"ok"}"#).unwrap();
    assert!(matches!(ord, Message::OrderStatus(s) if s.descr.is_none()));
}

// ============================================================================
// Rejection paths
// ============================================================================

#[test]
fn unknown_topic_reports_and_drops() {
    let err = decode_message(r#"{"topic":"heartbeat","interval":5}"#).unwrap_err();
    assert_eq!(err.to_string(), "unknown topic: heartbeat");
}

#[test]
fn known_topic_with_bad_payload_is_malformed() {
    let err = decode_message(r#"{"topic":"trade","price":"not-a-number"}"#).unwrap_err();
    assert!(err.to_string().starts_with("malformed frame"));
}

#[test]
fn frame_without_topic_is_malformed() {
    assert!(decode_message(r#"{"bids":[],"asks":[]}"#).is_err());
    assert!(decode_message("not json at all").is_err());
}

// ============================================================================
// Command encoding
// ============================================================================

#[test]
fn cancel_command_frame() {
    let frame = encode_command(&Command::CancelOrder {
        order_id: "abc-123".into(),
    });
    let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
    assert_eq!(value["topic"], "cancel_order");
    assert_eq!(value["order_id"], "abc-123");
}

#[test]
fn new_order_command_frame() {
    let frame = encode_command(&Command::NewOrderSingle {
        side: Side::Buy,
        price: 99.98,
    });
    let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
    assert_eq!(value["topic"], "new_order_single");
    assert_eq!(value["side"], "b");
    assert_eq!(value["price"], 99.98);
}

// ============================================================================
// Scripted session end-to-end
// ============================================================================

#[test]
fn scripted_session_drives_engine_and_records_commands() {
    let mut feed = MockFeed::new();
    feed.push_frame(r#"{"topic":"symbol_config","tick_size":0.01}"#)
        .unwrap();
    feed.push_frame(
        r#"{"topic":"book",
            "bids":[{"price":99.99,"volume":2.0},{"price":99.98,"volume":2.0},
                    {"price":99.97,"volume":2.0},{"price":99.96,"volume":2.0},
                    {"price":99.95,"volume":2.0},{"price":99.94,"volume":2.0},
                    {"price":99.93,"volume":2.0},{"price":99.92,"volume":2.0},
                    {"price":99.91,"volume":2.0},{"price":99.90,"volume":2.0}],
            "asks":[{"price":100.00,"volume":2.0},{"price":100.01,"volume":2.0},
                    {"price":100.02,"volume":2.0},{"price":100.03,"volume":2.0},
                    {"price":100.04,"volume":2.0},{"price":100.05,"volume":2.0},
                    {"price":100.06,"volume":2.0},{"price":100.07,"volume":2.0},
                    {"price":100.08,"volume":2.0},{"price":100.09,"volume":2.0}]}"#,
    )
    .unwrap();
    feed.push_frame(r#"{"topic":"trade","price":100.00,"volume":0.5}"#)
        .unwrap();
    feed.push_frame(
        r#"{"topic":"working_orders","orders":[
            {"order_id":"o1","side":"b","price":99.98,"qty":1.0}]}"#,
    )
    .unwrap();

    let mut engine = LadderEngine::new();
    feed.connect().unwrap();
    while let Some(message) = feed.poll().unwrap() {
        engine.apply(message).unwrap();
    }

    let config = *engine.config();
    let touch = engine.grid().row(config.quantize(100.00)).unwrap();
    assert_eq!(touch.ask, Some(2.0));
    assert_eq!(touch.trade, Some(0.5));

    // A click on the working-order cell becomes a cancel command.
    let cancel = engine.cancel_at(99.98).unwrap();
    feed.send(&cancel).unwrap();
    // A click on a bid cell becomes a new order at that displayed price.
    let order = engine.order_at(Side::Buy, 99.97);
    feed.send(&order).unwrap();

    assert_eq!(
        feed.sent(),
        &[
            Command::CancelOrder {
                order_id: "o1".into()
            },
            Command::NewOrderSingle {
                side: Side::Buy,
                price: 99.97
            },
        ]
    );
}
