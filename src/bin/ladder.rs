//! Interactive price-ladder CLI.
//!
//! A REPL for driving the ladder engine with synthetic feed messages.
//!
//! Usage:
//!   cargo run --bin ladder
//!   ladder  (if installed via cargo install)

use std::io::{self, BufRead, Write};

use ladderbook::{
    BookSnapshot, LadderEngine, Message, Position, Quote, Side, Signal, SymbolConfig, Trade,
    VwapPair, WorkingOrder,
};

fn main() {
    let mut engine = LadderEngine::new();
    let mut working: Vec<WorkingOrder> = Vec::new();

    println!("Price Ladder CLI");
    println!("Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("ladder> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts.first().map(|s| s.to_lowercase());

        match cmd.as_deref() {
            Some("help" | "h" | "?") => print_help(),
            Some("quit" | "exit" | "q") => break,
            Some("show" | "s") => print_ladder(&engine),
            Some("tick") => handle_tick(&mut engine, &parts[1..]),
            Some("book" | "b") => handle_book(&mut engine, &parts[1..]),
            Some("trade" | "t") => handle_trade(&mut engine, &parts[1..]),
            Some("pos" | "p") => handle_position(&mut engine, &parts[1..]),
            Some("work" | "w") => handle_work(&mut engine, &mut working, &parts[1..]),
            Some("unwork") => handle_unwork(&mut engine, &mut working, &parts[1..]),
            Some("vwap" | "v") => handle_vwap(&mut engine, &parts[1..]),
            Some("wheel") => handle_wheel(&mut engine, &parts[1..]),
            Some("center" | "c") => {
                engine.recenter();
                println!("Recentered (scroll 0, fresh anchor).");
            }
            Some(cmd) => println!("Unknown command: '{}'. Type 'help' for commands.", cmd),
            None => {}
        }
    }

    println!("Goodbye!");
}

fn print_help() {
    println!(
        r#"
Commands:
  tick <size>                    Set tick size (rederives display precision)
  book <bid> <ask>               Synthetic 10-level book anchored at touch prices
  trade <price> <qty>            Trade print
  pos <qty> <avg>                Position update (negative qty = short)
  work <id> <b|s> <price> <qty>  Add a working order (list resent wholesale)
  unwork <id>                    Remove a working order
  vwap <ap> <av> <bp> <bv>       VWAP pair (ask price/vol, bid price/vol)
  wheel <delta>                  Wheel gesture (+100 = one tick down)
  center                         Reset scroll and re-anchor
  show                           Print the ladder and header analytics
  help                           Show this help
  quit                           Exit

Examples:
  tick 0.5
  book 4999.5 5000.0
  trade 5000.0 1.25
  work o1 b 4998.5 2
  wheel -300
"#
    );
}

fn print_ladder(engine: &LadderEngine) {
    if !engine.grid().is_built() {
        println!("(no book yet — send one with 'book <bid> <ask>')");
        return;
    }

    println!();
    println!(
        "  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "WORKING", "BID", "PRICE", "ASK", "TRADED"
    );
    println!("  {}", "─".repeat(58));

    let config = engine.config();
    for row in engine.grid().rows() {
        let cell = |v: Option<f64>| match v {
            Some(v) => format!("{:.5}", v),
            None => String::new(),
        };
        println!(
            "  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
            cell(row.working),
            cell(row.bid),
            config.format_price(row.price),
            cell(row.ask),
            cell(row.trade)
        );
    }
    println!();

    if let Some(analytics) = engine.analytics() {
        if let Some(ask) = analytics.best_ask {
            println!(
                "  Ask: {:.3} @ {}",
                ask.volume,
                config.format_raw(ask.price)
            );
        }
        if let Some(bid) = analytics.best_bid {
            println!(
                "  Bid: {:.3} @ {}",
                bid.volume,
                config.format_raw(bid.price)
            );
        }
        if let Some(spread) = analytics.spread {
            println!("  Spread: {}", config.format_raw(spread));
        }
        if let Some(ratio) = analytics.ratio {
            let icon = match analytics.signal {
                Some(Signal::BuySideThin) => " [buy-side thin]",
                Some(Signal::SellSideThin) => " [sell-side thin]",
                None => "",
            };
            println!("  Ratio: {:.5}{}", ratio, icon);
        }
        if let (Some(high), Some(diff)) = (analytics.high_lean, analytics.lean_diff) {
            println!(
                "  High Lean: {:.3} ({:.1}%) @ {} ({})",
                high.volume,
                high.share_pct,
                high.price,
                config.format_raw(diff)
            );
        }
        if let (Some(low), Some(diff)) = (analytics.low_lean, analytics.lean_diff) {
            println!(
                "  Low Lean: {:.3} ({:.1}%) @ {} ({})",
                low.volume,
                low.share_pct,
                low.price,
                config.format_raw(diff)
            );
        }
        if let Some(pnl) = analytics.pnl {
            println!("  Pnl: {:.5}", pnl);
        }
    }

    if let Some((ask_line, bid_line)) = engine.vwap_lines() {
        println!("  {ask_line}");
        println!("  {bid_line}");
    }
    for line in engine.working_lines() {
        println!("  {line}");
    }
    if let Some(last) = &engine.status().last_trade {
        println!("  {last}");
    }
    println!();
}

fn handle_tick(engine: &mut LadderEngine, args: &[&str]) {
    let Some(size) = args.first().and_then(|s| s.parse::<f64>().ok()) else {
        println!("Usage: tick <size>");
        return;
    };
    let config = SymbolConfig::new(size);
    println!(
        "Tick {} -> {} display decimals.",
        config.tick_size(),
        config.display_precision()
    );
    let _ = engine.apply(Message::SymbolConfig(config));
}

fn handle_book(engine: &mut LadderEngine, args: &[&str]) {
    let (Some(bid), Some(ask)) = (
        args.first().and_then(|s| s.parse::<f64>().ok()),
        args.get(1).and_then(|s| s.parse::<f64>().ok()),
    ) else {
        println!("Usage: book <bestbid> <bestask>");
        return;
    };

    let tick = engine.config().tick_size();
    let bids = (0..10)
        .map(|i| Quote::new(bid - tick * i as f64, 2.0 + 0.5 * i as f64))
        .collect();
    let asks = (0..10)
        .map(|i| Quote::new(ask + tick * i as f64, 2.0 + 0.5 * i as f64))
        .collect();

    match engine.apply(Message::Book(BookSnapshot::new(bids, asks))) {
        Ok(()) => print_ladder(engine),
        Err(err) => println!("Rejected: {err}"),
    }
}

fn handle_trade(engine: &mut LadderEngine, args: &[&str]) {
    let (Some(price), Some(qty)) = (
        args.first().and_then(|s| s.parse::<f64>().ok()),
        args.get(1).and_then(|s| s.parse::<f64>().ok()),
    ) else {
        println!("Usage: trade <price> <qty>");
        return;
    };
    let _ = engine.apply(Message::Trade(Trade::new(price, qty)));
    if let Some(last) = &engine.status().last_trade {
        println!("{last}");
    }
}

fn handle_position(engine: &mut LadderEngine, args: &[&str]) {
    let (Some(qty), Some(avg)) = (
        args.first().and_then(|s| s.parse::<f64>().ok()),
        args.get(1).and_then(|s| s.parse::<f64>().ok()),
    ) else {
        println!("Usage: pos <qty> <avg>");
        return;
    };
    let _ = engine.apply(Message::Position(Position::new(qty, avg)));
    match engine.analytics().and_then(|a| a.pnl) {
        Some(pnl) => println!("Position {:.5} @ {:.5}, Pnl {:.5}", qty, avg, pnl),
        None => println!("Position {:.5} @ {:.5}", qty, avg),
    }
}

fn handle_work(
    engine: &mut LadderEngine,
    working: &mut Vec<WorkingOrder>,
    args: &[&str],
) {
    if args.len() < 4 {
        println!("Usage: work <id> <b|s> <price> <qty>");
        return;
    }
    let side = match args[1] {
        "b" => Side::Buy,
        "s" => Side::Sell,
        other => {
            println!("Invalid side: '{}'. Use b or s.", other);
            return;
        }
    };
    let (Some(price), Some(qty)) = (
        args[2].parse::<f64>().ok(),
        args[3].parse::<f64>().ok(),
    ) else {
        println!("Invalid price or qty.");
        return;
    };

    working.push(WorkingOrder::new(args[0], side, price, qty));
    let _ = engine.apply(Message::WorkingOrders(working.clone()));
    for line in engine.working_lines() {
        println!("{line}");
    }
}

fn handle_unwork(
    engine: &mut LadderEngine,
    working: &mut Vec<WorkingOrder>,
    args: &[&str],
) {
    let Some(id) = args.first() else {
        println!("Usage: unwork <id>");
        return;
    };
    let before = working.len();
    working.retain(|o| o.order_id != *id);
    if working.len() == before {
        println!("No working order '{}'", id);
        return;
    }
    let _ = engine.apply(Message::WorkingOrders(working.clone()));
    println!("Removed '{}' ({} left).", id, working.len());
}

fn handle_vwap(engine: &mut LadderEngine, args: &[&str]) {
    let values: Vec<f64> = args.iter().filter_map(|s| s.parse().ok()).collect();
    if values.len() < 4 {
        println!("Usage: vwap <askprice> <askvol> <bidprice> <bidvol>");
        return;
    }
    let _ = engine.apply(Message::Vwap(VwapPair {
        ask: Quote::new(values[0], values[1]),
        bid: Quote::new(values[2], values[3]),
    }));
    if let Some((ask_line, bid_line)) = engine.vwap_lines() {
        println!("{ask_line}");
        println!("{bid_line}");
    }
}

fn handle_wheel(engine: &mut LadderEngine, args: &[&str]) {
    let Some(delta) = args.first().and_then(|s| s.parse::<f64>().ok()) else {
        println!("Usage: wheel <delta>");
        return;
    };
    engine.wheel(delta);
    println!("Scroll offset: {} ticks.", engine.scroll_offset());
}
