//! Order book simulator binary.
//!
//! Spawns a synthetic order-flow thread posting randomized limit orders on
//! a jittered cadence, while the main thread redraws top-of-book and the
//! recent trade tape on a fixed cadence. Both sides talk to the same
//! [`SharedEngine`] and coordinate only through its lock.
//!
//! No tracing subscriber is installed here: the process owns the terminal
//! for the ANSI display.

use std::thread;
use std::time::Duration;

use rand::Rng;
use rust_decimal::Decimal;

use clob_sim::types::price::format_price;
use clob_sim::{MatchingEngine, SharedEngine, Side};

/// Price levels drawn per side
const DEPTH: usize = 10;

/// Trades drawn from the tape
const TRADES_SHOWN: usize = 10;

/// Redraw cadence
const FRAME: Duration = Duration::from_millis(250);

// ANSI control sequences
const CLEAR: &str = "\x1b[2J";
const MOVE_HOME: &str = "\x1b[H";
const CLEAR_LINE: &str = "\x1b[K";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Synthetic order flow: randomized side/price/quantity around a slowly
/// drifting mid price, posted on a jittered cadence.
fn run_generator(engine: SharedEngine) {
    let mut rng = rand::thread_rng();
    let mut mid: f64 = 100.0;

    loop {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        // Jitter around mid, rounded to cents
        let cents = ((mid + rng.gen_range(-0.5..0.5)) * 100.0).round().max(1.0) as i64;
        let price = Decimal::new(cents, 2);
        let quantity: u64 = rng.gen_range(1..=100);

        // Validated inputs by construction; the sentinel result (resting id
        // or fully filled) is irrelevant to the generator
        let _ = engine.post_limit_order(side, price, quantity);

        thread::sleep(Duration::from_millis(rng.gen_range(120..320)));
        if rng.gen_range(0..50) == 0 {
            mid += rng.gen_range(-1.0..1.0);
        }
    }
}

/// Draw one snapshot: side-by-side depth columns plus the trade tape.
fn render(engine: &SharedEngine) {
    let bids = engine.top_of_book(Side::Buy, DEPTH);
    let asks = engine.top_of_book(Side::Sell, DEPTH);
    let trades = engine.recent_trades(TRADES_SHOWN);

    let mut frame = String::new();
    frame.push_str(MOVE_HOME);

    frame.push_str("Continuous Limit Order Book (CLOB) - simulated\n\n");
    frame.push_str(&format!(
        "{:>20}    {:>20}\n",
        "BUYS (price | qty)", "SELLS (price | qty)"
    ));
    frame.push_str("------------------------------------------------------------\n");

    for i in 0..DEPTH {
        match bids.get(i) {
            Some(level) => frame.push_str(&format!(
                "{}{:>10} | {:<7}{}",
                GREEN,
                format_price(level.price),
                level.quantity,
                RESET
            )),
            None => frame.push_str(&format!("{:>20}", " ")),
        }

        frame.push_str("    ");

        if let Some(level) = asks.get(i) {
            frame.push_str(&format!(
                "{}{:>10} | {:<7}{}",
                RED,
                format_price(level.price),
                level.quantity,
                RESET
            ));
        }
        frame.push_str(CLEAR_LINE);
        frame.push('\n');
    }

    frame.push_str("\nRecent trades (most recent last):\n");
    for trade in &trades {
        frame.push_str(&format!(
            "{}{:<4}{} price={} qty={}{}\n",
            YELLOW,
            trade.aggressor.label(),
            RESET,
            format_price(trade.price),
            trade.quantity,
            CLEAR_LINE
        ));
    }

    frame.push_str("\n(press Ctrl-C to exit)\n");
    print!("{frame}");
    use std::io::Write;
    let _ = std::io::stdout().flush();
}

fn main() {
    let engine = SharedEngine::new(MatchingEngine::with_capacity(4096));

    // Clear the screen once; every frame after that redraws in place
    print!("{CLEAR}");

    let producer = engine.clone();
    thread::spawn(move || run_generator(producer));

    loop {
        render(&engine);
        thread::sleep(FRAME);
    }
}
