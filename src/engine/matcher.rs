//! Continuous price-time matching engine.
//!
//! The engine owns the resting book, the trade tape and the monotonic
//! id/sequence counters. A `post_limit_order` call validates its inputs,
//! runs the matching loop to exhaustion and rests any remainder before it
//! returns, so callers never observe a crossed book.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::engine::tape::TradeTape;
use crate::orderbook::{LevelAgg, OrderBook};
use crate::types::{price, EngineError, Order, Side, Trade};

/// The matching engine.
///
/// All methods take `&mut self` / `&self`; wrap the engine in
/// [`SharedEngine`](crate::SharedEngine) for concurrent callers.
#[derive(Debug)]
pub struct MatchingEngine {
    /// The resting book (both price-time indices)
    book: OrderBook,

    /// Bounded chronological trade log
    tape: TradeTape,

    /// Next order identifier; monotonic, never reset, never reused
    next_order_id: u64,

    /// Next arrival/trade sequence stamp; monotonic, never reset
    next_seq: u64,

    /// Next trade identifier
    next_trade_id: u64,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingEngine {
    /// Create a new engine with an empty book
    pub fn new() -> Self {
        Self {
            book: OrderBook::new(),
            tape: TradeTape::new(),
            next_order_id: 1,
            next_seq: 1,
            next_trade_id: 1,
        }
    }

    /// Create an engine with pre-allocated order storage
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            book: OrderBook::with_capacity(order_capacity),
            ..Self::new()
        }
    }

    #[inline]
    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    // ========================================================================
    // Public operations
    // ========================================================================

    /// Post a limit order: match it against the opposing side, then rest
    /// any remainder.
    ///
    /// Returns `Ok(Some(order id))` when unfilled quantity rests on the
    /// book, `Ok(None)` when the order filled completely, and an error for
    /// invalid inputs. A failed call has no effect on the book.
    ///
    /// Each fill trades `min(incoming remaining, resting remaining)` at the
    /// **resting** order's price. A partially filled resting order stays in
    /// place and keeps its original arrival priority.
    pub fn post_limit_order(
        &mut self,
        side: Side,
        price: Decimal,
        quantity: u64,
    ) -> Result<Option<u64>, EngineError> {
        // Validate before touching any state
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity);
        }
        let price_fixed =
            price::decimal_to_fixed(price).ok_or(EngineError::InvalidPrice(price))?;

        let id = self.next_order_id;
        self.next_order_id += 1;
        let seq = self.bump_seq();
        let mut incoming = Order::new(id, side, price_fixed, quantity, seq);

        // Matching loop: walk the opposing side in priority order while the
        // incoming order still crosses.
        let opposing = side.opposite();
        while incoming.remaining > 0 {
            let Some((maker_key, maker_price)) = self.book.best_order(opposing) else {
                break;
            };
            let crosses = match side {
                Side::Buy => maker_price <= incoming.price,
                Side::Sell => maker_price >= incoming.price,
            };
            if !crosses {
                break;
            }

            let maker = self
                .book
                .get_mut(maker_key)
                .expect("best order key is live");
            let maker_id = maker.id;
            let traded = incoming.remaining.min(maker.remaining);
            maker.fill(traded);
            let maker_filled = maker.is_filled();
            incoming.fill(traded);

            let trade_id = self.next_trade_id;
            self.next_trade_id += 1;
            let trade_seq = self.bump_seq();
            trace!(
                trade_id,
                maker_order_id = maker_id,
                taker_order_id = id,
                price = maker_price,
                quantity = traded,
                "fill"
            );
            self.tape
                .push(Trade::new(trade_id, maker_id, id, maker_price, traded, side, trade_seq));

            if maker_filled {
                self.book.remove(maker_key);
            }
        }

        if incoming.remaining > 0 {
            debug!(
                order_id = id,
                side = side.label(),
                remaining = incoming.remaining,
                "order resting"
            );
            self.book.insert(incoming);
            Ok(Some(id))
        } else {
            debug!(order_id = id, side = side.label(), "order fully filled");
            Ok(None)
        }
    }

    /// Cancel a resting order by id.
    ///
    /// Idempotent no-op when the id is not resting: the caller cannot
    /// distinguish "already filled" from "already canceled", so neither is
    /// an error.
    pub fn cancel_order(&mut self, order_id: u64) {
        match self.book.cancel(order_id) {
            Some(order) => {
                debug!(order_id, remaining = order.remaining, "order canceled");
            }
            None => {
                trace!(order_id, "cancel of unknown or terminal id; no-op");
            }
        }
    }

    /// Up to `depth` aggregated price levels for one side, best first.
    ///
    /// Pure read; quantities are re-summed from the resting orders on
    /// every call.
    pub fn top_of_book(&self, side: Side, depth: usize) -> Vec<LevelAgg> {
        self.book.depth(side, depth)
    }

    /// Up to `n` most recent trades in chronological order. Pure read.
    pub fn recent_trades(&self, n: usize) -> Vec<Trade> {
        self.tape.recent(n)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Best bid price (fixed-point), if any
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.book.best_bid()
    }

    /// Best ask price (fixed-point), if any
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.book.best_ask()
    }

    /// The resting book (read-only)
    #[inline]
    pub fn book(&self) -> &OrderBook {
        &self.book
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
