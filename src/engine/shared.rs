//! Mutex-guarded engine handle for concurrent callers.
//!
//! One lock covers the entire engine. Every post, cancel and query acquires
//! it for the whole call, so the book is sequentially consistent: each
//! operation observes the result of a total order of completed prior
//! operations, and no reader can see a half-matched book. Nothing inside
//! the critical section performs I/O or blocks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use crate::engine::MatchingEngine;
use crate::orderbook::LevelAgg;
use crate::types::{EngineError, Side, Trade};

/// Cloneable, thread-safe handle to a [`MatchingEngine`].
///
/// The order-flow producer and the snapshot renderer each hold a clone and
/// coordinate only through the internal lock.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<MatchingEngine>>,
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(MatchingEngine::new())
    }
}

impl SharedEngine {
    /// Wrap an engine for shared use
    pub fn new(engine: MatchingEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Acquire the engine lock.
    ///
    /// A poisoned lock is absorbed: the engine's matching loop runs to
    /// completion inside each critical section, so the state another
    /// thread left behind is always a consistent book.
    fn lock(&self) -> MutexGuard<'_, MatchingEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`MatchingEngine::post_limit_order`]. The matching loop, book
    /// mutation and tape append all happen under one lock acquisition.
    pub fn post_limit_order(
        &self,
        side: Side,
        price: Decimal,
        quantity: u64,
    ) -> Result<Option<u64>, EngineError> {
        self.lock().post_limit_order(side, price, quantity)
    }

    /// See [`MatchingEngine::cancel_order`]
    pub fn cancel_order(&self, order_id: u64) {
        self.lock().cancel_order(order_id);
    }

    /// See [`MatchingEngine::top_of_book`]
    pub fn top_of_book(&self, side: Side, depth: usize) -> Vec<LevelAgg> {
        self.lock().top_of_book(side, depth)
    }

    /// See [`MatchingEngine::recent_trades`]
    pub fn recent_trades(&self, n: usize) -> Vec<Trade> {
        self.lock().recent_trades(n)
    }

    /// Best bid price (fixed-point), if any
    pub fn best_bid(&self) -> Option<u64> {
        self.lock().best_bid()
    }

    /// Best ask price (fixed-point), if any
    pub fn best_ask(&self) -> Option<u64> {
        self.lock().best_ask()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
