//! The resting order book: both price-time indices plus the id index.
//!
//! ## Structure
//!
//! - **Slab**: owns every resting `OrderNode`
//! - **`bids: BTreeMap<Reverse<u64>, PriceLevel>`**: highest price first
//! - **`asks: BTreeMap<u64, PriceLevel>`**: lowest price first
//! - **`order_index: HashMap<u64, usize>`**: order id -> slab key, so a
//!   cancel is an O(1) lookup instead of a linear scan of both sides
//!
//! Iterating either side's levels, and the FIFO queue within each level,
//! yields orders in exact execution priority order.
//!
//! The book does not assign ids or decide matches; that is the engine's
//! job. It only maintains the resting set.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use slab::Slab;

use crate::orderbook::{OrderNode, PriceLevel};
use crate::types::{Order, Side};

/// One aggregated price level, derived on demand for top-of-book queries.
///
/// Never stored: the quantity is re-summed from the resting orders on every
/// query so the result cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelAgg {
    /// Level price (fixed-point, scaled by 10^8)
    pub price: u64,
    /// Summed remaining quantity of all resting orders at this price
    pub quantity: u64,
}

/// The resting order book (both sides).
#[derive(Debug, Default)]
pub struct OrderBook {
    /// Storage for all resting orders
    orders: Slab<OrderNode>,

    /// Bid price levels, best (highest) first via `Reverse`
    bids: BTreeMap<Reverse<u64>, PriceLevel>,

    /// Ask price levels, best (lowest) first
    asks: BTreeMap<u64, PriceLevel>,

    /// Order ID to slab key mapping (O(1) cancel)
    order_index: HashMap<u64, usize>,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book with pre-allocated order storage
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(order_capacity),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_index: HashMap::with_capacity(order_capacity),
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Total number of resting orders
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Check if the book is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of distinct bid price levels
    #[inline]
    pub fn bid_levels(&self) -> usize {
        self.bids.len()
    }

    /// Number of distinct ask price levels
    #[inline]
    pub fn ask_levels(&self) -> usize {
        self.asks.len()
    }

    // ========================================================================
    // Insertion / removal
    // ========================================================================

    /// Insert a resting order at the tail of its price level's queue.
    ///
    /// The caller (the engine) guarantees unique ids and positive remaining
    /// quantity.
    ///
    /// Returns the slab key for the inserted order.
    pub fn insert(&mut self, order: Order) -> usize {
        debug_assert!(order.remaining > 0, "resting orders must have quantity");
        debug_assert!(
            !self.order_index.contains_key(&order.id),
            "duplicate order id"
        );

        let order_id = order.id;
        let price = order.price;
        let side = order.side;

        let key = self.orders.insert(OrderNode::new(order));
        self.order_index.insert(order_id, key);

        match side {
            Side::Buy => {
                let level = self
                    .bids
                    .entry(Reverse(price))
                    .or_insert_with(|| PriceLevel::new(price));
                level.push_back(key, &mut self.orders);
            }
            Side::Sell => {
                let level = self
                    .asks
                    .entry(price)
                    .or_insert_with(|| PriceLevel::new(price));
                level.push_back(key, &mut self.orders);
            }
        }

        key
    }

    /// Remove an order by slab key, unlinking it from its price level and
    /// dropping the level if it became empty.
    ///
    /// Returns the removed order, or `None` if the key is vacant.
    pub fn remove(&mut self, key: usize) -> Option<Order> {
        let node = self.orders.get(key)?;
        let order_id = node.order_id();
        let price = node.price();
        let side = node.order.side;

        match side {
            Side::Buy => {
                if let Some(level) = self.bids.get_mut(&Reverse(price)) {
                    level.remove(key, &mut self.orders);
                    if level.is_empty() {
                        self.bids.remove(&Reverse(price));
                    }
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.get_mut(&price) {
                    level.remove(key, &mut self.orders);
                    if level.is_empty() {
                        self.asks.remove(&price);
                    }
                }
            }
        }

        self.order_index.remove(&order_id);
        Some(self.orders.remove(key).order)
    }

    /// Remove an order by its public id.
    ///
    /// Returns the removed order, or `None` if the id is not resting
    /// (already filled or already canceled).
    pub fn cancel(&mut self, order_id: u64) -> Option<Order> {
        let key = *self.order_index.get(&order_id)?;
        self.remove(key)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get a reference to an order by slab key
    #[inline]
    pub fn get(&self, key: usize) -> Option<&Order> {
        self.orders.get(key).map(|node| &node.order)
    }

    /// Get a mutable reference to an order by slab key
    #[inline]
    pub fn get_mut(&mut self, key: usize) -> Option<&mut Order> {
        self.orders.get_mut(key).map(|node| &mut node.order)
    }

    /// Get a resting order by its public id
    #[inline]
    pub fn resting(&self, order_id: u64) -> Option<&Order> {
        let key = *self.order_index.get(&order_id)?;
        self.get(key)
    }

    /// Check if an order id is resting in the book
    #[inline]
    pub fn contains(&self, order_id: u64) -> bool {
        self.order_index.contains_key(&order_id)
    }

    // ========================================================================
    // Best price / priority order
    // ========================================================================

    /// Best bid price (highest resting buy), or `None` if no bids
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.keys().next().map(|r| r.0)
    }

    /// Best ask price (lowest resting sell), or `None` if no asks
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.keys().next().copied()
    }

    /// Spread = best ask - best bid; `None` if either side is empty
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    /// Highest-priority resting order on the given side.
    ///
    /// Returns `(slab key, level price)` for the head of the best level:
    /// the order the matching loop would execute against next.
    pub fn best_order(&self, side: Side) -> Option<(usize, u64)> {
        let level = match side {
            Side::Buy => self.bids.values().next()?,
            Side::Sell => self.asks.values().next()?,
        };
        level.peek_head().map(|key| (key, level.price))
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Aggregate up to `depth` price levels on one side, best price first.
    ///
    /// Quantities are re-summed from the resting orders on every call; no
    /// per-level running total is maintained, so the snapshot always equals
    /// the current book.
    pub fn depth(&self, side: Side, depth: usize) -> Vec<LevelAgg> {
        match side {
            Side::Buy => self
                .bids
                .values()
                .take(depth)
                .map(|level| LevelAgg {
                    price: level.price,
                    quantity: level.total_remaining(&self.orders),
                })
                .collect(),
            Side::Sell => self
                .asks
                .values()
                .take(depth)
                .map(|level| LevelAgg {
                    price: level.price,
                    quantity: level.total_remaining(&self.orders),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
