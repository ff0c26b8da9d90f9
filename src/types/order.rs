//! Order types for the matching engine.
//!
//! ## Price-Time Identity
//!
//! Every order carries two monotonic values assigned at submission:
//!
//! - `id`: the public identifier returned to the caller (used for cancels)
//! - `seq`: the arrival sequence number used as the time-priority tie-break
//!
//! Both come from engine-owned counters that never reset. A partial fill
//! mutates `remaining` in place and never touches `seq`, so time priority
//! survives partial fills.

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the asset
    Buy,
    /// Sell order (ask) - wants to sell the asset
    Sell,
}

impl Side {
    /// Returns the opposite side (the side an incoming order matches against)
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Short label for display
    pub fn label(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order.
///
/// `price` is fixed-point (scaled by 10^8); `quantity`/`remaining` are plain
/// integer units. An order is owned exclusively by the side index it rests
/// in; it is removed when `remaining` reaches zero or when canceled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier (assigned by the engine, never reused)
    pub id: u64,

    /// Buy or Sell
    pub side: Side,

    /// Limit price in fixed-point (scaled by 10^8)
    pub price: u64,

    /// Original quantity in units
    pub quantity: u64,

    /// Remaining quantity; decremented as the order is matched
    pub remaining: u64,

    /// Arrival sequence number (time-priority tie-break, assigned once)
    pub seq: u64,
}

impl Order {
    /// Create a new limit order with `remaining == quantity`.
    pub fn new(id: u64, side: Side, price: u64, quantity: u64, seq: u64) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            remaining: quantity,
            seq,
        }
    }

    /// Check if the order is fully filled
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Quantity filled so far
    pub fn filled_quantity(&self) -> u64 {
        self.quantity.saturating_sub(self.remaining)
    }

    /// Fill a portion of this order.
    ///
    /// Returns the actual quantity filled, which may be less than requested
    /// if the order does not have that much remaining.
    pub fn fill(&mut self, fill_qty: u64) -> u64 {
        let actual_fill = fill_qty.min(self.remaining);
        self.remaining -= actual_fill;
        actual_fill
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
