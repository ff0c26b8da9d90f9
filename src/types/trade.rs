//! Trade type representing an executed match between two orders.

use crate::types::Side;

/// A trade is one execution step of the matching loop.
///
/// ## Terminology
///
/// - **Maker**: The resting order that was already in the book
/// - **Taker** (aggressor): The incoming order that triggered the match
///
/// ## Price Discovery
///
/// The trade always executes at the maker's price (the resting order's
/// price), standard price-time priority behavior.
///
/// Trades are immutable once created and evicted from the tape only by the
/// retention window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    /// Unique trade identifier (assigned by the engine)
    pub id: u64,

    /// Maker order ID (the resting order)
    pub maker_order_id: u64,

    /// Taker order ID (the incoming order)
    pub taker_order_id: u64,

    /// Execution price in fixed-point (scaled by 10^8), always the maker's
    pub price: u64,

    /// Executed quantity in units
    pub quantity: u64,

    /// Side of the incoming order that crossed the spread
    pub aggressor: Side,

    /// Sequence stamp from the engine's monotonic counter
    pub seq: u64,
}

impl Trade {
    /// Create a new trade
    pub fn new(
        id: u64,
        maker_order_id: u64,
        taker_order_id: u64,
        price: u64,
        quantity: u64,
        aggressor: Side,
        seq: u64,
    ) -> Self {
        Self {
            id,
            maker_order_id,
            taker_order_id,
            price,
            quantity,
            aggressor,
            seq,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
