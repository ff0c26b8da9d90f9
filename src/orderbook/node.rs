//! Order node for slab-based storage.
//!
//! `OrderNode` wraps an [`Order`] with doubly-linked list pointers so a
//! price level can remove any of its orders in O(1) given the slab key.
//! The pointers are slab keys (`usize`), not references:
//!
//! - `next`: the next (newer) order at the same price level
//! - `prev`: the previous (older) order at the same price level

use crate::types::Order;

/// Order node stored in the slab.
///
/// Holds the order data plus the queue links for its price level.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The actual order data
    pub order: Order,

    /// Next order in the price level queue (slab key); None at the tail
    pub next: Option<usize>,

    /// Previous order in the price level queue (slab key); None at the head
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked into a level)
    #[inline]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (not part of any price level queue)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Get the order ID
    #[inline]
    pub fn order_id(&self) -> u64 {
        self.order.id
    }

    /// Get the order price (fixed-point)
    #[inline]
    pub fn price(&self) -> u64 {
        self.order.price
    }

    /// Get the remaining quantity
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.order.remaining
    }

    /// Fill a portion of this order; returns the actual quantity filled
    #[inline]
    pub fn fill(&mut self, quantity: u64) -> u64 {
        self.order.fill(quantity)
    }

    /// Check if the order is fully filled
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.order.is_filled()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
