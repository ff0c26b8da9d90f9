//! Price level management for orders at the same price.
//!
//! ## Design
//!
//! A `PriceLevel` holds all resting orders at a single price point in a
//! doubly-linked FIFO queue (price-time priority):
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Matching consumes orders from the head
//! - Any order can be removed in O(1) using its slab key
//!
//! The level stores only queue structure. Quantity totals are re-derived
//! from the resting orders on every aggregation call, so a query always
//! reflects the current book rather than a maintained counter.

use slab::Slab;
use crate::orderbook::OrderNode;

/// A price level containing orders at a single price.
///
/// The actual order data lives in the slab; this struct only holds the
/// queue metadata.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price for this level (fixed-point, scaled by 10^8)
    pub price: u64,

    /// Head of the order queue (oldest order, slab key); matched first
    pub head: Option<usize>,

    /// Tail of the order queue (newest order, slab key)
    pub tail: Option<usize>,

    /// Number of orders at this price level
    pub order_count: usize,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: u64) -> Self {
        Self {
            price,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    /// Check if the price level is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Add an order to the tail of the queue (FIFO: oldest matched first).
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist in the slab.
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let node = slab.get_mut(key).expect("invalid slab key");

        // Update linked list pointers
        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            // Link the old tail to the new node
            let tail_node = slab.get_mut(tail_key).expect("invalid tail key");
            tail_node.next = Some(key);
        } else {
            // Empty list - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.order_count += 1;
    }

    /// Remove an order from the queue by slab key.
    ///
    /// The node is unlinked but left in the slab; the caller decides when
    /// to free it.
    pub fn remove(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let node = slab.get(key).expect("invalid slab key");
        let prev_key = node.prev;
        let next_key = node.next;

        // Update the previous node's next pointer
        if let Some(prev) = prev_key {
            let prev_node = slab.get_mut(prev).expect("invalid prev key");
            prev_node.next = next_key;
        } else {
            // This was the head
            self.head = next_key;
        }

        // Update the next node's prev pointer
        if let Some(next) = next_key {
            let next_node = slab.get_mut(next).expect("invalid next key");
            next_node.prev = prev_key;
        } else {
            // This was the tail
            self.tail = prev_key;
        }

        // Clear the removed node's pointers
        let node = slab.get_mut(key).expect("invalid slab key");
        node.prev = None;
        node.next = None;

        self.order_count -= 1;
    }

    /// Get the head order's slab key (oldest order, matched first)
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Sum the remaining quantity across all orders at this level.
    ///
    /// Walks the queue on every call; there is no maintained total, so the
    /// result always reflects the current resting state.
    pub fn total_remaining(&self, slab: &Slab<OrderNode>) -> u64 {
        let mut total: u64 = 0;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = slab.get(key).expect("invalid slab key");
            total = total.saturating_add(node.remaining());
            cursor = node.next;
        }
        total
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Order, Side};

    fn create_test_node(slab: &mut Slab<OrderNode>, id: u64, quantity: u64) -> usize {
        let order = Order::new(id, Side::Buy, 10_000_000_000, quantity, id);
        slab.insert(OrderNode::new(order))
    }

    #[test]
    fn test_price_level_new() {
        let level = PriceLevel::new(10_000_000_000);

        assert_eq!(level.price, 10_000_000_000);
        assert!(level.head.is_none());
        assert!(level.tail.is_none());
        assert_eq!(level.order_count, 0);
        assert!(level.is_empty());
    }

    #[test]
    fn test_price_level_push_single() {
        let mut slab = Slab::with_capacity(10);
        let mut level = PriceLevel::new(10_000_000_000);

        let key = create_test_node(&mut slab, 1, 10);
        level.push_back(key, &mut slab);

        assert_eq!(level.order_count, 1);
        assert_eq!(level.head, Some(key));
        assert_eq!(level.tail, Some(key));
        assert!(!level.is_empty());

        // Node should have no links (it's the only one)
        let node = slab.get(key).unwrap();
        assert!(node.prev.is_none());
        assert!(node.next.is_none());
    }

    #[test]
    fn test_price_level_fifo_order() {
        let mut slab = Slab::with_capacity(10);
        let mut level = PriceLevel::new(10_000_000_000);

        let key1 = create_test_node(&mut slab, 1, 10);
        let key2 = create_test_node(&mut slab, 2, 20);
        let key3 = create_test_node(&mut slab, 3, 30);

        level.push_back(key1, &mut slab);
        level.push_back(key2, &mut slab);
        level.push_back(key3, &mut slab);

        assert_eq!(level.order_count, 3);
        assert_eq!(level.head, Some(key1));
        assert_eq!(level.tail, Some(key3));

        // Verify linked list structure: key1 <-> key2 <-> key3
        let node1 = slab.get(key1).unwrap();
        assert!(node1.prev.is_none());
        assert_eq!(node1.next, Some(key2));

        let node2 = slab.get(key2).unwrap();
        assert_eq!(node2.prev, Some(key1));
        assert_eq!(node2.next, Some(key3));

        let node3 = slab.get(key3).unwrap();
        assert_eq!(node3.prev, Some(key2));
        assert!(node3.next.is_none());
    }

    #[test]
    fn test_price_level_remove_middle() {
        let mut slab = Slab::with_capacity(10);
        let mut level = PriceLevel::new(10_000_000_000);

        let key1 = create_test_node(&mut slab, 1, 10);
        let key2 = create_test_node(&mut slab, 2, 20);
        let key3 = create_test_node(&mut slab, 3, 30);

        level.push_back(key1, &mut slab);
        level.push_back(key2, &mut slab);
        level.push_back(key3, &mut slab);

        level.remove(key2, &mut slab);

        assert_eq!(level.order_count, 2);
        assert_eq!(level.head, Some(key1));
        assert_eq!(level.tail, Some(key3));

        // Verify new linked list: key1 <-> key3
        let node1 = slab.get(key1).unwrap();
        assert_eq!(node1.next, Some(key3));
        let node3 = slab.get(key3).unwrap();
        assert_eq!(node3.prev, Some(key1));
    }

    #[test]
    fn test_price_level_remove_head() {
        let mut slab = Slab::with_capacity(10);
        let mut level = PriceLevel::new(10_000_000_000);

        let key1 = create_test_node(&mut slab, 1, 10);
        let key2 = create_test_node(&mut slab, 2, 20);

        level.push_back(key1, &mut slab);
        level.push_back(key2, &mut slab);

        level.remove(key1, &mut slab);

        assert_eq!(level.order_count, 1);
        assert_eq!(level.head, Some(key2));
        assert_eq!(level.tail, Some(key2));

        // key2 should now be unlinked (only element)
        let node2 = slab.get(key2).unwrap();
        assert!(node2.prev.is_none());
        assert!(node2.next.is_none());
    }

    #[test]
    fn test_price_level_remove_only() {
        let mut slab = Slab::with_capacity(10);
        let mut level = PriceLevel::new(10_000_000_000);

        let key = create_test_node(&mut slab, 1, 10);
        level.push_back(key, &mut slab);
        level.remove(key, &mut slab);

        assert!(level.is_empty());
        assert_eq!(level.order_count, 0);
        assert!(level.head.is_none());
        assert!(level.tail.is_none());
    }

    #[test]
    fn test_price_level_total_remaining() {
        let mut slab = Slab::with_capacity(10);
        let mut level = PriceLevel::new(10_000_000_000);

        assert_eq!(level.total_remaining(&slab), 0);

        let key1 = create_test_node(&mut slab, 1, 10);
        let key2 = create_test_node(&mut slab, 2, 20);
        level.push_back(key1, &mut slab);
        level.push_back(key2, &mut slab);

        assert_eq!(level.total_remaining(&slab), 30);

        // A partial fill is visible without any bookkeeping on the level
        slab.get_mut(key1).unwrap().fill(4);
        assert_eq!(level.total_remaining(&slab), 26);

        level.remove(key1, &mut slab);
        assert_eq!(level.total_remaining(&slab), 20);
    }

    #[test]
    fn test_price_level_peek_head() {
        let mut slab = Slab::with_capacity(10);
        let mut level = PriceLevel::new(10_000_000_000);

        assert!(level.peek_head().is_none());

        let key = create_test_node(&mut slab, 1, 10);
        level.push_back(key, &mut slab);

        assert_eq!(level.peek_head(), Some(key));
    }
}
