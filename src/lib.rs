//! # clob-sim
//!
//! A simulated continuous limit order book (CLOB).
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Side, Trade) and fixed-point
//!   price helpers
//! - **OrderBook**: Price-time indexed book with slab-based order storage
//! - **Engine**: Matching engine owning the book, a bounded trade tape and
//!   the id/sequence counters
//!
//! ## Design Principles
//!
//! 1. **Price-time priority**: Best price first, then FIFO at each price
//! 2. **No floating point in the book**: Prices are fixed-point u64
//!    (10^8 scaling); `rust_decimal::Decimal` only at the API boundary
//! 3. **Atomic posts**: Matching, book mutation and tape append happen as
//!    one unit before a `post_limit_order` call returns
//! 4. **One lock**: `SharedEngine` guards the whole engine with a single
//!    mutex, giving sequentially consistent reads and writes
//!
//! The simulator binary drives the engine with a randomized order-flow
//! thread and renders top-of-book snapshots to the terminal.

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, Trade, price helpers, errors
pub mod types;

/// Order book: price-time index with slab-based storage
pub mod orderbook;

/// Matching engine: continuous price-time matching plus the trade tape
pub mod engine;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{EngineError, Order, Side, Trade};
pub use orderbook::{LevelAgg, OrderBook, OrderNode, PriceLevel};
pub use engine::{MatchingEngine, SharedEngine, TradeTape, TAPE_RETENTION};
