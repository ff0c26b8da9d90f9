//! Order book module: the price-time index.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: every resting order lives in a `Slab`; price
//!   levels and the id index refer to orders by slab key
//! - **Price levels**: orders grouped by price using `BTreeMap` (bids
//!   highest-first via `Reverse`, asks lowest-first)
//! - **Price-time priority**: FIFO queue at each price level, so iteration
//!   order is always execution priority order
//!
//! ## Components
//!
//! - [`OrderNode`]: Wrapper around `Order` with linked-list pointers
//! - [`PriceLevel`]: FIFO queue of orders at a single price point
//! - [`OrderBook`]: Both sides plus the id index
//! - [`LevelAgg`]: Per-query price level aggregate (derived, never stored)
//!
//! ## Complexity
//!
//! | Operation            | Complexity |
//! |----------------------|------------|
//! | Insert order         | O(log n)   |
//! | Cancel order by ID   | O(1)       |
//! | Best bid/ask         | O(1)       |
//! | Depth aggregation    | O(orders in the top `depth` levels) |

pub mod node;
pub mod level;
pub mod book;

pub use node::OrderNode;
pub use level::PriceLevel;
pub use book::{LevelAgg, OrderBook};
