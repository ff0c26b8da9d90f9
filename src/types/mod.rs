//! Core data types for the order book simulator.
//!
//! All prices are stored as fixed-point `u64` scaled by 10^8; quantities are
//! plain integer units. `rust_decimal::Decimal` appears only at the API
//! boundary (see [`price`]).
//!
//! ## Types
//!
//! - [`Order`]: A limit order resting in (or crossing) the book
//! - [`Side`]: Buy or Sell
//! - [`Trade`]: An executed match between two orders
//! - [`EngineError`]: Input validation failures

mod error;
mod order;
mod trade;
pub mod price;

// Re-export all types at module level
pub use error::EngineError;
pub use order::{Order, Side};
pub use trade::Trade;
