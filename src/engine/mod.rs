//! Matching engine module.
//!
//! ## Matching Rules
//!
//! - **Buy orders** match against asks (lowest price first)
//! - **Sell orders** match against bids (highest price first)
//! - Ties at one price are broken by arrival order (FIFO)
//! - Trades print at the resting order's price
//! - **Partial fills** leave the resting order in place, keeping its
//!   original time priority
//! - Unfilled incoming quantity rests on the book
//!
//! ## Components
//!
//! - [`MatchingEngine`]: owns the book, the tape and the id/seq counters;
//!   exposes the four public operations
//! - [`TradeTape`]: bounded chronological log of executions
//! - [`SharedEngine`]: `Arc<Mutex<_>>` handle giving whole-call mutual
//!   exclusion for concurrent producers and readers

pub mod matcher;
pub mod shared;
pub mod tape;

pub use matcher::MatchingEngine;
pub use shared::SharedEngine;
pub use tape::{TradeTape, TAPE_RETENTION};
