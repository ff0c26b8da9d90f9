//! Errors returned by the matching engine.
//!
//! Only input validation can fail; every other condition (empty book,
//! zero-depth query, unknown cancel id) is a normal case with a well-defined
//! empty or no-op result. A failed call has no observable effect on the
//! book: validation happens before any counter advances or any index is
//! touched.

use rust_decimal::Decimal;
use thiserror::Error;

/// Validation errors for [`post_limit_order`](crate::MatchingEngine::post_limit_order).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Quantity must be a positive number of units.
    #[error("order quantity must be positive")]
    InvalidQuantity,

    /// Price must be non-negative and representable in the book's
    /// fixed-point range.
    #[error("invalid order price: {0}")]
    InvalidPrice(Decimal),
}

// ============================================================================
// Unit Tests
// ============================================================================
