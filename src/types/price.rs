//! Fixed-point price utilities.
//!
//! ## Overview
//!
//! The book stores prices as `u64` scaled by 10^8, which keeps ordering
//! comparisons exact and cheap. Callers submit and read prices as
//! `rust_decimal::Decimal`; conversion happens once at the engine boundary.
//!
//! ## Examples
//!
//! ```
//! use clob_sim::types::price::{to_fixed, format_price};
//!
//! let price = to_fixed("100.25").unwrap();
//! assert_eq!(price, 10_025_000_000);
//! assert_eq!(format_price(price), "100.25");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point prices: 10^8 (8 decimal places)
pub const SCALE: u64 = 100_000_000;

/// Largest price representable in the fixed-point range
pub const MAX_PRICE: u64 = u64::MAX / SCALE;

/// Convert a decimal string to fixed-point u64.
///
/// Returns `None` if parsing fails, the value is negative, or it is out of
/// the representable range.
pub fn to_fixed(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_fixed(decimal)
}

/// Convert a `Decimal` to fixed-point u64.
///
/// Returns `None` for negative or out-of-range values. Sub-10^-8 precision
/// is rounded to the nearest representable price.
pub fn decimal_to_fixed(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() && !d.is_zero() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    scaled.round_dp(0).to_u64()
}

/// Convert a fixed-point u64 back to a `Decimal`.
pub fn fixed_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Format a fixed-point price with two decimal places for display.
pub fn format_price(value: u64) -> String {
    format!("{:.2}", fixed_to_decimal(value))
}

// ============================================================================
// Unit Tests
// ============================================================================
