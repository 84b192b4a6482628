//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Date and time types for commence times, snapshot dates and `commenceTimeFrom/To` filters.
pub use chrono::{DateTime, Utc};
/// Arbitrary precision decimal type for prices and points, passed through exactly as sent.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use odds_api_client::types::dec;
/// let price = dec!(1.91);
/// ```
pub use rust_decimal_macros::dec;
