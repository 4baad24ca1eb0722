//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain logic.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A product's price-tier list is present but malformed.
    ///
    /// Raised at normalization/resolution time rather than silently
    /// picking a wrong tier.
    #[error("Invalid tier data: {0}")]
    InvalidTierData(String),

    /// An unrecognized currency code was supplied.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}
