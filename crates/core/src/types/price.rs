//! Menu prices.
//!
//! Prices in the catalog are whole positive integers with no minor currency
//! unit. Cart and order totals are plain `u64` sums of those prices, formatted
//! with [`format_amount`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Prices must be strictly positive.
    #[error("price must be greater than zero")]
    Zero,
}

/// A positive menu price.
///
/// ```
/// use tiffin_core::Price;
///
/// let price = Price::new(12).unwrap();
/// assert_eq!(price.amount(), 12);
/// assert_eq!(price.display("$"), "$12");
/// assert!(Price::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Price(u32);

impl Price {
    /// Create a price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Zero`] if `amount` is zero.
    pub const fn new(amount: u32) -> Result<Self, PriceError> {
        if amount == 0 {
            return Err(PriceError::Zero);
        }
        Ok(Self(amount))
    }

    /// The price as a whole number.
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }

    /// Price multiplied by a quantity, widened so large carts cannot overflow.
    #[must_use]
    pub fn times(self, quantity: u32) -> u64 {
        u64::from(self.0) * u64::from(quantity)
    }

    /// Format for display with a currency symbol prefix (e.g. `"$12"`).
    #[must_use]
    pub fn display(self, symbol: &str) -> String {
        format_amount(symbol, u64::from(self.0))
    }
}

impl TryFrom<u32> for Price {
    type Error = PriceError;

    fn try_from(amount: u32) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for u32 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format a total amount with a currency symbol prefix.
#[must_use]
pub fn format_amount(symbol: &str, amount: u64) -> String {
    format!("{symbol}{amount}")
}
