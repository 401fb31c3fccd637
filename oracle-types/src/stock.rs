//! Quote-like stock record used for search suggestions and listings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minimal stock identity/price tuple.
///
/// `ticker` is the unique key. The sign of `change_percent` is assumed to match
/// the sign of `change`; the data source is trusted on this and nothing here
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    /// Short uppercase identifier, e.g. `AAPL`.
    pub ticker: String,
    /// Display name, e.g. `Apple Inc.`.
    pub company_name: String,
    /// Listing exchange, e.g. `NASDAQ`.
    pub exchange: String,
    /// Sector, e.g. `Technology`.
    pub sector: String,
    /// Industry, e.g. `Consumer Electronics`.
    pub industry: String,
    /// Market capitalization in currency units.
    pub market_cap: u64,
    /// Last traded price.
    pub current_price: Decimal,
    /// Absolute change since previous close.
    pub change: Decimal,
    /// Percent change since previous close.
    pub change_percent: Decimal,
}

impl Stock {
    /// `true` when the percent change is zero or positive.
    #[must_use]
    pub fn is_gaining(&self) -> bool {
        !self.change_percent.is_sign_negative() || self.change_percent.is_zero()
    }
}
