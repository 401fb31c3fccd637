//! ISO 4217 currencies and their en-US display conventions.
//!
//! Code lookup, symbols and minor units come from the `iso_currency` table;
//! this module only normalizes input and decides when a symbol is usable.

use std::fmt;
use std::str::FromStr;

use iso_currency::Currency as IsoCurrency;
use oracle_types::OracleError;
use serde::{Deserialize, Serialize};

/// Generic currency sign the ISO table uses for currencies without their own symbol.
const GENERIC_SIGN: &str = "¤";

/// Fraction digits for codes the ISO table leaves without an exponent (metals, funds).
const DEFAULT_MINOR_UNITS: u32 = 2;

/// A known ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(IsoCurrency);

impl Currency {
    /// US dollar.
    pub const USD: Self = Self(IsoCurrency::USD);
    /// Euro.
    pub const EUR: Self = Self(IsoCurrency::EUR);
    /// Japanese yen.
    pub const JPY: Self = Self(IsoCurrency::JPY);
    /// South Korean won.
    pub const KRW: Self = Self(IsoCurrency::KRW);

    /// Parse a code, case-insensitively.
    ///
    /// # Errors
    /// Returns `OracleError::InvalidCurrency` when `code` is not a listed ISO 4217 code.
    pub fn parse(code: &str) -> Result<Self, OracleError> {
        IsoCurrency::from_code(&code.to_ascii_uppercase())
            .map(Self)
            .ok_or_else(|| OracleError::InvalidCurrency(code.to_string()))
    }

    /// The uppercase code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.0.code()
    }

    /// The underlying ISO table entry.
    #[must_use]
    pub const fn iso(&self) -> IsoCurrency {
        self.0
    }

    /// Symbol to print before the amount, if the currency has a dedicated one.
    #[must_use]
    pub fn symbol(&self) -> Option<String> {
        let symbol = self.0.symbol().symbol;
        let usable = !symbol.is_empty() && symbol != GENERIC_SIGN && symbol != self.code();
        usable.then_some(symbol)
    }

    /// Number of fraction digits shown for this currency.
    #[must_use]
    pub fn minor_units(&self) -> u32 {
        self.0.exponent().map_or(DEFAULT_MINOR_UNITS, u32::from)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::USD
    }
}

impl From<IsoCurrency> for Currency {
    fn from(iso: IsoCurrency) -> Self {
        Self(iso)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = OracleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.code().to_string()
    }
}
