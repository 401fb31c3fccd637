use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the StockOracle workspace.
///
/// Formatting and classification are total over their domains; errors only
/// arise at parsing boundaries, from suggestion sources, and from talking to a
/// controller that has already shut down.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OracleError {
    /// A currency code that is not a listed ISO 4217 code.
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),

    /// A date string that is neither `YYYY-MM-DD` nor RFC 3339.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// A sentiment label outside the seven-point scale.
    #[error("unknown sentiment label: {0:?}")]
    UnknownSentiment(String),

    /// Any other closed-set label (source type, match type, action, ...) that did not parse.
    #[error("unknown {kind} label: {value:?}")]
    UnknownLabel {
        /// Which label family was being parsed (e.g. "source type").
        kind: String,
        /// The rejected input.
        value: String,
    },

    /// The search controller task is gone; the handle can no longer be used.
    #[error("search controller closed")]
    ControllerClosed,

    /// A suggestion source failed to produce results.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Name of the failing source.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl OracleError {
    /// Helper: build an `UnknownLabel` error.
    pub fn unknown_label(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownLabel {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Helper: build a `Source` error tagged with the source name.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if the error comes from bad caller input rather than a runtime condition.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCurrency(_)
                | Self::InvalidDate(_)
                | Self::UnknownSentiment(_)
                | Self::UnknownLabel { .. }
        )
    }
}
