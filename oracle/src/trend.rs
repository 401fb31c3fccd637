use oracle_core::change_class;

/// Direction of a price move as rendered next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Zero or positive move.
    Up,
    /// Negative move.
    Down,
}

impl Direction {
    /// `Up` for gains and flat moves.
    #[must_use]
    pub const fn from_gaining(gaining: bool) -> Self {
        if gaining { Self::Up } else { Self::Down }
    }

    /// Gain/loss text class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        change_class(matches!(self, Self::Up))
    }

    /// Icon name of the trend arrow.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Up => "trending-up",
            Self::Down => "trending-down",
        }
    }
}
