//! The limit in force for one scope.

use serde::{Deserialize, Serialize};

/// How many connections one scope instance (a connection, a group, a user on
/// a connection...) may hold at once.
///
/// Properties and overrides write `0` for "no limit". The zero sentinel is
/// turned into [`ConnectionLimit::Unlimited`] on conversion and never
/// compared as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionLimit {
    Fixed(u32),
    Unlimited,
}

impl ConnectionLimit {
    /// Whether the scope is full with `live` connections already open, so
    /// one more would be refused.
    pub fn is_reached_at(self, live: u32) -> bool {
        matches!(self, Self::Fixed(max) if live >= max)
    }
}

impl From<u32> for ConnectionLimit {
    fn from(configured: u32) -> Self {
        match configured {
            0 => Self::Unlimited,
            max => Self::Fixed(max),
        }
    }
}

impl std::fmt::Display for ConnectionLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(max) => write!(f, "{max}"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_session_scope_is_full_at_one() {
        let limit = ConnectionLimit::from(1);
        assert!(!limit.is_reached_at(0));
        assert!(limit.is_reached_at(1));
        assert!(limit.is_reached_at(5));
    }

    #[test]
    fn test_zero_sentinel_never_fills() {
        let limit = ConnectionLimit::from(0);
        assert_eq!(limit, ConnectionLimit::Unlimited);
        for live in [0, 1, u32::MAX] {
            assert!(!limit.is_reached_at(live));
        }
        assert_eq!(limit.to_string(), "unlimited");
    }

    #[test]
    fn test_configured_value_is_kept() {
        assert_eq!(ConnectionLimit::from(25), ConnectionLimit::Fixed(25));
        assert_eq!(ConnectionLimit::from(25).to_string(), "25");
    }
}
