//! Outcome of a single live lookup.

use thiserror::Error;

use super::error::LookupError;

/// Why a lookup produced no live data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackReason {
    /// The candidate's city is missing from the
    /// [`CityDirectory`](crate::CityDirectory).
    #[error("no metadata for city '{city}'")]
    UnknownCity {
        /// City named by the candidate.
        city: String,
    },
    /// The provider failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Either live data or the reason the caller must fall back.
///
/// # Examples
/// ```
/// use pitlane_core::{Lookup, LookupError};
///
/// let live: Lookup<u8> = Ok(3).into();
/// assert_eq!(live.as_live(), Some(&3));
///
/// let failed: Lookup<u8> = Err(LookupError::Disabled).into();
/// assert!(!failed.is_live());
/// assert_eq!(
///     failed.fallback_reason().map(ToString::to_string).as_deref(),
///     Some("live lookups are disabled"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The provider answered.
    Live(T),
    /// Use the fallback value.
    Fallback(FallbackReason),
}

impl<T> Lookup<T> {
    /// Whether live data is present.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Borrow the live value, if any.
    #[must_use]
    pub const fn as_live(&self) -> Option<&T> {
        match self {
            Self::Live(value) => Some(value),
            Self::Fallback(_) => None,
        }
    }

    /// The fallback reason, if the lookup failed.
    #[must_use]
    pub const fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::Live(_) => None,
            Self::Fallback(reason) => Some(reason),
        }
    }

    /// Transform the live value, keeping any fallback reason.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Live(value) => Lookup::Live(f(value)),
            Self::Fallback(reason) => Lookup::Fallback(reason),
        }
    }
}

impl<T> From<Result<T, LookupError>> for Lookup<T> {
    fn from(result: Result<T, LookupError>) -> Self {
        match result {
            Ok(value) => Self::Live(value),
            Err(err) => Self::Fallback(err.into()),
        }
    }
}
