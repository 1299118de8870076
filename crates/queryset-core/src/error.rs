// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for QuerySet operations.

use std::error::Error as StdError;

use thiserror::Error;

use crate::RenderError;

/// Result alias for QuerySet terminals over backend error `B`.
pub type QueryResult<T, B> = Result<T, Error<B>>;

/// Failure to turn a fetched row into a model.
#[derive(Debug, Error)]
#[error("failed to decode row: {0}")]
pub struct DecodeError(#[source] pub Box<dyn StdError + Send + Sync>);

impl DecodeError {
    /// Wrap any error as a decode error.
    pub fn new(err: impl StdError + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }
}

/// Error returned by QuerySet terminals.
///
/// `B` is the executor's own error type.
#[derive(Debug, Error)]
pub enum Error<B> {
    /// `one()` fetched no rows.
    #[error("record not found")]
    RecordNotFound,

    /// The executor failed.
    #[error(transparent)]
    Backend(B),

    /// A row could not be decoded into the model.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The scope could not be rendered into SQL.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The executor does not know how to load this relation.
    #[error("preload of relation `{0}` is not supported by this executor")]
    UnsupportedPreload(String)
}

impl<B> Error<B> {
    /// Check if this is the not-found error returned by `one()`.
    pub const fn is_record_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound)
    }

    /// Get the backend error, if this is one.
    pub const fn backend(&self) -> Option<&B> {
        match self {
            Self::Backend(err) => Some(err),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn record_not_found_predicate() {
        let err: Error<io::Error> = Error::RecordNotFound;
        assert!(err.is_record_not_found());
        assert!(err.backend().is_none());
        assert_eq!(err.to_string(), "record not found");
    }

    #[test]
    fn backend_is_transparent() {
        let err: Error<io::Error> = Error::Backend(io::Error::other("connection reset"));
        assert_eq!(err.to_string(), "connection reset");
        assert!(err.backend().is_some());
    }

    #[test]
    fn render_error_converts() {
        let err: Error<io::Error> = RenderError::EmptyUpdate.into();
        assert!(matches!(err, Error::Render(RenderError::EmptyUpdate)));
    }

    #[test]
    fn decode_error_message() {
        let err = DecodeError::new(io::Error::other("bad column"));
        assert_eq!(err.to_string(), "failed to decode row: bad column");
    }
}
