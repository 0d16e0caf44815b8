// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rivulet sequences.
//!
//! A single root [`RivuletError`] travels in-band through every sequence as
//! [`StreamItem::Error`](crate::StreamItem::Error), regardless of whether the sequence
//! is synchronous, asynchronous or adapted from a push producer.
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{RivuletError, Result};
//!
//! fn pull_next() -> Result<u32> {
//!     Err(RivuletError::stream_error("source exhausted its retries"))
//! }
//!
//! assert!(pull_next().is_err());
//! ```

/// Root error type for all rivulet operations.
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// A source failed while producing its next element.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Error raised by user code (a producer, predicate or fold function).
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A push producer could not be subscribed to.
    #[error("Subscription error: {context}")]
    SubscriptionError {
        /// Why the subscription failed
        context: String,
    },
}

impl RivuletError {
    /// A failed pull or a failing producer.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// A push producer refused or failed to subscribe.
    pub fn subscription_error(context: impl Into<String>) -> Self {
        Self::SubscriptionError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

/// Specialized Result type for rivulet operations.
pub type Result<T> = std::result::Result<T, RivuletError>;

/// Extension trait for converting foreign errors into [`RivuletError`].
pub trait IntoRivuletError {
    /// Convert this error into a `RivuletError`, prefixing it with `context`.
    fn into_rivulet_error(self, context: &str) -> RivuletError;

    /// Convert this error into a `RivuletError` as a plain user error.
    fn into_rivulet(self) -> RivuletError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRivuletError for E {
    fn into_rivulet_error(self, context: &str) -> RivuletError {
        if context.is_empty() {
            return RivuletError::user_error(self);
        }
        RivuletError::stream_error(format!("{context}: {self}"))
    }

    fn into_rivulet(self) -> RivuletError {
        RivuletError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s.
pub trait ResultExt<T> {
    /// Prefixes a user error with `context`; other errors pass through unchanged.
    ///
    /// # Errors
    /// Returns `Err(RivuletError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`context`](ResultExt::context), building the message only on error.
    ///
    /// # Errors
    /// Returns `Err(RivuletError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RivuletError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            RivuletError::UserError(inner) => RivuletError::StreamProcessingError {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}

impl Clone for RivuletError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // Boxed user errors cannot be cloned; keep the rendered message.
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::SubscriptionError { context } => Self::SubscriptionError {
                context: context.clone(),
            },
        }
    }
}

/// Errors specific to [`Subject`](crate::Subject) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept new items.
    #[error("Subject is closed")]
    Closed,
}

impl From<SubjectError> for RivuletError {
    fn from(err: SubjectError) -> Self {
        RivuletError::subscription_error(err.to_string())
    }
}
