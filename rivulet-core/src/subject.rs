// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber push source.
//!
//! A [`Subject`] broadcasts each value to every observer subscribed at the time of
//! sending.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past values, only values sent after subscribing.
//! - **Unbounded**: Observers are called synchronously; adapted sequences buffer without limit.
//! - **Thread-safe**: Cheap to clone; all clones share the same internal state.
//! - **Error/close**: Errors and completion reach every observer and terminate the subject.
//!
//! Observers run while the subject's lock is held, so an observer must not call back
//! into the same subject.
//!
//! ## Example
//!
//! ```
//! use rivulet_core::{Source, Subject};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<i32>::new();
//! let mut values = Source::from(subject.clone()).into_async();
//!
//! // the push source is subscribed on first poll
//! let first = tokio::spawn(async move { values.next().await });
//! while subject.subscriber_count() == 0 {
//!     tokio::task::yield_now().await;
//! }
//!
//! subject.next(7).unwrap();
//! assert_eq!(first.await.unwrap().unwrap().unwrap(), 7);
//! # }
//! ```

use crate::error::SubjectError;
use crate::logging::{debug, trace};
use crate::mutex::Mutex;
use crate::push::{Observer, PushSource, Subscription};
use crate::RivuletError;
use core::mem;
use std::sync::{Arc, Weak};

struct SubjectState<T> {
    closed: bool,
    next_id: u64,
    observers: Vec<(u64, Observer<T>)>,
}

/// A hot push source that broadcasts values to all current observers.
///
/// See the [module documentation](self) for details.
pub struct Subject<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates an open subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                next_id: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Registers `observer` until the returned subscription is dropped.
    ///
    /// Subscribing to a closed subject completes the observer immediately.
    pub fn observe(&self, observer: Observer<T>) -> Subscription {
        let mut state = self.state.lock();
        if state.closed {
            drop(state);
            observer.complete();
            return Subscription::empty();
        }

        let id = state.next_id;
        state.next_id += 1;
        state.observers.push((id, observer));
        trace!(id, "subject observer registered");

        let weak: Weak<Mutex<SubjectState<T>>> = Arc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.lock().observers.retain(|(other, _)| *other != id);
                trace!(id, "subject observer removed");
            }
        })
    }

    /// Sends a value to all current observers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        for (_, observer) in state.observers.iter_mut() {
            observer.next(value.clone());
        }
        Ok(())
    }

    /// Sends an error to all observers and terminates the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already been closed.
    pub fn error(&self, err: RivuletError) -> Result<(), SubjectError> {
        let observers = {
            let mut state = self.state.lock();
            if state.closed {
                return Err(SubjectError::Closed);
            }
            state.closed = true;
            mem::take(&mut state.observers)
        };

        debug!(observers = observers.len(), error = %err, "subject failed");
        for (_, observer) in observers {
            observer.error(err.clone());
        }
        Ok(())
    }

    /// Completes every observer and closes the subject.
    ///
    /// After closing, `next()` and `error()` return `SubjectError::Closed` and new
    /// observers complete immediately. Closing is idempotent.
    pub fn close(&self) {
        let observers = {
            let mut state = self.state.lock();
            state.closed = true;
            mem::take(&mut state.observers)
        };

        for (_, observer) in observers {
            observer.complete();
        }
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().observers.len()
    }
}

impl<T: Clone + Send + 'static> PushSource<T> for Subject<T> {
    fn subscribe(self: Box<Self>, observer: Observer<T>) -> Subscription {
        self.observe(observer)
    }
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
