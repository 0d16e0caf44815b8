// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{Result, RivuletError};

/// An element of a sequence: either a value or the error that terminates it.
///
/// Every sequence kind (sync, async, adapted push) carries `StreamItem<T>`, so a
/// failing pull and a failing producer look the same to a consumer. Most helpers
/// go through [`into_result`](StreamItem::into_result).
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    Value(T),
    /// Terminal; nothing follows it.
    Error(RivuletError),
}

impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        // Errors never compare equal, not even to themselves.
        matches!((self, other), (StreamItem::Value(a), StreamItem::Value(b)) if a == b)
    }
}

impl<T> StreamItem<T> {
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    pub fn into_result(self) -> Result<T> {
        self.into()
    }

    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }

    pub fn err(self) -> Option<RivuletError> {
        self.into_result().err()
    }

    /// Maps the value, leaving an error untouched.
    pub fn map<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> U,
    {
        self.into_result().map(f).into()
    }

    /// # Panics
    /// Panics if the item is an `Error`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect("called `StreamItem::unwrap()` on an `Error` value")
    }

    /// # Panics
    /// Panics with `msg` if the item is an `Error`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(err) => panic!("{msg}: {err}"),
        }
    }
}

impl<T> From<Result<T>> for StreamItem<T> {
    fn from(result: Result<T>) -> Self {
        result.map_or_else(StreamItem::Error, StreamItem::Value)
    }
}

impl<T> From<StreamItem<T>> for Result<T> {
    fn from(item: StreamItem<T>) -> Self {
        match item {
            StreamItem::Value(value) => Ok(value),
            StreamItem::Error(err) => Err(err),
        }
    }
}
