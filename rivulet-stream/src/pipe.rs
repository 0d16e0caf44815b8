// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Composes single-argument stages left to right.
///
/// `pipe!(f, g, h)` evaluates to a closure computing `h(g(f(x)))`. Stages are ordinary
/// expressions, typically closures partially applying a combinator. `pipe!()` is the
/// identity.
///
/// # Examples
///
/// ```rust
/// use rivulet_core::Seq;
/// use rivulet_stream::{filter, map, pipe};
///
/// let evens_doubled = pipe!(
///     |s: Vec<i32>| filter(s, |x| x % 2 == 0),
///     |s: Seq<i32>| map(s, |x| x * 2),
/// );
///
/// let out = evens_doubled(vec![1, 2, 3, 4]);
/// assert_eq!(out.collect().now().unwrap().unwrap(), vec![4, 8]);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        |x| x
    };
    ($stage:expr $(,)?) => {
        $stage
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::pipe!($($rest),+);
        move |x| rest(first(x))
    }};
}
