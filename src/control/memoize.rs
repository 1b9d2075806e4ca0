//! Call-result caching keyed by argument value.
//!
//! This module provides the [`Memoized`] wrapper. The first call for a
//! given argument invokes the wrapped function and stores the result;
//! later calls with an equal argument return the cached result without
//! invoking the function again.
//!
//! The cache is scoped to the wrapper, unbounded, and never invalidated.
//! Presence is decided by map entry, so results that happen to be `None`
//! or `()` are cached like any other.
//!
//! # Examples
//!
//! ```rust
//! use combinars::control::memoize;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let expensive = memoize(|input: &String| {
//!     calls.set(calls.get() + 1);
//!     input.len()
//! });
//!
//! assert_eq!(expensive.call("hello".to_string()), 5);
//! assert_eq!(expensive.call("hello".to_string()), 5);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A function wrapper that caches results per argument.
///
/// Arguments are the cache key, so they must be hashable and comparable;
/// multi-argument functions memoize naturally over a tuple argument.
/// Results are cloned out of the cache on every hit.
///
/// # Thread Safety
///
/// This type is NOT thread-safe: the cache lives in a [`RefCell`]. Use it
/// from a single thread.
///
/// # Type Parameters
///
/// * `Argument` - The cache key type (`Eq + Hash`)
/// * `Output` - The result type (`Clone`)
/// * `Function` - The wrapped function type
///
/// # Examples
///
/// ## Multi-argument memoization over a tuple
///
/// ```rust
/// use combinars::control::memoize;
///
/// let power = memoize(|(base, exponent): &(i64, u32)| base.pow(*exponent));
///
/// assert_eq!(power.call((2, 10)), 1024);
/// assert_eq!(power.call((2, 10)), 1024);
/// assert_eq!(power.cache_len(), 1);
/// ```
pub struct Memoized<Argument, Output, Function> {
    function: Function,
    cache: RefCell<HashMap<Argument, Output>>,
}

/// Wraps a function with an unbounded per-wrapper result cache.
///
/// The wrapped function receives its argument by reference so the
/// argument can double as the cache key afterwards.
///
/// # Examples
///
/// ```rust
/// use combinars::control::memoize;
///
/// let double = memoize(|n: &i32| n * 2);
/// assert_eq!(double.call(21), 42);
/// ```
pub fn memoize<Argument, Output, Function>(
    function: Function,
) -> Memoized<Argument, Output, Function>
where
    Argument: Eq + Hash,
    Output: Clone,
    Function: Fn(&Argument) -> Output,
{
    Memoized {
        function,
        cache: RefCell::new(HashMap::new()),
    }
}

impl<Argument, Output, Function> Memoized<Argument, Output, Function>
where
    Argument: Eq + Hash,
    Output: Clone,
    Function: Fn(&Argument) -> Output,
{
    /// Invokes the wrapped function, or returns the cached result.
    ///
    /// The underlying function runs at most once per distinct argument;
    /// every later call with an equal argument is a cache hit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::control::memoize;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let tracked = memoize(|n: &i32| {
    ///     calls.set(calls.get() + 1);
    ///     n + 1
    /// });
    ///
    /// tracked.call(1);
    /// tracked.call(2);
    /// tracked.call(1);
    /// assert_eq!(calls.get(), 2); // one computation per distinct argument
    /// ```
    pub fn call(&self, argument: Argument) -> Output {
        if let Some(cached) = self.cache.borrow().get(&argument) {
            return cached.clone();
        }

        let result = (self.function)(&argument);
        self.cache.borrow_mut().insert(argument, result.clone());
        result
    }

    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` when nothing has been cached yet.
    pub fn cache_is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<Argument, Output, Function> fmt::Debug for Memoized<Argument, Output, Function> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}
