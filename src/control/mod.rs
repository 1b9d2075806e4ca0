//! Locally stateful control wrappers.
//!
//! This module provides wrappers that add a small amount of private state
//! around a plain function:
//!
//! - [`Memoized`]: call-result caching keyed by the argument value
//! - [`Debounced`]: trailing-edge call collapsing on a timer (feature
//!   `async`)
//!
//! # Examples
//!
//! ## Memoization
//!
//! ```rust
//! use combinars::control::memoize;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let slow_square = memoize(|n: &i64| {
//!     calls.set(calls.get() + 1);
//!     n * n
//! });
//!
//! assert_eq!(slow_square.call(12), 144);
//! assert_eq!(slow_square.call(12), 144);
//! assert_eq!(calls.get(), 1); // computed once, served from cache after
//! ```

mod memoize;

#[cfg(feature = "async")]
mod debounce;

pub use memoize::{Memoized, memoize};

#[cfg(feature = "async")]
pub use debounce::{Debounced, debounce};
