//! # combinars
//!
//! A functional utilities library for Rust providing structural value
//! copying, higher-order combinators, memoization, and a minimal monad
//! builder.
//!
//! ## Overview
//!
//! This library collects small, independent functional-programming helpers
//! that are not provided by the standard library. It includes:
//!
//! - **Dynamic Values**: a structurally copyable [`value::Value`] with deep
//!   clone, shallow-override merge, and an existence predicate
//! - **Sequence Helpers**: slice, splice, reduce and friends with
//!   negative-index support
//! - **Combinators**: compose!, pipe!, partial!, curry2!, dispatch! macros
//! - **Memoization**: unbounded per-wrapper call-result caching
//! - **Scale Generator**: clamped linear interpolation closures
//! - **Monad Builder**: a dynamic wrapper type with named lifted operations
//! - **Debounce**: trailing-edge call collapsing on a tokio timer
//!
//! ## Feature Flags
//!
//! - `value`: Dynamic `Value` model (clone, merge, existy)
//! - `sequence`: Generic sequence helpers
//! - `compose`: Combinator macros and helper functions
//! - `control`: Memoization
//! - `monad`: Dynamic monad builder
//! - `scale`: Linear scale generator
//! - `async`: Debounce on a tokio timer
//! - `serde`: Serialization for the data subset of `Value`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let composed = compose!(double, add_one);
//! assert_eq!(composed(2), 6); // double(add_one(2))
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "value")]
    pub use crate::value::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "monad")]
    pub use crate::monad::*;

    #[cfg(feature = "scale")]
    pub use crate::scale::*;
}

#[cfg(feature = "value")]
pub mod value;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "monad")]
pub mod monad;

#[cfg(feature = "scale")]
pub mod scale;
