//! Higher-order combinators for building functions out of functions.
//!
//! This module provides macros and helper functions for composing,
//! partially applying, currying, and dispatching between functions in a
//! functional programming style.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`pipe!`]: Compose functions left-to-right (data flow style)
//! - [`partial!`]: Partial function application with placeholder support
//! - [`curry2!`] / [`curry3!`]: Convert multi-argument functions to curried form
//! - [`dispatch!`]: First-match dispatch across a priority-ordered handler list
//!
//! # Helper Functions
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`constant`]: Creates a zero-argument function that always produces the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use combinars::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(double, add_one);
//! assert_eq!(composed(2), 6); // double(add_one(2)) = double(3) = 6
//! ```
//!
//! ## First-match dispatch
//!
//! ```
//! use combinars::dispatch;
//!
//! let by_nickname = |name: &str| (name == "bob").then(|| "Bobby".to_string());
//! let by_initial = |name: &str| name.chars().next().map(|c| c.to_string());
//!
//! let label = dispatch!(by_nickname, by_initial);
//! assert_eq!(label("bob"), Some("Bobby".to_string()));
//! assert_eq!(label("alice"), Some("a".to_string()));
//! ```
//!
//! ## Partial application
//!
//! ```
//! use combinars::partial;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! // Use __ as a placeholder for arguments that should remain as parameters.
//! // Note: Do NOT import __ - it is matched as a literal token by the macro.
//! let add_five = partial!(add, 5, __);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Dispatch Laws
//!
//! - **First match wins**: once a handler produces a value, later handlers
//!   are not invoked
//! - **Fallthrough**: a handler that produces nothing passes the target to
//!   the next handler unchanged

mod compose_macro;
mod curry_macro;
mod dispatch_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{__, Placeholder, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::dispatch;
pub use crate::partial;
pub use crate::pipe;
