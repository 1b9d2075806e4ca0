//! Dynamically shaped values with structural copy semantics.
//!
//! This module provides the [`Value`] type, a tagged representation of the
//! kinds of data this library's dynamic helpers operate on:
//!
//! - primitives (null, booleans, integers, floats, strings)
//! - ordered sequences of values
//! - key-ordered mappings from string keys to values
//! - opaque native functions
//!
//! Cloning a [`Value`] is a deep structural copy: sequences and mappings
//! are duplicated at every depth, so mutating the copy never affects the
//! original. Function leaves are the single exception - they are atomic
//! and shared by reference (cloning bumps an [`Rc`] count).
//!
//! The module also provides [`merge`] (shallow-override map merging) and
//! [`existy`] (the presence predicate used by first-match dispatch).
//!
//! # Thread Safety
//!
//! `Value` is NOT thread-safe: function leaves are reference-counted with
//! [`Rc`]. Use it from a single thread.
//!
//! # Examples
//!
//! ```rust
//! use combinars::value::Value;
//!
//! let original = Value::from(vec![Value::from(1), Value::from("two")]);
//! let copy = original.clone();
//!
//! assert_eq!(original, copy);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

mod merge;
#[cfg(feature = "serde")]
mod serde_impl;

pub use merge::merge;

/// A native function callable with a slice of values.
///
/// Functions are atomic leaves of the value model: they are never copied
/// structurally, only shared by reference.
pub type NativeFn = dyn Fn(&[Value]) -> Value;

/// A dynamically shaped value.
///
/// `Value` models the duck-typed data that the structural-copy, merge and
/// dispatch helpers operate on. It is deliberately small: five primitive
/// shapes, two container shapes, and an opaque function leaf.
///
/// # Structural Copy
///
/// [`Clone`] performs a deep structural copy. Containers are duplicated at
/// every nesting level; the copy never aliases a mutable container with
/// the source. Function leaves keep their identity ([`Rc`] clone), which
/// makes them the only reference-shared leaf type:
///
/// ```rust
/// use combinars::value::Value;
/// use std::rc::Rc;
///
/// let function = Value::function(|_args| Value::Null);
/// let copy = function.clone();
///
/// let (Some(a), Some(b)) = (function.as_func(), copy.as_func()) else {
///     unreachable!()
/// };
/// assert!(Rc::ptr_eq(a, b));
/// ```
///
/// Because every container owns its children, a `Value` tree cannot be
/// made self-referential; the unbounded-recursion hazard of cloning cyclic
/// structures does not arise in this representation.
///
/// # Equality
///
/// Data variants compare structurally. Function leaves compare by pointer
/// identity. `Float` follows IEEE semantics (`NaN != NaN`).
#[derive(Clone, Default)]
pub enum Value {
    /// The explicit "missing" sentinel.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// An owned string.
    Str(String),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// A key-ordered mapping from string keys to values.
    Map(BTreeMap<String, Value>),
    /// An opaque native function, shared by reference.
    Func(Rc<NativeFn>),
}

impl Value {
    /// Wraps a native function as a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::value::Value;
    ///
    /// let double = Value::function(|args| match args {
    ///     [Value::Int(n)] => Value::Int(n * 2),
    ///     _ => Value::Null,
    /// });
    ///
    /// let result = double.invoke(&[Value::Int(21)]);
    /// assert_eq!(result, Some(Value::Int(42)));
    /// ```
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self::Func(Rc::new(function))
    }

    /// Returns `true` unless this value is [`Value::Null`].
    ///
    /// Every other value is existy, including `false`, `0`, the empty
    /// string, and `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::value::Value;
    ///
    /// assert!(!Value::Null.is_existy());
    /// assert!(Value::Bool(false).is_existy());
    /// assert!(Value::Int(0).is_existy());
    /// assert!(Value::from("").is_existy());
    /// assert!(Value::Float(f64::NAN).is_existy());
    /// ```
    #[inline]
    pub const fn is_existy(&self) -> bool {
        !matches!(self, Self::Null)
    }

    /// Returns `true` if this value is [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean payload, if this is a `Bool`.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a `Float`.
    #[inline]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric payload of an `Int` or `Float` as an `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::value::Value;
    ///
    /// assert_eq!(Value::Int(2).as_number(), Some(2.0));
    /// assert_eq!(Value::Float(2.5).as_number(), Some(2.5));
    /// assert_eq!(Value::from("2").as_number(), None);
    /// ```
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a `Str`.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the sequence payload, if this is a `Seq`.
    #[inline]
    pub const fn as_seq(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the mapping payload, if this is a `Map`.
    #[inline]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the function payload, if this is a `Func`.
    #[inline]
    pub const fn as_func(&self) -> Option<&Rc<NativeFn>> {
        match self {
            Self::Func(function) => Some(function),
            _ => None,
        }
    }

    /// Looks up a key in a mapping value.
    ///
    /// Returns `None` when the value is not a mapping or the key is
    /// absent. Combine with [`existy`] to treat both missing sentinels
    /// uniformly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::value::{existy, Value};
    ///
    /// let config = Value::from_iter([("retries".to_string(), Value::Int(3))]);
    ///
    /// assert_eq!(config.get("retries"), Some(&Value::Int(3)));
    /// assert!(!existy(config.get("timeout")));
    /// ```
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|entries| entries.get(key))
    }

    /// Calls a function value with the given arguments.
    ///
    /// Returns `None` when the value is not a function.
    #[inline]
    pub fn invoke(&self, arguments: &[Value]) -> Option<Value> {
        self.as_func().map(|function| function(arguments))
    }

    /// Returns the name of this value's shape, for diagnostics.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Seq(_) => "seq",
            Self::Map(_) => "map",
            Self::Func(_) => "func",
        }
    }
}

/// Returns `true` when a possibly-absent value is present and not null.
///
/// The value model has two "missing" sentinels: `Option::None` for an
/// absent value (a failed lookup) and [`Value::Null`] for an explicit
/// null. `existy` rejects exactly those two; everything else - `false`,
/// `0`, the empty string, `NaN` - is existy.
///
/// # Examples
///
/// ```rust
/// use combinars::value::{existy, Value};
///
/// assert!(!existy(None));
/// assert!(!existy(Some(&Value::Null)));
///
/// assert!(existy(Some(&Value::Int(0))));
/// assert!(existy(Some(&Value::from(""))));
/// assert!(existy(Some(&Value::Bool(false))));
/// ```
#[inline]
pub fn existy(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_existy)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Seq(left), Self::Seq(right)) => left == right,
            (Self::Map(left), Self::Map(right)) => left == right,
            (Self::Func(left), Self::Func(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("Null"),
            Self::Bool(value) => formatter.debug_tuple("Bool").field(value).finish(),
            Self::Int(value) => formatter.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => formatter.debug_tuple("Float").field(value).finish(),
            Self::Str(value) => formatter.debug_tuple("Str").field(value).finish(),
            Self::Seq(items) => formatter.debug_tuple("Seq").field(items).finish(),
            Self::Map(entries) => formatter.debug_tuple("Map").field(entries).finish(),
            Self::Func(function) => formatter
                .debug_tuple("Func")
                .field(&format_args!("{:p}", Rc::as_ptr(function)))
                .finish(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Seq(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Map(entries)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::Seq(items.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(entries: I) -> Self {
        Self::Map(entries.into_iter().collect())
    }
}
