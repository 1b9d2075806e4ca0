//! A minimal dynamic monad builder over [`Value`].
//!
//! This module provides a constructor for small wrapper types built at
//! runtime: a [`Unit`] wraps values into [`Instance`]s, optionally
//! passing every wrapped value through a modifier function, and can
//! [`lift`](Unit::lift) named operations that become available on every
//! instance it produces - past and future, since the operation registry
//! is shared per constructor.
//!
//! Bind callables return an [`Outcome`], an explicit tagged type that
//! tells [`bind`](Instance::bind) whether the result is already wrapped
//! (returned as-is) or plain (re-wrapped through the constructor, running
//! the modifier again). The discriminant replaces any duck-typed
//! "is this a monad?" inspection.
//!
//! # Modifier Semantics
//!
//! When a constructor carries a modifier, the modifier runs on *every*
//! wrap - both at construction and whenever `bind` re-wraps a plain
//! result. A classic lawful monad has no modifier; with one, the wrapper
//! behaves like a decorated container and the identity laws deliberately
//! do not hold.
//!
//! # Examples
//!
//! ```rust
//! use combinars::monad::{Outcome, Unit};
//! use combinars::value::Value;
//!
//! let annotated = Unit::with_modifier(|value| match value {
//!     Value::Str(text) => Value::Str(text + " - modified"),
//!     other => other,
//! });
//!
//! let instance = annotated.wrap("x");
//! assert_eq!(instance.value(), &Value::from("x - modified"));
//!
//! annotated
//!     .lift("lifted", |value, _args| match value {
//!         Value::Str(text) => Outcome::from(Value::Str(text.clone() + " - lifted")),
//!         other => Outcome::from(other.clone()),
//!     })
//!     .unwrap();
//!
//! // The lifted result is plain, so it is re-wrapped and re-modified.
//! let result = annotated.wrap("x").invoke("lifted", &[]).unwrap();
//! assert_eq!(result.value(), &Value::from("x - modified - lifted - modified"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

mod error;

pub use error::MonadError;

/// Signature of bind callables and lifted operations.
///
/// An operation receives the instance's stored value and the call-time
/// arguments, and produces an [`Outcome`].
pub type OperationFn = dyn Fn(&Value, &[Value]) -> Outcome;

type ModifierFn = dyn Fn(Value) -> Value;

/// The tagged result of a bind callable.
///
/// `Plain` results are re-wrapped through the constructor (running its
/// modifier); `Wrapped` results are taken as-is. The explicit
/// discriminant is what [`Instance::bind`] matches on - there is no
/// marker-field sniffing of arbitrary values.
pub enum Outcome {
    /// An unwrapped value; `bind` will wrap it.
    Plain(Value),
    /// An already-wrapped instance; `bind` passes it through untouched.
    Wrapped(Instance),
}

impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        Self::Plain(value)
    }
}

impl From<Instance> for Outcome {
    fn from(instance: Instance) -> Self {
        Self::Wrapped(instance)
    }
}

/// Constructor state shared by a `Unit` and every instance it produces.
struct Shared {
    modifier: Option<Box<ModifierFn>>,
    operations: RefCell<HashMap<String, Rc<OperationFn>>>,
}

impl Shared {
    fn apply_modifier(&self, value: Value) -> Value {
        match &self.modifier {
            Some(modifier) => modifier(value),
            None => value,
        }
    }
}

/// A monad constructor.
///
/// Each `Unit` owns a fresh operation registry and an optional modifier.
/// Cloning a `Unit` shares that state; two separately constructed `Unit`s
/// share nothing, so lifting an operation on one can never leak into the
/// other.
///
/// # Thread Safety
///
/// Constructor state is reference-counted with [`Rc`]; use it from a
/// single thread.
///
/// # Examples
///
/// ```rust
/// use combinars::monad::Unit;
/// use combinars::value::Value;
///
/// let plain = Unit::new();
/// let instance = plain.wrap(5);
/// assert_eq!(instance.value(), &Value::Int(5));
/// ```
#[derive(Clone)]
pub struct Unit {
    shared: Rc<Shared>,
}

impl Unit {
    /// Creates a constructor that wraps values unchanged.
    pub fn new() -> Self {
        Self {
            shared: Rc::new(Shared {
                modifier: None,
                operations: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Creates a constructor that passes every wrapped value through
    /// `modifier`.
    ///
    /// The modifier runs at construction time and again whenever
    /// [`bind`](Instance::bind) re-wraps a plain result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::monad::Unit;
    /// use combinars::value::Value;
    ///
    /// let doubled = Unit::with_modifier(|value| match value {
    ///     Value::Int(n) => Value::Int(n * 2),
    ///     other => other,
    /// });
    ///
    /// assert_eq!(doubled.wrap(21).value(), &Value::Int(42));
    /// ```
    pub fn with_modifier<F>(modifier: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        Self {
            shared: Rc::new(Shared {
                modifier: Some(Box::new(modifier)),
                operations: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Wraps a value into an instance of this constructor.
    pub fn wrap(&self, value: impl Into<Value>) -> Instance {
        Instance {
            value: self.shared.apply_modifier(value.into()),
            shared: Rc::clone(&self.shared),
        }
    }

    /// Registers a named operation on this constructor.
    ///
    /// The operation becomes available through
    /// [`Instance::invoke`] on every instance this constructor has
    /// produced or will produce. Each name can be registered once;
    /// re-registering fails with [`MonadError::DuplicateOperation`].
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::DuplicateOperation`] when `name` is already
    /// registered on this constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::monad::{Outcome, Unit};
    /// use combinars::value::Value;
    ///
    /// let unit = Unit::new();
    /// unit.lift("negate", |value, _args| match value {
    ///     Value::Int(n) => Outcome::from(Value::Int(-n)),
    ///     other => Outcome::from(other.clone()),
    /// })
    /// .unwrap();
    ///
    /// // Lifting retrofits instances created before the lift.
    /// let early = unit.wrap(3);
    /// assert_eq!(early.invoke("negate", &[]).unwrap().value(), &Value::Int(-3));
    ///
    /// // A second registration under the same name is refused.
    /// assert!(unit.lift("negate", |value, _| Outcome::from(value.clone())).is_err());
    /// ```
    pub fn lift<F>(&self, name: impl Into<String>, operation: F) -> Result<(), MonadError>
    where
        F: Fn(&Value, &[Value]) -> Outcome + 'static,
    {
        let name = name.into();
        let mut operations = self.shared.operations.borrow_mut();

        if operations.contains_key(&name) {
            return Err(MonadError::DuplicateOperation { name });
        }

        operations.insert(name, Rc::new(operation));
        Ok(())
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unit")
            .field("modified", &self.shared.modifier.is_some())
            .field("operations", &self.shared.operations.borrow().len())
            .finish()
    }
}

/// A wrapped value produced by a [`Unit`].
///
/// Instances are immutable by convention: every operation produces a new
/// instance sharing the same constructor state.
#[derive(Clone)]
pub struct Instance {
    value: Value,
    shared: Rc<Shared>,
}

impl Instance {
    /// Applies a callable to the stored value and wraps the result.
    ///
    /// The callable receives the stored value and `arguments`. A
    /// [`Outcome::Wrapped`] result is returned as-is; a
    /// [`Outcome::Plain`] result is wrapped through this instance's
    /// constructor, running its modifier again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::monad::{Outcome, Unit};
    /// use combinars::value::Value;
    ///
    /// let unit = Unit::new();
    /// let five = unit.wrap(5);
    ///
    /// let ten = five.bind(
    ///     |value, args| match (value, args) {
    ///         (Value::Int(n), [Value::Int(factor)]) => Outcome::from(Value::Int(n * factor)),
    ///         _ => Outcome::from(Value::Null),
    ///     },
    ///     &[Value::Int(2)],
    /// );
    ///
    /// assert_eq!(ten.value(), &Value::Int(10));
    /// ```
    pub fn bind<F>(&self, function: F, arguments: &[Value]) -> Self
    where
        F: Fn(&Value, &[Value]) -> Outcome,
    {
        match function(&self.value, arguments) {
            Outcome::Wrapped(instance) => instance,
            Outcome::Plain(value) => Self {
                value: self.shared.apply_modifier(value),
                shared: Rc::clone(&self.shared),
            },
        }
    }

    /// Dispatches a lifted operation by name.
    ///
    /// Equivalent to [`bind`](Self::bind) with the registered operation.
    ///
    /// # Errors
    ///
    /// Returns [`MonadError::UnknownOperation`] when no operation with
    /// this name has been lifted on the instance's constructor.
    pub fn invoke(&self, name: &str, arguments: &[Value]) -> Result<Self, MonadError> {
        // Clone the operation handle out of the registry so the borrow is
        // released before user code runs (the operation may lift).
        let operation = self.shared.operations.borrow().get(name).map(Rc::clone);

        operation.map_or_else(
            || {
                Err(MonadError::UnknownOperation {
                    name: name.to_string(),
                })
            },
            |operation| Ok(self.bind(|value, args| operation(value, args), arguments)),
        )
    }

    /// Returns the stored value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the instance and returns the stored value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Instance")
            .field(&self.value)
            .finish()
    }
}
