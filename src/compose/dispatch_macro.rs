//! The `dispatch!` macro for first-match handler dispatch.
//!
//! Builds a single function out of a priority-ordered list of handlers,
//! taking the first result a handler actually produces. This gives
//! polymorphic-dispatch behavior without inheritance: each handler
//! inspects the target and either claims it (`Some`) or passes (`None`).

/// Dispatches a target across handlers, first match wins.
///
/// `dispatch!(f1, f2, ..., fn)` returns a closure over one target
/// reference. The handlers are tried in order; each receives the target
/// and returns an `Option`. The first `Some` result is returned and the
/// remaining handlers are not invoked. A handler returning `None` passes
/// the target on to the next handler. When every handler passes, the
/// result is `None`.
///
/// Handlers take the target by shared reference, so the same target can
/// be offered to each of them in turn. Extra per-handler context should
/// be captured by the handler closures themselves.
///
/// # Examples
///
/// ## Priority-ordered rendering
///
/// ```
/// use combinars::dispatch;
///
/// let as_exact = |n: &i32| (*n == 0).then(|| "zero".to_string());
/// let as_sign = |n: &i32| (*n < 0).then(|| "negative".to_string());
/// let as_default = |n: &i32| Some(n.to_string());
///
/// let describe = dispatch!(as_exact, as_sign, as_default);
///
/// assert_eq!(describe(&0), Some("zero".to_string()));
/// assert_eq!(describe(&-4), Some("negative".to_string()));
/// assert_eq!(describe(&7), Some("7".to_string()));
/// ```
///
/// ## Nothing matches
///
/// ```
/// use combinars::dispatch;
///
/// let never = |_: &i32| None::<i32>;
/// let chain = dispatch!(never, never);
///
/// assert_eq!(chain(&1), None);
/// ```
#[macro_export]
macro_rules! dispatch {
    // Single handler: the chain is the handler itself
    ($handler:expr $(,)?) => {
        $handler
    };

    // Two or more handlers: try the first, fall through to the rest
    ($handler:expr, $($remaining_handlers:expr),+ $(,)?) => {{
        let handler = $handler;
        let fallthrough = $crate::dispatch!($($remaining_handlers),+);
        move |target| match handler(target) {
            ::std::option::Option::Some(result) => ::std::option::Option::Some(result),
            ::std::option::Option::None => fallthrough(target),
        }
    }};
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    #[test]
    fn test_dispatch_first_match_wins() {
        let first = |_: &i32| Some("first");
        let second = |_: &i32| Some("second");

        let chain = dispatch!(first, second);
        assert_eq!(chain(&0), Some("first"));
    }

    #[test]
    fn test_dispatch_falls_through_on_none() {
        let tried = Cell::new(0);
        let passes = |_: &i32| {
            tried.set(tried.get() + 1);
            None::<i32>
        };
        let claims = |n: &i32| Some(*n);

        let chain = dispatch!(&passes, &passes, claims);
        assert_eq!(chain(&9), Some(9));
        assert_eq!(tried.get(), 2);
    }

    #[test]
    fn test_dispatch_all_pass_yields_none() {
        let passes = |_: &i32| None::<i32>;
        let chain = dispatch!(passes, |_: &i32| None::<i32>);
        assert_eq!(chain(&1), None);
    }
}
