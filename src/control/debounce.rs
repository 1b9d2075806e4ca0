//! Trailing-edge call collapsing on a tokio timer.
//!
//! This module provides the [`Debounced`] wrapper. Each call schedules
//! the wrapped function for execution after a fixed delay and cancels
//! whatever was scheduled before, so a rapid burst of calls collapses
//! into a single trailing invocation carrying the last call's arguments.
//!
//! # Examples
//!
//! ```rust,ignore
//! use combinars::control::debounce;
//! use std::time::Duration;
//!
//! let save = debounce(
//!     |document: String| println!("saving {document}"),
//!     Duration::from_millis(300),
//! );
//!
//! save.call("draft 1".to_string());
//! save.call("draft 2".to_string()); // supersedes draft 1
//! // ...300ms later, "saving draft 2" runs exactly once
//! ```

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// A function wrapper that delays invocation and collapses rapid calls.
///
/// At most one invocation is pending per wrapper at any time. Calling the
/// wrapper aborts the pending invocation (if any) and schedules a new one
/// for `delay` in the future with the latest arguments; the wrapped
/// function runs only once the delay elapses with no further calls.
/// Calling has no synchronous side effect beyond (re)scheduling.
///
/// Clones share the pending slot, so a call through one clone supersedes
/// a call through another.
///
/// # Runtime
///
/// Scheduling uses [`tokio::spawn`] and [`tokio::time::sleep`], so
/// [`call`](Self::call) must be invoked from within a tokio runtime.
pub struct Debounced<Argument, Function>
where
    Argument: Send + 'static,
    Function: Fn(Argument) + Send + Sync + 'static,
{
    function: Arc<Function>,
    delay: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
    _argument: PhantomData<fn(Argument)>,
}

/// Wraps a function so that only the trailing call of a burst executes.
///
/// # Examples
///
/// ```rust,ignore
/// use combinars::control::debounce;
/// use std::time::Duration;
///
/// let notify = debounce(|count: usize| println!("{count} changes"), Duration::from_millis(50));
///
/// for edit in 1..=100 {
///     notify.call(edit);
/// }
/// // one invocation: "100 changes"
/// ```
pub fn debounce<Argument, Function>(
    function: Function,
    delay: Duration,
) -> Debounced<Argument, Function>
where
    Argument: Send + 'static,
    Function: Fn(Argument) + Send + Sync + 'static,
{
    Debounced {
        function: Arc::new(function),
        delay,
        pending: Arc::new(Mutex::new(None)),
        _argument: PhantomData,
    }
}

impl<Argument, Function> Debounced<Argument, Function>
where
    Argument: Send + 'static,
    Function: Fn(Argument) + Send + Sync + 'static,
{
    /// Schedules an invocation with these arguments, superseding any
    /// pending one.
    ///
    /// The wrapped function runs `delay` from now unless another call (or
    /// [`cancel`](Self::cancel)) intervenes first.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn call(&self, argument: Argument) {
        let function = Arc::clone(&self.function);
        let delay = self.delay;

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            function(argument);
        }));
    }

    /// Drops the pending invocation, if any.
    ///
    /// After `cancel`, nothing runs until [`call`](Self::call) is invoked
    /// again.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }

    /// Returns `true` while an invocation is scheduled but has not run.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Returns the debounce window.
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<Argument, Function> Clone for Debounced<Argument, Function>
where
    Argument: Send + 'static,
    Function: Fn(Argument) + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            delay: self.delay,
            pending: Arc::clone(&self.pending),
            _argument: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_single_call_fires_after_delay() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&invocations);
        let debounced = debounce(
            move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(10),
        );

        debounced.call(());
        assert_eq!(invocations.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_pending_invocation() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&invocations);
        let debounced = debounce(
            move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(10),
        );

        debounced.call(());
        debounced.cancel();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }
}
