/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Injected action dispatch.
//!
//! Components receive a [`Dispatch`] at construction time instead of
//! reaching for a process-wide store. Whatever sits behind it (a
//! [`ConferenceStore`](crate::ConferenceStore), a channel, a Yew reducer)
//! is invisible to the sender.

use std::fmt;
use std::rc::Rc;

/// Where a component sends the actions it produces.
///
/// Holds the handler behind an `Rc`, so clones share it. Equality is
/// identity of that handler; a Yew component only re-renders when it is
/// handed a different sink.
pub struct Dispatch<A> {
    sink: Rc<dyn Fn(A)>,
}

impl<A> Dispatch<A> {
    pub fn new(handler: impl Fn(A) + 'static) -> Self {
        Self {
            sink: Rc::new(handler),
        }
    }

    /// Hands `action` to the handler. Whatever the handler does with it
    /// (including failing) is not reported back.
    pub fn dispatch(&self, action: A) {
        (self.sink)(action)
    }

    /// Sink for components whose actions nobody listens to.
    pub fn noop() -> Self {
        Self::new(|_| ())
    }
}

impl<A, F: Fn(A) + 'static> From<F> for Dispatch<A> {
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<A> Clone for Dispatch<A> {
    fn clone(&self) -> Self {
        Self {
            sink: Rc::clone(&self.sink),
        }
    }
}

#[allow(clippy::vtable_address_comparisons)]
impl<A> PartialEq for Dispatch<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sink, &other.sink)
    }
}

impl<A> fmt::Debug for Dispatch<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dispatch")
    }
}

impl<A> Default for Dispatch<A> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<A: 'static> Dispatch<A> {
    /// Adapts this sink to accept `T`, converting each value with `convert`.
    pub fn reform<T>(&self, convert: impl Fn(T) -> A + 'static) -> Dispatch<T> {
        let target = self.clone();
        Dispatch::new(move |value| target.dispatch(convert(value)))
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    //! Helpers for asserting on dispatched actions.

    use super::Dispatch;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared log of everything sent through a recording dispatcher.
    pub type Recorded<A> = Rc<RefCell<Vec<A>>>;

    /// Returns a dispatcher that appends every action to the returned log.
    pub fn recording<A: 'static>() -> (Dispatch<A>, Recorded<A>) {
        let log: Recorded<A> = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let dispatch = Dispatch::new(move |action| sink.borrow_mut().push(action));
        (dispatch, log)
    }
}
