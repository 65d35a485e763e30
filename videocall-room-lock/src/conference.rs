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

//! Conference handles and the operations bound to them.
//!
//! A [`ConferenceHandle`] is owned by the session layer. Everything in this
//! crate only clones the `Rc` and calls the bound operations.

use std::fmt;
use std::rc::Rc;

use crate::credential::Credential;
use crate::error::{JoinError, LockError};

/// Identifier of a conference (room name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConferenceId(String);

impl ConferenceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ConferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a join attempt.
pub type JoinResult = Result<(), JoinError>;

/// Outcome of a lock or unlock attempt.
pub type LockResult = Result<(), LockError>;

macro_rules! bound_operation {
    ($(#[$meta:meta])* $name:ident, $out:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            op: Rc<dyn Fn(Option<Credential>) -> $out>,
        }

        impl $name {
            pub fn new<F>(op: F) -> Self
            where
                F: Fn(Option<Credential>) -> $out + 'static,
            {
                Self { op: Rc::new(op) }
            }

            pub fn call(&self, password: Option<Credential>) -> $out {
                (*self.op)(password)
            }
        }

        #[allow(clippy::vtable_address_comparisons)]
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Rc::ptr_eq(&self.op, &other.op)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "<_>"))
            }
        }
    };
}

bound_operation!(
    /// Attempts to join a conference, optionally with a password.
    ///
    /// Equality is identity, so "the conference's own join operation" can
    /// be told apart from any other closure with the same signature.
    JoinOperation,
    JoinResult
);

bound_operation!(
    /// Sets (`Some`) or clears (`None`) the room password.
    LockOperation,
    LockResult
);

struct ConferenceInner {
    id: ConferenceId,
    join: JoinOperation,
    lock: Option<LockOperation>,
}

/// Borrowed reference to a joinable conference session.
#[derive(Clone)]
pub struct ConferenceHandle {
    inner: Rc<ConferenceInner>,
}

impl ConferenceHandle {
    pub fn new(id: ConferenceId, join: JoinOperation) -> Self {
        Self {
            inner: Rc::new(ConferenceInner {
                id,
                join,
                lock: None,
            }),
        }
    }

    /// Handle for a conference the local user may also lock.
    pub fn with_lock(id: ConferenceId, join: JoinOperation, lock: LockOperation) -> Self {
        Self {
            inner: Rc::new(ConferenceInner {
                id,
                join,
                lock: Some(lock),
            }),
        }
    }

    pub fn id(&self) -> &ConferenceId {
        &self.inner.id
    }

    /// The join operation bound to this conference.
    pub fn join(&self) -> JoinOperation {
        self.inner.join.clone()
    }

    /// The lock operation, if the session exposes one.
    pub fn lock(&self) -> Option<LockOperation> {
        self.inner.lock.clone()
    }
}

impl PartialEq for ConferenceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ConferenceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConferenceHandle")
            .field("id", &self.inner.id)
            .field("lockable", &self.inner.lock.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn join_operation_receives_password_verbatim() {
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        let join = JoinOperation::new(move |password| {
            *sink.borrow_mut() = password;
            Ok(())
        });
        let conference = ConferenceHandle::new(ConferenceId::new("standup"), join);

        conference.join().call(Some(Credential::new(" pw ")));
        assert_eq!(*seen.borrow(), Some(Credential::new(" pw ")));
    }

    #[test]
    fn handles_and_operations_compare_by_identity() {
        let join = JoinOperation::new(|_| Ok(()));
        let a = ConferenceHandle::new(ConferenceId::new("room"), join.clone());
        let b = ConferenceHandle::new(ConferenceId::new("room"), join.clone());

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.join(), b.join());
        assert_ne!(a.join(), JoinOperation::new(|_| Ok(())));
    }

    #[test]
    fn lock_is_optional() {
        let join = JoinOperation::new(|_| Ok(()));
        let plain = ConferenceHandle::new(ConferenceId::new("a"), join.clone());
        assert!(plain.lock().is_none());

        let lockable = ConferenceHandle::with_lock(
            ConferenceId::new("b"),
            join,
            LockOperation::new(|_| Err(LockError::NotModerator)),
        );
        let lock = lockable.lock().expect("lock operation");
        assert_eq!(lock.call(None), Err(LockError::NotModerator));
    }
}
