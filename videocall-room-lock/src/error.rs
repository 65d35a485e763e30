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

//! Error types surfaced by conference operations.
//!
//! The password prompt itself never fails. These errors come back from the
//! join and lock operations and are handed to whoever drives the
//! [`ConferenceStore`](crate::ConferenceStore).

use thiserror::Error;

/// Errors returned by a [`JoinOperation`](crate::JoinOperation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The conference is locked and no password was supplied.
    #[error("A password is required to join this conference.")]
    PasswordRequired,

    /// A password was supplied but the server rejected it.
    #[error("The password is incorrect.")]
    IncorrectPassword,

    /// The conference could not be reached or no longer exists.
    #[error("Conference not available: {0}")]
    NotAvailable(String),
}

impl JoinError {
    /// Whether the session layer should show the password prompt again.
    pub fn requires_password(&self) -> bool {
        matches!(self, JoinError::PasswordRequired | JoinError::IncorrectPassword)
    }
}

/// Errors returned by a [`LockOperation`](crate::LockOperation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockError {
    /// Only moderators may lock or unlock a room.
    #[error("Only a moderator can change the room password.")]
    NotModerator,

    /// The server refused the lock request.
    #[error("Failed to set room password: {0}")]
    Failed(String),
}

/// Either failure, as returned by [`ConferenceStore::handle`](crate::ConferenceStore::handle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConferenceError {
    #[error(transparent)]
    Join(#[from] JoinError),

    #[error(transparent)]
    Lock(#[from] LockError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_errors_ask_for_a_new_prompt() {
        assert!(JoinError::PasswordRequired.requires_password());
        assert!(JoinError::IncorrectPassword.requires_password());
        assert!(!JoinError::NotAvailable("gone".to_string()).requires_password());
    }

    #[test]
    fn error_messages_are_human_readable() {
        assert_eq!(
            JoinError::NotAvailable("room-1".to_string()).to_string(),
            "Conference not available: room-1"
        );
        assert_eq!(
            LockError::Failed("timeout".to_string()).to_string(),
            "Failed to set room password: timeout"
        );
    }
}
