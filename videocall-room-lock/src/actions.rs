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

//! Actions understood by the [`ConferenceStore`](crate::ConferenceStore).

use crate::conference::{ConferenceHandle, JoinOperation, LockOperation};
use crate::credential::Credential;
use crate::error::LockError;

/// Which conference operation a password is meant for.
#[derive(Debug, Clone, PartialEq)]
pub enum PasswordMethod {
    /// Join the conference with the password.
    Join(JoinOperation),
    /// Lock (or unlock, with no password) the conference.
    Lock(LockOperation),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConferenceAction {
    /// Use `password` for `method` on `conference`.
    SetPassword {
        conference: ConferenceHandle,
        method: PasswordMethod,
        password: Option<Credential>,
    },

    /// A lock request failed.
    SetPasswordFailed {
        conference: ConferenceHandle,
        error: LockError,
    },

    /// The server rejected a join because the room is locked.
    PasswordRequired { conference: ConferenceHandle },

    /// The user closed the password prompt and does not want to retry.
    PasswordPromptAborted { conference: ConferenceHandle },

    ConferenceJoined { conference: ConferenceHandle },

    ConferenceLeft { conference: ConferenceHandle },
}

/// Builds the "set password" intent.
///
/// Passing the conference's own join operation as `method` means "retry
/// the join with this password".
pub fn set_password(
    conference: &ConferenceHandle,
    method: PasswordMethod,
    password: Option<Credential>,
) -> ConferenceAction {
    ConferenceAction::SetPassword {
        conference: conference.clone(),
        method,
        password,
    }
}
