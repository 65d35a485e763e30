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

//! Room-lock state and the handler behind the prompt's dispatch.
//!
//! The store tracks which conference is waiting for a password, the
//! password last set for it, and whether the room is locked. Feeding it a
//! [`ConferenceAction::SetPassword`] aimed at a join operation retries the
//! join. A rejected password puts the conference back into the
//! "password required" state, which is what brings the prompt back.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::actions::{ConferenceAction, PasswordMethod};
use crate::conference::{ConferenceHandle, JoinOperation, LockOperation};
use crate::credential::Credential;
use crate::dispatch::Dispatch;
use crate::error::{ConferenceError, LockError};
use crate::prompt::PasswordRequiredPrompt;

/// Who locked the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// Locked by the local participant.
    Local,
    /// Locked by someone else; we learned about it from a rejected join.
    Remote,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferenceState {
    pub joined: Option<ConferenceHandle>,
    pub password_required: Option<ConferenceHandle>,
    pub password: Option<Credential>,
    pub locked: Option<LockState>,
    /// Error from the last failed lock request, cleared by a successful one.
    pub lock_error: Option<LockError>,
    /// Bumped on every password request. A renderer keys its prompt on this
    /// so a rejected password brings up a fresh dialog even though
    /// `password_required` names the same conference as before.
    pub prompt_generation: u64,
}

/// Applies `action` to `state`. Never calls out to the conference.
pub fn reduce(state: &mut ConferenceState, action: &ConferenceAction) {
    match action {
        ConferenceAction::SetPassword {
            conference,
            method: PasswordMethod::Join(_),
            password,
        } => {
            if state.password_required.as_ref() == Some(conference) {
                state.password = password.clone();
                state.password_required = None;
            }
        }
        ConferenceAction::SetPassword {
            method: PasswordMethod::Lock(_),
            password,
            ..
        } => {
            state.locked = password.as_ref().map(|_| LockState::Local);
            state.password = password.clone();
            state.lock_error = None;
        }
        ConferenceAction::SetPasswordFailed { error, .. } => {
            state.lock_error = Some(error.clone());
        }
        ConferenceAction::PasswordRequired { conference } => {
            state.locked = Some(LockState::Remote);
            state.password = None;
            state.password_required = Some(conference.clone());
            state.prompt_generation += 1;
        }
        ConferenceAction::PasswordPromptAborted { conference } => {
            if state.password_required.as_ref() == Some(conference) {
                state.password_required = None;
            }
        }
        ConferenceAction::ConferenceJoined { conference } => {
            state.joined = Some(conference.clone());
            state.password_required = None;
        }
        ConferenceAction::ConferenceLeft { conference } => {
            let involved = state.joined.as_ref() == Some(conference)
                || state.password_required.as_ref() == Some(conference);
            if involved {
                *state = ConferenceState {
                    prompt_generation: state.prompt_generation,
                    ..Default::default()
                };
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ConferenceStore {
    state: RefCell<ConferenceState>,
}

impl ConferenceStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ConferenceState {
        self.state.borrow().clone()
    }

    /// Changes whenever a new password prompt is requested.
    pub fn prompt_generation(&self) -> u64 {
        self.state.borrow().prompt_generation
    }

    /// Whether a password prompt should be on screen.
    pub fn prompt_visible(&self) -> bool {
        self.state.borrow().password_required.is_some()
    }

    /// A dispatcher that feeds this store. Failures are logged, not returned.
    pub fn dispatcher(self: &Rc<Self>) -> Dispatch<ConferenceAction> {
        let store = Rc::clone(self);
        Dispatch::new(move |action| {
            if let Err(e) = store.handle(action) {
                warn!("Conference action failed: {e}");
            }
        })
    }

    /// Builds a prompt for the conference currently waiting for a password.
    pub fn password_prompt(self: &Rc<Self>) -> Option<PasswordRequiredPrompt> {
        let conference = self.state.borrow().password_required.clone()?;
        Some(PasswordRequiredPrompt::new(conference, self.dispatcher()))
    }

    /// Handles an action, calling the join or lock operation it names.
    pub fn handle(&self, action: ConferenceAction) -> Result<(), ConferenceError> {
        match action {
            ConferenceAction::SetPassword {
                conference,
                method: PasswordMethod::Join(join),
                password,
            } => self.set_join_password(conference, join, password),
            ConferenceAction::SetPassword {
                conference,
                method: PasswordMethod::Lock(lock),
                password,
            } => self.set_lock_password(conference, lock, password),
            other => {
                self.apply(&other);
                Ok(())
            }
        }
    }

    fn apply(&self, action: &ConferenceAction) {
        reduce(&mut self.state.borrow_mut(), action);
    }

    fn set_join_password(
        &self,
        conference: ConferenceHandle,
        join: JoinOperation,
        password: Option<Credential>,
    ) -> Result<(), ConferenceError> {
        if join != conference.join() {
            warn!(
                "Ignoring password for {}: not its join operation",
                conference.id()
            );
            return Ok(());
        }
        if self.state.borrow().password_required.as_ref() != Some(&conference) {
            debug!(
                "Ignoring password for {}: no password was requested",
                conference.id()
            );
            return Ok(());
        }

        self.apply(&ConferenceAction::SetPassword {
            conference: conference.clone(),
            method: PasswordMethod::Join(join.clone()),
            password: password.clone(),
        });

        let should_join = {
            let state = self.state.borrow();
            state.password == password
                && state.password_required.is_none()
                && state.joined.is_none()
        };
        if !should_join {
            return Ok(());
        }

        // The borrow is released before calling out: a join operation may
        // dispatch back into this store.
        match join.call(password) {
            Ok(()) => {
                info!("Joined {}", conference.id());
                self.apply(&ConferenceAction::ConferenceJoined { conference });
                Ok(())
            }
            Err(e) => {
                if e.requires_password() {
                    self.apply(&ConferenceAction::PasswordRequired {
                        conference: conference.clone(),
                    });
                }
                Err(e.into())
            }
        }
    }

    fn set_lock_password(
        &self,
        conference: ConferenceHandle,
        lock: LockOperation,
        password: Option<Credential>,
    ) -> Result<(), ConferenceError> {
        if conference.lock().as_ref() != Some(&lock) {
            warn!(
                "Ignoring lock request for {}: not its lock operation",
                conference.id()
            );
            return Ok(());
        }

        match lock.call(password.clone()) {
            Ok(()) => {
                info!(
                    "{} {}",
                    if password.is_some() { "Locked" } else { "Unlocked" },
                    conference.id()
                );
                self.apply(&ConferenceAction::SetPassword {
                    conference,
                    method: PasswordMethod::Lock(lock),
                    password,
                });
                Ok(())
            }
            Err(error) => {
                self.apply(&ConferenceAction::SetPasswordFailed {
                    conference,
                    error: error.clone(),
                });
                Err(error.into())
            }
        }
    }
}
