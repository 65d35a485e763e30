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

//! Prompt shown when a conference requires a password to join.
//!
//! The prompt owns no UI. A dialog renders [`PasswordRequiredPrompt::dialog_config`]
//! and calls [`on_cancel`](PasswordRequiredPrompt::on_cancel) or
//! [`on_submit`](PasswordRequiredPrompt::on_submit) when dismissed. Either
//! way the prompt turns the dismissal into a single
//! [`ConferenceAction::SetPassword`] aimed at the conference's join
//! operation, and tells the dialog to close.

use std::cell::Cell;

use log::{debug, info};

use crate::actions::{set_password, ConferenceAction, PasswordMethod};
use crate::conference::ConferenceHandle;
use crate::credential::Credential;
use crate::dialog::{
    DialogConfig, Dismissal, InputFieldOptions, PASSWORD_LABEL_KEY, PASSWORD_REQUIRED_KEY,
};
use crate::dispatch::Dispatch;
use crate::flags::{CancelPolicy, RoomLockFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Displayed,
    Dismissed,
}

#[derive(Debug)]
pub struct PasswordRequiredPrompt {
    conference: ConferenceHandle,
    dispatch: Dispatch<ConferenceAction>,
    cancel_policy: CancelPolicy,
    state: Cell<PromptState>,
}

impl PasswordRequiredPrompt {
    /// Creates a prompt for `conference` using the cancel policy from
    /// [`RoomLockFlags`].
    pub fn new(conference: ConferenceHandle, dispatch: Dispatch<ConferenceAction>) -> Self {
        Self::with_cancel_policy(conference, dispatch, RoomLockFlags::current_cancel_policy())
    }

    pub fn with_cancel_policy(
        conference: ConferenceHandle,
        dispatch: Dispatch<ConferenceAction>,
        cancel_policy: CancelPolicy,
    ) -> Self {
        Self {
            conference,
            dispatch,
            cancel_policy,
            state: Cell::new(PromptState::Displayed),
        }
    }

    pub fn dialog_config(&self) -> DialogConfig {
        DialogConfig {
            body_key: PASSWORD_LABEL_KEY,
            title_key: PASSWORD_REQUIRED_KEY,
            input: InputFieldOptions {
                obscure_input: true,
            },
        }
    }

    pub fn state(&self) -> PromptState {
        self.state.get()
    }

    /// The user dismissed the prompt without entering a password.
    ///
    /// Joining is retried without a password. If the room is still locked
    /// the session layer shows a fresh prompt. Under [`CancelPolicy::Abort`]
    /// the pending request is dropped instead.
    pub fn on_cancel(&self) -> bool {
        match self.cancel_policy {
            CancelPolicy::RetryWithoutPassword => self.on_submit(None),
            CancelPolicy::Abort => {
                if self.state.replace(PromptState::Dismissed) == PromptState::Displayed {
                    info!(
                        "Password prompt for {} cancelled, join aborted",
                        self.conference.id()
                    );
                    self.dispatch.dispatch(ConferenceAction::PasswordPromptAborted {
                        conference: self.conference.clone(),
                    });
                }
                true
            }
        }
    }

    /// The user submitted `value` (`None` if the field was left empty).
    ///
    /// Always returns `true`: the dialog closes on every dismissal.
    pub fn on_submit(&self, value: Option<String>) -> bool {
        if self.state.replace(PromptState::Dismissed) == PromptState::Dismissed {
            debug!(
                "Ignoring repeated dismissal of password prompt for {}",
                self.conference.id()
            );
            return true;
        }

        let password = value.map(Credential::from);
        info!(
            "Retrying join of {} {} password",
            self.conference.id(),
            if password.is_some() { "with" } else { "without" }
        );

        let method = PasswordMethod::Join(self.conference.join());
        self.dispatch
            .dispatch(set_password(&self.conference, method, password));
        true
    }

    /// Routes a dismissal reported by a dialog to the matching handler.
    pub fn dismiss(&self, dismissal: Dismissal) -> bool {
        match dismissal {
            Dismissal::Cancel => self.on_cancel(),
            Dismissal::Submit(value) => self.on_submit(value),
        }
    }
}
