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

//! Password prompt and room-lock state for videocall.rs conferences.
//!
//! When a conference rejects a join because the room is locked, the client
//! shows a [`PasswordRequiredPrompt`]. Whatever the user does with it,
//! cancel or submit, the prompt closes and dispatches one
//! [`ConferenceAction::SetPassword`] asking for the join to be retried.
//! Cancelling retries without a password; if the room is still locked the
//! prompt simply comes back.
//!
//! Nothing here depends on a UI framework. `videocall-room-lock-ui` renders
//! the prompt with Yew.
//!
//! # Example
//!
//! ```
//! use videocall_room_lock::{
//!     ConferenceAction, ConferenceHandle, ConferenceId, ConferenceStore, JoinOperation,
//! };
//!
//! let conference = ConferenceHandle::new(
//!     ConferenceId::new("standup"),
//!     JoinOperation::new(|password| {
//!         assert_eq!(password.as_ref().map(|p| p.expose()), Some("abc123"));
//!         Ok(())
//!     }),
//! );
//!
//! let store = ConferenceStore::new();
//! store
//!     .handle(ConferenceAction::PasswordRequired { conference: conference.clone() })
//!     .unwrap();
//!
//! let prompt = store.password_prompt().expect("a password was requested");
//! assert!(prompt.on_submit(Some("abc123".to_string())));
//! assert_eq!(store.state().joined, Some(conference));
//! ```

pub mod actions;
pub mod conference;
pub mod credential;
pub mod dialog;
pub mod dispatch;
pub mod error;
pub mod flags;
pub mod prompt;
pub mod store;

pub use actions::{set_password, ConferenceAction, PasswordMethod};
pub use conference::{
    ConferenceHandle, ConferenceId, JoinOperation, JoinResult, LockOperation, LockResult,
};
pub use credential::Credential;
pub use dialog::{DialogConfig, Dismissal, InputFieldOptions};
pub use dispatch::Dispatch;
pub use error::{ConferenceError, JoinError, LockError};
pub use flags::{CancelPolicy, RoomLockFlags};
pub use prompt::{PasswordRequiredPrompt, PromptState};
pub use store::{ConferenceState, ConferenceStore, LockState};
