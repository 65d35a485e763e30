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

//! Yew rendering of the room-lock password prompt.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components.

pub mod components;
pub mod i18n;

pub use components::dialog::{Dialog, DialogProps};
pub use components::password_required_prompt::{
    PasswordRequiredPrompt, PasswordRequiredPromptProps,
};
pub use components::room_lock_prompt::{RoomLockPrompt, RoomLockPromptProps};

/// Route `log` output to the browser console and panics to `console.error`.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("Console logger already installed");
    }
}
