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

//! English strings for the dialog translation keys.
//!
//! Unknown keys render as the key itself so a missing entry is visible
//! rather than blank.

pub const CANCEL_KEY: &str = "dialog.Cancel";
pub const OK_KEY: &str = "dialog.Ok";

pub fn translate(key: &str) -> &str {
    match key {
        "dialog.passwordLabel" => {
            "The conference has been locked. Enter the lock password to join."
        }
        "dialog.passwordRequired" => "Password required",
        "dialog.Cancel" => "Cancel",
        "dialog.Ok" => "OK",
        other => other,
    }
}
