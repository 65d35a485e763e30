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

//! Configuration handed to a modal dialog collaborator.

/// Translation key for the dialog body.
pub const PASSWORD_LABEL_KEY: &str = "dialog.passwordLabel";
/// Translation key for the dialog title.
pub const PASSWORD_REQUIRED_KEY: &str = "dialog.passwordRequired";

/// How the dialog's text input behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFieldOptions {
    /// Mask the typed characters (password entry).
    pub obscure_input: bool,
}

/// Everything a dialog needs besides its dismissal handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    pub body_key: &'static str,
    pub title_key: &'static str,
    pub input: InputFieldOptions,
}

/// Dismissal outcomes a dialog can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dismissal {
    Cancel,
    Submit(Option<String>),
}

/// Normalises raw text-field contents into a submitted value.
///
/// An empty field means "no value"; anything else is passed through
/// untouched.
pub fn submitted_value(raw: String) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_is_absent() {
        assert_eq!(submitted_value(String::new()), None);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(submitted_value(" ".to_string()), Some(" ".to_string()));
    }
}
