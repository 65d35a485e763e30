// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for room-lock component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use videocall_room_lock::{ConferenceHandle, ConferenceId, Credential, JoinError, JoinOperation};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Click the element matching `selector` inside `mount`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

/// Type `value` into the dialog's text field.
pub fn type_into_field(mount: &web_sys::Element, value: &str) {
    let input: HtmlInputElement = mount
        .query_selector("#dialog-input")
        .unwrap()
        .expect("dialog should have an input")
        .unchecked_into();
    input.set_value(value);
}

/// A conference whose join operation records the passwords it receives.
pub fn recording_conference() -> (ConferenceHandle, Rc<RefCell<Vec<Option<Credential>>>>) {
    let joins = Rc::new(RefCell::new(Vec::new()));
    let log = joins.clone();
    let join = JoinOperation::new(move |password| {
        log.borrow_mut().push(password);
        Ok(())
    });
    (ConferenceHandle::new(ConferenceId::new("C"), join), joins)
}

/// A conference that only accepts `expected` and records every attempt.
pub fn locked_conference(
    expected: &'static str,
) -> (ConferenceHandle, Rc<RefCell<Vec<Option<Credential>>>>) {
    let joins = Rc::new(RefCell::new(Vec::new()));
    let log = joins.clone();
    let join = JoinOperation::new(move |password: Option<Credential>| {
        let accepted = password.as_ref().map(|p| p.expose()) == Some(expected);
        log.borrow_mut().push(password);
        if accepted {
            Ok(())
        } else {
            Err(JoinError::IncorrectPassword)
        }
    });
    (ConferenceHandle::new(ConferenceId::new("locked"), join), joins)
}
