// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for PasswordRequiredPrompt.
//
// Verifies that the prompt renders a masked field, that every dismissal
// closes it, and that each dismissal dispatches a single join retry.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, click, create_mount_point, recording_conference, type_into_field};
use videocall_room_lock::dispatch::testing::{recording, Recorded};
use videocall_room_lock::{
    CancelPolicy, ConferenceAction, ConferenceHandle, ConferenceStore, Credential, Dispatch,
    PasswordMethod,
};
use videocall_room_lock_ui::PasswordRequiredPrompt;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct WrapperProps {
    conference: ConferenceHandle,
    dispatch: Dispatch<ConferenceAction>,
}

#[function_component(Wrapper)]
fn wrapper(props: &WrapperProps) -> Html {
    html! {
        <PasswordRequiredPrompt
            conference={props.conference.clone()}
            dispatch={props.dispatch.clone()}
            cancel_policy={CancelPolicy::RetryWithoutPassword}
        />
    }
}

async fn mount_prompt(
    conference: &ConferenceHandle,
) -> (web_sys::Element, Recorded<ConferenceAction>) {
    videocall_room_lock_ui::init_logging(log::Level::Debug);
    let (dispatch, actions) = recording();
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps {
            conference: conference.clone(),
            dispatch,
        },
    )
    .render();
    sleep(Duration::ZERO).await;
    (mount, actions)
}

fn retried_password(action: &ConferenceAction, conference: &ConferenceHandle) -> Option<Credential> {
    match action {
        ConferenceAction::SetPassword {
            conference: target,
            method: PasswordMethod::Join(join),
            password,
        } => {
            assert_eq!(target, conference);
            assert_eq!(*join, conference.join());
            password.clone()
        }
        other => panic!("unexpected action {other:?}"),
    }
}

#[wasm_bindgen_test]
async fn prompt_renders_masked_password_field() {
    let (conference, _) = recording_conference();
    let (mount, actions) = mount_prompt(&conference).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Password required"), "title should be translated");

    let input = mount
        .query_selector("input[type=password]")
        .unwrap();
    assert!(input.is_some(), "password field should be masked");
    assert!(actions.borrow().is_empty(), "rendering must not dispatch");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn submit_dispatches_value_and_closes() {
    let (conference, _) = recording_conference();
    let (mount, actions) = mount_prompt(&conference).await;

    type_into_field(&mount, "abc123");
    click(&mount, ".dialog-submit");
    sleep(Duration::ZERO).await;

    {
        let actions = actions.borrow();
        assert_eq!(actions.len(), 1);
        assert_eq!(
            retried_password(&actions[0], &conference),
            Some(Credential::new("abc123"))
        );
    }
    assert!(mount.query_selector(".dialog").unwrap().is_none());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn cancel_dispatches_without_password_and_closes() {
    let (conference, _) = recording_conference();
    let (mount, actions) = mount_prompt(&conference).await;

    type_into_field(&mount, "ignored");
    click(&mount, ".dialog-cancel");
    sleep(Duration::ZERO).await;

    {
        let actions = actions.borrow();
        assert_eq!(actions.len(), 1);
        assert_eq!(retried_password(&actions[0], &conference), None);
    }
    assert!(mount.query_selector(".dialog").unwrap().is_none());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn empty_submit_is_absent_password() {
    let (conference, _) = recording_conference();
    let (mount, actions) = mount_prompt(&conference).await;

    click(&mount, ".dialog-submit");
    sleep(Duration::ZERO).await;

    assert_eq!(actions.borrow().len(), 1);
    assert_eq!(retried_password(&actions.borrow()[0], &conference), None);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn submit_through_store_joins_conference() {
    let (conference, joins) = recording_conference();
    let store = ConferenceStore::new();
    store
        .handle(ConferenceAction::PasswordRequired {
            conference: conference.clone(),
        })
        .unwrap();

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps {
            conference: conference.clone(),
            dispatch: store.dispatcher(),
        },
    )
    .render();
    sleep(Duration::ZERO).await;

    type_into_field(&mount, "s3cr3t");
    click(&mount, ".dialog-submit");
    sleep(Duration::ZERO).await;

    assert_eq!(*joins.borrow(), vec![Some(Credential::new("s3cr3t"))]);
    assert!(!store.prompt_visible());

    cleanup(&mount);
}
