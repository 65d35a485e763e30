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

//! Prompt shown when joining a locked conference.

use std::sync::atomic::{AtomicU64, Ordering};

use videocall_room_lock::{
    CancelPolicy, ConferenceAction, ConferenceHandle, Dispatch,
    PasswordRequiredPrompt as PromptModel, RoomLockFlags,
};
use yew::prelude::*;

use crate::components::dialog::Dialog;

/// Distinguishes prompt models so each new one gets a fresh dialog.
static NEXT_PROMPT_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Properties, PartialEq)]
pub struct PasswordRequiredPromptProps {
    /// The conference that rejected the join.
    pub conference: ConferenceHandle,
    /// Receives the "set password and retry join" action.
    pub dispatch: Dispatch<ConferenceAction>,
    /// Which password request this prompt answers. A new value shows a new
    /// dialog even when `conference` is unchanged.
    #[prop_or_default]
    pub generation: u64,
    /// Overrides `FEATURE_PASSWORD_CANCEL_ABORTS_JOIN`.
    #[prop_or_default]
    pub cancel_policy: Option<CancelPolicy>,
}

#[function_component(PasswordRequiredPrompt)]
pub fn password_required_prompt(props: &PasswordRequiredPromptProps) -> Html {
    let policy = props
        .cancel_policy
        .unwrap_or_else(RoomLockFlags::current_cancel_policy);

    // One model per request: a duplicate dismissal cannot dispatch twice,
    // but a new request (or new conference) starts over.
    let model = use_memo(
        (
            props.conference.clone(),
            props.dispatch.clone(),
            props.generation,
            policy,
        ),
        |(conference, dispatch, _, policy)| {
            (
                NEXT_PROMPT_ID.fetch_add(1, Ordering::Relaxed),
                PromptModel::with_cancel_policy(conference.clone(), dispatch.clone(), *policy),
            )
        },
    );
    let id = model.0;

    let on_cancel = {
        let model = model.clone();
        Callback::from(move |_: ()| model.1.on_cancel())
    };

    let on_submit = {
        let model = model.clone();
        Callback::from(move |value: Option<String>| model.1.on_submit(value))
    };

    let config = model.1.dialog_config();

    html! {
        <Dialog
            key={id}
            body_key={config.body_key}
            title_key={config.title_key}
            input={config.input}
            {on_cancel}
            {on_submit}
        />
    }
}
