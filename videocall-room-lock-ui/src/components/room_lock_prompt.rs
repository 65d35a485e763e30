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

//! Shows the password prompt whenever a [`ConferenceStore`] asks for one.

use std::rc::Rc;

use videocall_room_lock::{CancelPolicy, ConferenceStore, Dispatch};
use yew::prelude::*;

use crate::components::password_required_prompt::PasswordRequiredPrompt;

#[derive(Properties)]
pub struct RoomLockPromptProps {
    pub store: Rc<ConferenceStore>,
    #[prop_or_default]
    pub cancel_policy: Option<CancelPolicy>,
}

impl PartialEq for RoomLockPromptProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.cancel_policy == other.cancel_policy
    }
}

#[function_component(RoomLockPrompt)]
pub fn room_lock_prompt(props: &RoomLockPromptProps) -> Html {
    let refresh = use_force_update();

    // Store state is not reactive; re-render after every action we send.
    let store = props.store.clone();
    let dispatch = use_memo(Rc::as_ptr(&props.store) as usize, move |_| {
        let inner = store.dispatcher();
        Dispatch::new(move |action| {
            inner.dispatch(action);
            refresh.force_update();
        })
    });

    let state = props.store.state();
    match state.password_required {
        Some(conference) => html! {
            <PasswordRequiredPrompt
                {conference}
                dispatch={(*dispatch).clone()}
                generation={state.prompt_generation}
                cancel_policy={props.cancel_policy}
            />
        },
        None => html! {},
    }
}
