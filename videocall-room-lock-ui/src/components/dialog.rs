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

//! Minimal modal dialog with a single text field.
//!
//! Each dismissal calls exactly one of `on_cancel` / `on_submit`. The
//! dialog hides itself only when that handler returns `true`.

use videocall_room_lock::dialog::submitted_value;
use videocall_room_lock::InputFieldOptions;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::{translate, CANCEL_KEY, OK_KEY};

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub body_key: AttrValue,
    pub title_key: AttrValue,
    #[prop_or_default]
    pub input: InputFieldOptions,
    pub on_cancel: Callback<(), bool>,
    /// Receives the field contents, `None` when the field is empty.
    pub on_submit: Callback<Option<String>, bool>,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let open = use_state(|| true);
    let input_ref = use_node_ref();

    let on_form_submit = {
        let open = open.clone();
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let raw = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            if on_submit.emit(submitted_value(raw)) {
                open.set(false);
            }
        })
    };

    let cancel = {
        let open = open.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if on_cancel.emit(()) {
                open.set(false);
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !*open {
        return html! {};
    }

    let input_type = if props.input.obscure_input {
        "password"
    } else {
        "text"
    };

    html! {
        <div onclick={cancel.clone()} class="glass-backdrop dialog-backdrop">
            <div onclick={on_modal_click} class="card-apple dialog" role="dialog" aria-modal="true">
                <h3 class="dialog-title">{ translate(&props.title_key) }</h3>
                <form onsubmit={on_form_submit}>
                    <label for="dialog-input" class="dialog-body">
                        { translate(&props.body_key) }
                    </label>
                    <input
                        id="dialog-input"
                        class="input-apple"
                        type={input_type}
                        autocomplete="off"
                        ref={input_ref}
                        autofocus={true}
                    />
                    <div class="dialog-actions">
                        <button type="button" class="btn-apple btn-secondary dialog-cancel" onclick={cancel}>
                            { translate(CANCEL_KEY) }
                        </button>
                        <button type="submit" class="btn-apple btn-primary dialog-submit">
                            { translate(OK_KEY) }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
