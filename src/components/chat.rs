//! Chat panel.
//!
//! A local transcript: messages are attributed to the signed-in user and
//! kept in memory only. There is no server or peer behind this panel.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ChatMessage;

stylance::import_crate_style!(css, "src/components/chat.module.css");

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (draft, set_draft) = signal(String::new());
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        ctx.messages.track();
        if let Some(el) = transcript_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let send = move || {
        let author = ctx.session.with(|s| s.display_name().to_string());
        let Some(message) = ChatMessage::from_draft(&author, &draft.get()) else {
            return;
        };
        ctx.push_message(message);
        set_draft.set(String::new());
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            send();
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_draft.set(input.value());
    };

    view! {
        <section class=css::panel>
            <h2 class=css::heading>"Chat"</h2>

            <div class=css::transcript node_ref=transcript_ref>
                <For
                    each=move || ctx.messages.get()
                    key=|msg| msg.id
                    children=move |msg| {
                        view! {
                            <div class=css::message>
                                <span class=css::author>{msg.author}</span>
                                <span class=css::text>{msg.content}</span>
                            </div>
                        }
                    }
                />
            </div>

            <div class=css::composer>
                <input
                    class=css::field
                    type="text"
                    placeholder="Type a message"
                    prop:value=draft
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
                <button class=css::sendBtn on:click=move |_| send()>
                    <Icon icon=ic::SEND />
                </button>
            </div>
        </section>
    }
}
