//! Authentication panel.
//!
//! Hosts the login and signup forms, the toggle between them, and the
//! credential submission flow. Validation failures and server messages
//! surface in a shared error line under the forms.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::APP_NAME;
use crate::core::auth::{self, CredentialKind};
use crate::models::{AuthMode, SessionState};
use crate::utils::dom::focus_element;

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

/// Read the current value out of an input event's target.
fn input_value(ev: &ev::Event) -> String {
    ev.target()
        .map(|t| t.unchecked_into::<web_sys::HtmlInputElement>().value())
        .unwrap_or_default()
}

/// Kick off a credential submission.
///
/// Bails while a request is already in flight, so a double click cannot
/// start two concurrent submissions. On success the session switches to
/// the main view; otherwise the error line shows the server message or
/// the kind's generic failure text.
fn start_submit(
    ctx: AppContext,
    error: RwSignal<Option<String>>,
    kind: CredentialKind,
    username: String,
    password: String,
) {
    if ctx.session.with(|s| s.is_submitting()) {
        return;
    }

    error.set(None);
    ctx.session.set(SessionState::Submitting);

    spawn_local(async move {
        match auth::submit(kind, username.clone(), password).await {
            Ok(resp) if resp.success => ctx.sign_in(username),
            Ok(resp) => {
                ctx.session.set(SessionState::SignedOut);
                error.set(Some(
                    resp.message
                        .unwrap_or_else(|| kind.failure_message().to_string()),
                ));
            }
            Err(e) => {
                web_sys::console::error_1(&e.to_string().into());
                ctx.session.set(SessionState::SignedOut);
                error.set(Some(kind.failure_message().to_string()));
            }
        }
    });
}

/// Auth panel with login/signup toggle, both forms, and the error line.
#[component]
pub fn AuthPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let error = RwSignal::new(None::<String>);

    // Focus the visible form's username field whenever the mode changes.
    Effect::new(move || {
        let selector = match ctx.auth_mode.get() {
            AuthMode::Login => "#login-username",
            AuthMode::Signup => "#signup-username",
        };
        focus_element(selector);
    });

    let toggle_class = move |mode: AuthMode| {
        let active = move || ctx.auth_mode.get() == mode;
        move || {
            if active() {
                format!("{} {}", css::toggle, css::toggleActive)
            } else {
                css::toggle.to_string()
            }
        }
    };

    view! {
        <div class=css::panel>
            <h1 class=css::title>{APP_NAME}</h1>

            <div class=css::toggles>
                <button
                    class=toggle_class(AuthMode::Login)
                    on:click=move |_| ctx.auth_mode.set(AuthMode::Login)
                >
                    "Login"
                </button>
                <button
                    class=toggle_class(AuthMode::Signup)
                    on:click=move |_| ctx.auth_mode.set(AuthMode::Signup)
                >
                    "Sign Up"
                </button>
            </div>

            {move || match ctx.auth_mode.get() {
                AuthMode::Login => view! { <LoginForm error=error /> }.into_any(),
                AuthMode::Signup => view! { <SignupForm error=error /> }.into_any(),
            }}

            <p class=css::error>{move || error.get().unwrap_or_default()}</p>
        </div>
    }
}

/// Login form: username + password, POSTs to `/login` on submit.
#[component]
fn LoginForm(error: RwSignal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();

        if let Err(e) = auth::validate_login(&username, &password) {
            error.set(Some(e.to_string()));
            return;
        }

        start_submit(ctx, error, CredentialKind::Login, username, password);
    };

    view! {
        <form class=css::form on:submit=handle_submit>
            <input
                id="login-username"
                class=css::field
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=username
                on:input=move |ev| set_username.set(input_value(&ev))
            />
            <input
                id="login-password"
                class=css::field
                type="password"
                placeholder="Password"
                autocomplete="current-password"
                prop:value=password
                on:input=move |ev| set_password.set(input_value(&ev))
            />
            <button
                class=css::submit
                type="submit"
                disabled=move || ctx.session.with(|s| s.is_submitting())
            >
                "Login"
            </button>
        </form>
    }
}

/// Signup form: adds the confirm-password field and its equality check.
#[component]
fn SignupForm(error: RwSignal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();

        // Mismatch is reported before any network call happens.
        if let Err(e) = auth::validate_signup(&username, &password, &confirm.get()) {
            error.set(Some(e.to_string()));
            return;
        }

        start_submit(ctx, error, CredentialKind::Register, username, password);
    };

    view! {
        <form class=css::form on:submit=handle_submit>
            <input
                id="signup-username"
                class=css::field
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=username
                on:input=move |ev| set_username.set(input_value(&ev))
            />
            <input
                id="signup-password"
                class=css::field
                type="password"
                placeholder="Password"
                autocomplete="new-password"
                prop:value=password
                on:input=move |ev| set_password.set(input_value(&ev))
            />
            <input
                id="signup-confirm-password"
                class=css::field
                type="password"
                placeholder="Confirm Password"
                autocomplete="new-password"
                prop:value=confirm
                on:input=move |ev| set_confirm.set(input_value(&ev))
            />
            <button
                class=css::submit
                type="submit"
                disabled=move || ctx.session.with(|s| s.is_submitting())
            >
                "Sign Up"
            </button>
        </form>
    }
}
