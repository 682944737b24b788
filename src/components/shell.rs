//! Main shell component.
//!
//! Container component that switches between the auth view and the main
//! application view based on session state, and renders the single active
//! section inside the main view.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::auth::AuthPanel;
use crate::components::chat::ChatPanel;
use crate::components::community::CommunityPanel;
use crate::components::games::GamesPanel;
use crate::components::icons as ic;
use crate::components::marketplace::MarketplacePanel;
use crate::components::nav::Nav;
use crate::config::APP_NAME;
use crate::models::Section;

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Shell component managing the auth / main view split.
///
/// Rendering is a function of [`AppContext::session`]: the auth panel shows
/// while signed out (or while a submission is in flight), the main
/// application once signed in. Exactly one of the two is ever mounted.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::screen>
            <Show
                when=move || ctx.session.with(|s| s.is_signed_in())
                fallback=|| view! { <AuthPanel /> }
            >
                <MainApp />
            </Show>
        </div>
    }
}

/// The signed-in application: header, section nav, and the active panel.
#[component]
fn MainApp() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let username = move || ctx.session.with(|s| s.display_name().to_string());
    let on_logout = move |_| ctx.sign_out();

    view! {
        <header class=css::header>
            <span class=css::brand>{APP_NAME}</span>
            <div class=css::user>
                <Icon icon=ic::USER />
                <span class=css::username>{username}</span>
                <button class=css::logout on:click=on_logout>
                    <Icon icon=ic::LOGOUT />
                    "Logout"
                </button>
            </div>
        </header>

        <Nav />

        <main class=css::main>
            {move || match ctx.section.get() {
                Section::Chat => view! { <ChatPanel /> }.into_any(),
                Section::Marketplace => view! { <MarketplacePanel /> }.into_any(),
                Section::Community => view! { <CommunityPanel /> }.into_any(),
                Section::Games => view! { <GamesPanel /> }.into_any(),
            }}
        </main>
    }
}
