//! Section navigation bar.

use icondata::Icon as IconData;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Section;

stylance::import_crate_style!(css, "src/components/nav.module.css");

fn section_icon(section: Section) -> IconData {
    match section {
        Section::Chat => ic::CHAT,
        Section::Marketplace => ic::MARKETPLACE,
        Section::Community => ic::COMMUNITY,
        Section::Games => ic::GAMES,
    }
}

/// Nav bar with one button per section.
///
/// Clicking a button makes the section named by its `data-section`
/// attribute the active one; an unknown or missing identifier is a no-op.
/// The button for the active section carries the active style.
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let handle_nav = move |ev: ev::MouseEvent| {
        let id = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("data-section"))
            .unwrap_or_default();
        if let Some(section) = Section::from_id(&id) {
            ctx.section.set(section);
        }
    };

    view! {
        <nav class=css::nav>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    let class_name = move || {
                        if ctx.section.get() == section {
                            format!("{} {}", css::navBtn, css::navBtnActive)
                        } else {
                            css::navBtn.to_string()
                        }
                    };
                    view! {
                        <button
                            class=class_name
                            data-section=section.id()
                            on:click=handle_nav
                        >
                            <Icon icon=section_icon(section) />
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
