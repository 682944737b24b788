//! Games panel.
//!
//! Renders the fixed game library once. No network request is made; the
//! entries are compile-time constants.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::GAME_LIBRARY;

stylance::import_crate_style!(css, "src/components/games.module.css");

#[component]
pub fn GamesPanel() -> impl IntoView {
    view! {
        <section class=css::panel>
            <h2 class=css::heading>"Games"</h2>

            <div id="game-collection" class=css::grid>
                {GAME_LIBRARY
                    .iter()
                    .map(|game| {
                        view! {
                            <div class=css::card>
                                <h3 class=css::name>{game.name}</h3>
                                <a class=css::playBtn href=game.url target="_blank" rel="noopener">
                                    <Icon icon=ic::PLAY />
                                    "Play"
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
