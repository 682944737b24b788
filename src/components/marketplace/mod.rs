//! Marketplace panel.
//!
//! A listing form plus the cards created from it. New listings append to
//! the end of the list and live only until page reload.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Listing;

stylance::import_crate_style!(css, "src/components/marketplace/marketplace.module.css");

fn input_value(ev: &ev::Event) -> String {
    ev.target()
        .map(|t| t.unchecked_into::<web_sys::HtmlInputElement>().value())
        .unwrap_or_default()
}

#[component]
pub fn MarketplacePanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let handle_list = move |_| {
        let Some(listing) = Listing::from_fields(&name.get(), &price.get(), &category.get())
        else {
            // Name or price missing: nothing is added, fields keep their values.
            return;
        };
        ctx.add_listing(listing);
        // Category intentionally keeps its value between listings.
        set_name.set(String::new());
        set_price.set(String::new());
    };

    view! {
        <section class=css::panel>
            <h2 class=css::heading>"Marketplace"</h2>

            <div class=css::form>
                <input
                    id="item-name"
                    class=css::field
                    type="text"
                    placeholder="Item name"
                    prop:value=name
                    on:input=move |ev| set_name.set(input_value(&ev))
                />
                <input
                    id="item-price"
                    class=css::field
                    type="number"
                    placeholder="Price"
                    prop:value=price
                    on:input=move |ev| set_price.set(input_value(&ev))
                />
                <input
                    id="item-category"
                    class=css::field
                    type="text"
                    placeholder="Category"
                    prop:value=category
                    on:input=move |ev| set_category.set(input_value(&ev))
                />
                <button id="list-item" class=css::listBtn on:click=handle_list>
                    <Icon icon=ic::PLUS />
                    "List Item"
                </button>
            </div>

            <div id="marketplace-items" class=css::items>
                <For
                    each=move || ctx.listings.get()
                    key=|listing| listing.id
                    children=move |listing| view! { <ListingCard listing=listing /> }
                />
            </div>
        </section>
    }
}

/// One marketplace listing card.
#[component]
fn ListingCard(listing: Listing) -> impl IntoView {
    view! {
        <div class=css::card>
            <h4 class=css::cardName>{listing.name}</h4>
            <p>"Price: $" {listing.price}</p>
            <p>"Category: " {listing.category}</p>
            <button class=css::buyBtn>"Buy"</button>
        </div>
    }
}
