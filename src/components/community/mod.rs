//! Community panel.
//!
//! A post composer plus the feed created from it. New posts go to the top
//! of the feed; like/dislike counters are local to the page.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Post;

stylance::import_crate_style!(css, "src/components/community/community.module.css");

#[component]
pub fn CommunityPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (content, set_content) = signal(String::new());

    let handle_post = move |_| {
        let Some(post) = Post::from_content(&content.get()) else {
            return;
        };
        ctx.add_post(post);
        set_content.set(String::new());
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let textarea = target.unchecked_into::<web_sys::HtmlTextAreaElement>();
        set_content.set(textarea.value());
    };

    view! {
        <section class=css::panel>
            <h2 class=css::heading>"Community"</h2>

            <div class=css::composer>
                <textarea
                    id="post-content"
                    class=css::textarea
                    placeholder="Share something with the community..."
                    prop:value=content
                    on:input=handle_input
                ></textarea>
                <button id="create-post" class=css::postBtn on:click=handle_post>
                    "Post"
                </button>
            </div>

            <div id="community-posts" class=css::feed>
                <For
                    each=move || ctx.posts.get()
                    key=|post| post.id
                    children=move |post| view! { <PostCard post=post /> }
                />
            </div>
        </section>
    }
}

/// One community post with its action row.
#[component]
fn PostCard(post: Post) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = post.id;

    // Counters re-read from the feed signal so every card stays live.
    let likes = move || {
        ctx.posts
            .with(|posts| posts.iter().find(|p| p.id == id).map_or(0, |p| p.likes))
    };
    let dislikes = move || {
        ctx.posts
            .with(|posts| posts.iter().find(|p| p.id == id).map_or(0, |p| p.dislikes))
    };

    view! {
        <div class=css::post>
            <p class=css::content>{post.content}</p>
            <div class=css::actions>
                <button class=css::likeBtn on:click=move |_| ctx.like_post(id)>
                    <Icon icon=ic::LIKE />
                    {likes}
                </button>
                <button class=css::dislikeBtn on:click=move |_| ctx.dislike_post(id)>
                    <Icon icon=ic::DISLIKE />
                    {dislikes}
                </button>
                <button class=css::commentBtn>
                    <Icon icon=ic::COMMENT />
                    "Comment"
                </button>
            </div>
        </div>
    }
}
