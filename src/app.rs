//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Shell;
use crate::models::{AuthMode, ChatMessage, Listing, Post, Section, SessionState};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// All mutable UI state lives here as signals, and rendering is a function
/// of these values. The state that the page toggles with CSS classes in an
/// ad hoc implementation becomes three enums (session, section, auth mode)
/// plus the three transient collections.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-out / submitting / signed-in state; selects auth vs main view.
    pub session: RwSignal<SessionState>,
    /// The single active section of the main view.
    pub section: RwSignal<Section>,
    /// Which auth form (login or signup) is visible.
    pub auth_mode: RwSignal<AuthMode>,
    /// Marketplace listings, oldest first (new entries append).
    pub listings: RwSignal<Vec<Listing>>,
    /// Community posts, newest first (new entries prepend).
    pub posts: RwSignal<Vec<Post>>,
    /// Local chat transcript, oldest first.
    pub messages: RwSignal<Vec<ChatMessage>>,
}

impl AppContext {
    /// Creates a new application context with default state.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            section: RwSignal::new(Section::default()),
            auth_mode: RwSignal::new(AuthMode::default()),
            listings: RwSignal::new(Vec::new()),
            posts: RwSignal::new(Vec::new()),
            messages: RwSignal::new(Vec::new()),
        }
    }

    /// Transition to the main view for `username`.
    pub fn sign_in(&self, username: String) {
        self.session.set(SessionState::SignedIn { username });
    }

    /// Transition back to the auth view.
    ///
    /// Section and auth mode reset to their defaults so the page matches a
    /// fresh load. The transient collections survive until reload, as they
    /// would in the ad hoc page.
    pub fn sign_out(&self) {
        self.session.set(SessionState::SignedOut);
        self.section.set(Section::default());
        self.auth_mode.set(AuthMode::default());
    }

    /// Append a marketplace listing.
    pub fn add_listing(&self, listing: Listing) {
        self.listings.update(|l| l.push(listing));
    }

    /// Prepend a community post.
    pub fn add_post(&self, post: Post) {
        self.posts.update(|p| p.insert(0, post));
    }

    /// Bump the like counter on a post.
    pub fn like_post(&self, id: usize) {
        self.posts.update(|posts| {
            if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
                post.likes += 1;
            }
        });
    }

    /// Bump the dislike counter on a post.
    pub fn dislike_post(&self, id: usize) {
        self.posts.update(|posts| {
            if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
                post.dislikes += 1;
            }
        });
    }

    /// Append a chat message to the transcript.
    pub fn push_message(&self, message: ChatMessage) {
        self.messages.update(|m| m.push(message));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Shell component
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f3f4f6;
                    color: #1f2937;
                    font-family: sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6b7280;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #dc2626;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2563eb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
