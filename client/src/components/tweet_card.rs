//! Display unit for a single post and its comment thread.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each card owns its `ThreadState` exclusively. On mount it fetches the
//! post's comments once; after an accepted submission it clears the form and
//! re-fetches. Both fetches run as local tasks holding the card's
//! [`Lifetime`], so results that land after the card is disposed are dropped.
//!
//! The viewer session arrives as a prop. Without one the comment toggle is
//! inert and the form can never open; signing out closes any open form.
//! While a submission is in flight the Post button stays disabled.

use leptos::prelude::*;

use crate::components::comment_form::CommentForm;
use crate::components::comment_list::CommentList;
use crate::components::time_ago::TimeAgo;
use crate::net::types::{SessionUser, Tweet};
use crate::state::thread::ThreadState;
use crate::state::toast::ToastState;
use crate::util::handle::handle;
use crate::util::lifetime::Lifetime;

#[component]
pub fn TweetCard(tweet: Tweet, #[prop(into)] viewer: Signal<Option<SessionUser>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let thread = RwSignal::new(ThreadState::default());
    let lifetime = Lifetime::scoped();

    #[cfg(feature = "hydrate")]
    spawn_comment_refresh(tweet.id.clone(), thread, lifetime.clone());

    Effect::new(move || {
        let authenticated = viewer.with(Option::is_some);
        if !authenticated {
            thread.update(|t| t.close_form_for(authenticated));
        }
    });

    let on_toggle = move |_| {
        let authenticated = viewer.with_untracked(Option::is_some);
        thread.update(|t| t.toggle_form(authenticated));
    };

    let on_post = Callback::new({
        let tweet_id = tweet.id.clone();
        move |()| submit_comment(&tweet_id, thread, viewer, toasts, &lifetime)
    });

    let Tweet { created_at, text, username, profile_img, image, .. } = tweet;
    let handle = handle(&username);

    view! {
        <article class="tweet">
            <div class="tweet__body">
                <img class="tweet__avatar" src=profile_img alt="profile img"/>
                <div>
                    <div class="tweet__meta">
                        <p class="tweet__author">{username}</p>
                        <p class="tweet__handle">{handle}" •"</p>
                        <TimeAgo created_at=created_at/>
                    </div>
                    <p class="tweet__text">{text}</p>
                    {image.map(|src| view! { <img class="tweet__image" src=src alt="tweet image"/> })}
                </div>
            </div>

            <div class="tweet__actions">
                <div class="tweet__action tweet__action--comments" on:click=on_toggle>
                    <span aria-hidden="true">"💬"</span>
                    <p>{move || thread.with(ThreadState::comment_count)}</p>
                </div>
                <div class="tweet__action">
                    <span aria-hidden="true">"⇄"</span>
                </div>
                <div class="tweet__action">
                    <span aria-hidden="true">"♡"</span>
                </div>
                <div class="tweet__action">
                    <span aria-hidden="true">"⇪"</span>
                </div>
            </div>

            <Show when=move || {
                let authenticated = viewer.with(Option::is_some);
                thread.with(|t| t.form_shown(authenticated))
            }>
                <CommentForm thread=thread on_post=on_post/>
            </Show>

            <CommentList comments=Signal::derive(move || thread.with(|t| t.comments.clone()))/>
        </article>
    }
}

/// Post the current input for `tweet_id`.
///
/// Success is decided by the HTTP status: an accepted comment resolves the
/// toast, resets the form and triggers a refresh; a rejected one leaves input
/// and form as they were so the viewer can retry.
fn submit_comment(
    tweet_id: &str,
    thread: RwSignal<ThreadState>,
    viewer: Signal<Option<SessionUser>>,
    toasts: RwSignal<ToastState>,
    lifetime: &Lifetime,
) {
    let current_viewer = viewer.get_untracked();
    if !thread.with_untracked(|t| t.form_shown(current_viewer.is_some())) {
        return;
    }
    let Some(body) = thread.with_untracked(|t| t.submission(tweet_id, current_viewer.as_ref())) else {
        return;
    };
    thread.update(ThreadState::begin_submit);
    let toast_id = toasts.try_update(|t| t.loading("Posting Comment")).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let tweet_id = tweet_id.to_owned();
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::add_comment(&body).await {
                Ok(()) => {
                    toasts.update(|t| t.succeed(toast_id, "Comment Posted!"));
                    if lifetime.is_alive() {
                        thread.update(ThreadState::mark_submitted);
                        spawn_comment_refresh(tweet_id, thread, lifetime);
                    }
                }
                Err(e) => {
                    log::warn!("comment submission for {tweet_id} failed: {e}");
                    toasts.update(|t| t.fail(toast_id, format!("Could not post comment: {e}")));
                    if lifetime.is_alive() {
                        thread.update(ThreadState::submit_failed);
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (body, toast_id, lifetime);
    }
}

#[cfg(feature = "hydrate")]
fn spawn_comment_refresh(tweet_id: String, thread: RwSignal<ThreadState>, lifetime: Lifetime) {
    leptos::task::spawn_local(async move {
        let comments = crate::net::api::fetch_comments(&tweet_id).await;
        if lifetime.is_alive() {
            thread.update(|t| t.replace_comments(comments));
        }
    });
}
