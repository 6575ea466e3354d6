//! Comment thread beneath a post.

use leptos::prelude::*;

use crate::components::time_ago::TimeAgo;
use crate::net::types::Comment;
use crate::util::handle::handle;

/// Renders nothing for an empty thread, otherwise one row per comment in the
/// order received.
#[component]
pub fn CommentList(#[prop(into)] comments: Signal<Vec<Comment>>) -> impl IntoView {
    view! {
        <Show when=move || comments.with(|c| !c.is_empty())>
            <div class="comment-list">
                <For
                    each=move || comments.get()
                    key=|comment| comment.id.clone()
                    children=|comment| view! { <CommentRow comment=comment/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn CommentRow(comment: Comment) -> impl IntoView {
    let Comment { created_at, comment: text, username, profile_img, .. } = comment;
    let handle = handle(&username);

    view! {
        <div class="comment">
            <hr class="comment__thread-line"/>
            <img class="comment__avatar" src=profile_img alt="comment image"/>
            <div>
                <div class="comment__meta">
                    <p class="comment__author">{username}</p>
                    <p class="comment__handle">{handle}" •"</p>
                    <TimeAgo created_at=created_at/>
                </div>
                <p class="comment__text">{text}</p>
            </div>
        </div>
    }
}
