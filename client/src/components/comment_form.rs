//! Inline comment box under a post.

use leptos::prelude::*;

use crate::state::thread::ThreadState;

/// Edits `thread.input`; the Post button is disabled while the input is the
/// empty string. Submitting runs `on_post` after suppressing navigation.
#[component]
pub fn CommentForm(thread: RwSignal<ThreadState>, on_post: Callback<()>) -> impl IntoView {
    view! {
        <form
            class="comment-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_post.run(());
            }
        >
            <input
                class="comment-form__input"
                type="text"
                placeholder="Write a comment"
                prop:value=move || thread.with(|t| t.input.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    thread.update(|t| t.input = value);
                }
            />
            <button
                class="comment-form__submit"
                type="submit"
                disabled=move || !thread.with(ThreadState::can_submit)
            >
                "Post"
            </button>
        </form>
    }
}
