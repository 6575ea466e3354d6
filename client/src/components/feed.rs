//! Center column: header with refresh control and one card per post.

use leptos::prelude::*;

use crate::components::tweet_card::TweetCard;
use crate::net::types::{SessionUser, Tweet};
use crate::state::feed::FeedState;
use crate::state::toast::ToastState;
use crate::util::lifetime::Lifetime;

/// Renders `tweets` in order. The refresh control re-reads the whole post
/// list and replaces it; cards whose post survives the refresh keep their
/// thread state because the list is keyed by post id.
#[component]
pub fn Feed(tweets: Vec<Tweet>, #[prop(into)] viewer: Signal<Option<SessionUser>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let feed = RwSignal::new(FeedState::new(tweets));
    let lifetime = Lifetime::scoped();

    let on_refresh = move |_| {
        if feed.with_untracked(|f| f.refreshing) {
            return;
        }
        feed.update(|f| f.refreshing = true);
        let toast_id = toasts.try_update(|t| t.loading("Refreshing...")).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_tweets().await {
                    Ok(tweets) => {
                        toasts.update(|t| t.succeed(toast_id, "Feed Updated!"));
                        if lifetime.is_alive() {
                            feed.update(|f| f.replace(tweets));
                        }
                    }
                    Err(e) => {
                        log::warn!("feed refresh failed: {e}");
                        toasts.update(|t| t.fail(toast_id, format!("Could not refresh: {e}")));
                        if lifetime.is_alive() {
                            feed.update(|f| f.refreshing = false);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (toast_id, &lifetime);
        }
    };

    view! {
        <section class="feed">
            <div class="feed__header">
                <h1 class="feed__title">"Home"</h1>
                <button
                    class="feed__refresh"
                    title="Refresh"
                    disabled=move || feed.with(|f| f.refreshing)
                    on:click=on_refresh
                >
                    "⟳"
                </button>
            </div>

            <Show when=move || feed.with(FeedState::is_empty)>
                <p class="feed__empty">"No tweets yet."</p>
            </Show>

            <For
                each=move || feed.with(|f| f.tweets.clone())
                key=|tweet| tweet.id.clone()
                children=move |tweet| view! { <TweetCard tweet=tweet viewer=viewer/> }
            />
        </section>
    }
}
