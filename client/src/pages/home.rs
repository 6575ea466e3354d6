//! Home page: sidebar, feed and widgets side by side.
//!
//! SYSTEM CONTEXT
//! ==============
//! The post list is a `Resource` resolved during server rendering and shipped
//! to the browser in the hydration payload, so each page request reads the
//! post list exactly once. The viewer session is looked up after hydration
//! and handed down as a prop to every component that needs it.

use std::future::Future;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::feed::Feed;
use crate::components::sidebar::Sidebar;
use crate::components::widgets::Widgets;
use crate::net::types::Tweet;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let tweets = Resource::new(|| (), |()| page_tweets());

    let session = RwSignal::new(SessionState::pending());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        session.update(|s| s.resolve(user));
    });
    let viewer = Signal::derive(move || session.with(|s| s.user.clone()));

    view! {
        <Title text="Twitter"/>
        <div class="home">
            <main class="home__grid">
                <Sidebar session=session/>
                <Suspense fallback=|| view! { <section class="feed feed--loading">"Loading..."</section> }>
                    {move || {
                        tweets
                            .get()
                            .map(|result| match result {
                                Ok(list) => view! { <Feed tweets=list viewer=viewer/> }.into_any(),
                                Err(e) => {
                                    view! {
                                        <section class="feed feed--error">
                                            <p>{format!("Could not load tweets: {e}")}</p>
                                        </section>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
                <Widgets/>
            </main>
        </div>
    }
}

/// `Resource` needs a `Send` future; browser fetches are not, so they are
/// pinned to the main thread behind a `SendWrapper`.
fn page_tweets() -> impl Future<Output = Result<Vec<Tweet>, String>> + Send + 'static {
    #[cfg(feature = "hydrate")]
    {
        send_wrapper::SendWrapper::new(crate::net::api::fetch_tweets())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        crate::net::api::fetch_tweets()
    }
}
