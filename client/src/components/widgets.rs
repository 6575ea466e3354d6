//! Right column: search box and a trending panel linking out to a profile
//! timeline. Presentation only.

use leptos::prelude::*;

const TIMELINE_SCREEN_NAME: &str = "rustlang";

fn timeline_url(screen_name: &str) -> String {
    format!("https://twitter.com/{screen_name}")
}

#[component]
pub fn Widgets() -> impl IntoView {
    view! {
        <aside class="widgets">
            <form class="widgets__search" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <span aria-hidden="true">"⌕"</span>
                <input class="widgets__search-input" type="text" placeholder="Search Twitter"/>
            </form>
            <section class="widgets__timeline">
                <h2>"What's happening"</h2>
                <a href=timeline_url(TIMELINE_SCREEN_NAME) target="_blank" rel="noreferrer">
                    {format!("Tweets by @{TIMELINE_SCREEN_NAME}")}
                </a>
            </section>
        </aside>
    }
}
