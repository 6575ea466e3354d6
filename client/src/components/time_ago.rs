//! Live relative timestamp.

use leptos::prelude::*;

use crate::util::time_ago;

#[cfg(feature = "hydrate")]
const TICK: std::time::Duration = std::time::Duration::from_secs(30);

/// Renders `created_at` as "N units ago", re-evaluated on a 30 s tick in the
/// browser. The first tick replaces the server-rendered label.
#[component]
pub fn TimeAgo(created_at: String) -> impl IntoView {
    let now = RwSignal::new(time_ago::now());

    #[cfg(feature = "hydrate")]
    {
        let lifetime = crate::util::lifetime::Lifetime::scoped();
        leptos::task::spawn_local(async move {
            while lifetime.is_alive() {
                now.set(time_ago::now());
                gloo_timers::future::sleep(TICK).await;
            }
        });
    }

    let datetime = created_at.clone();
    view! {
        <time class="time-ago" datetime=datetime>
            {move || time_ago::label(&created_at, now.get())}
        </time>
    }
}
