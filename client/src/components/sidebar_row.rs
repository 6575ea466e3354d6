//! One navigation entry in the left sidebar.

use leptos::prelude::*;

/// Glyph + title row; clicking runs `on_click` when one is supplied.
#[component]
pub fn SidebarRow(
    icon: &'static str,
    title: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            class="sidebar-row"
            class:sidebar-row--action=on_click.is_some()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <span class="sidebar-row__icon" aria-hidden="true">{icon}</span>
            <p class="sidebar-row__title">{title}</p>
        </div>
    }
}
