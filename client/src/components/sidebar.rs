//! Left navigation column.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session row is wired to behavior: "Sign In" hands off to the
//! external sign-in flow, "Sign Out" drops the server session and, once the
//! server confirms, clears the page's session state. The remaining rows are
//! navigation chrome.

use leptos::prelude::*;

use crate::components::sidebar_row::SidebarRow;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
const SIGN_IN_PATH: &str = "/auth/signin";

#[component]
pub fn Sidebar(session: RwSignal<SessionState>) -> impl IntoView {
    let on_sign_in = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(SIGN_IN_PATH);
            }
        }
    });

    let on_sign_out = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::logout().await {
                    Ok(()) => session.update(SessionState::clear),
                    Err(e) => log::warn!("logout failed: {e}"),
                }
            });
        }
    });

    let session_row = move || {
        let state = session.get();
        if state.loading {
            None
        } else if state.is_authenticated() {
            Some(view! { <SidebarRow icon="⇥" title="Sign Out" on_click=on_sign_out/> }.into_any())
        } else {
            Some(view! { <SidebarRow icon="☺" title="Sign In" on_click=on_sign_in/> }.into_any())
        }
    };

    view! {
        <nav class="sidebar">
            <span class="sidebar__logo" aria-label="Home">"🐦"</span>
            <SidebarRow icon="⌂" title="Home"/>
            <SidebarRow icon="#" title="Explore"/>
            <SidebarRow icon="🔔" title="Notifications"/>
            <SidebarRow icon="✉" title="Messages"/>
            <SidebarRow icon="🔖" title="Bookmarks"/>
            <SidebarRow icon="☰" title="Lists"/>
            {session_row}
            <SidebarRow icon="⋯" title="More"/>
        </nav>
    }
}
