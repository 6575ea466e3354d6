//! Notification stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::DismissSchedule;

#[cfg(feature = "hydrate")]
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(2);

/// Renders every toast in `ToastState`. Resolved toasts dismiss themselves
/// after two seconds, one timer per toast; loading toasts stay until resolved.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        let schedule = StoredValue::new(DismissSchedule::default());
        Effect::new(move || {
            let resolved = toasts.with(ToastState::resolved_ids);
            let fresh = schedule.try_update_value(|s| s.claim(&resolved)).unwrap_or_default();
            for id in fresh {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(DISMISS_AFTER).await;
                    toasts.update(|state| state.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|state| state.items.clone())
                key=|toast| (toast.id, toast.kind)
                children=|toast| {
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str())>{toast.message}</div>
                    }
                }
            />
        </div>
    }
}
