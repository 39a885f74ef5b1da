//! Participant Row Component
//!
//! One roster entry with its unregister control.

use leptos::prelude::*;

use crate::context::use_board;

/// Email plus a ✖ button that unregisters it (after confirmation)
#[component]
pub fn ParticipantRow(
    activity: String,
    email: String,
) -> impl IntoView {
    let ctx = use_board();

    let aria_label = format!("Unregister {} from {}", email, activity);
    let title = format!("Unregister {}", email);
    let shown_email = email.clone();

    let unregister = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.unregister(activity.clone(), email.clone());
    };

    view! {
        <li>
            <span class="participant-email">{shown_email}</span>
            <button
                class="delete-btn"
                aria-label=aria_label
                title=title
                on:click=unregister
            >
                "✖"
            </button>
        </li>
    }
}
