//! Message Banner Component

use leptos::prelude::*;

use crate::context::use_board;

/// `#message`: hidden until an action reports back
#[component]
pub fn MessageBanner() -> impl IntoView {
    let ctx = use_board();

    view! {
        <div
            id="message"
            class=move || ctx.message.with(|slot| slot.class())
            aria-hidden=move || ctx.message.with(|slot| (!slot.is_visible()).to_string())
        >
            {move || ctx.message.with(|slot| slot.current().map(|m| m.text.clone()).unwrap_or_default())}
        </div>
    }
}
