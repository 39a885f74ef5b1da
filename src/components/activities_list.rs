//! Activities List Component
//!
//! `#activities-list`: rebuilt from scratch on every load.

use leptos::prelude::*;

use crate::board::{ListState, LIST_FAILED_TEXT};
use crate::components::ActivityCard;
use crate::context::use_board;

#[component]
pub fn ActivitiesList() -> impl IntoView {
    let ctx = use_board();

    view! {
        <div id="activities-list">
            {move || match ctx.list.get() {
                ListState::Loading => view! { <p>"Loading activities..."</p> }.into_any(),
                ListState::Failed => view! { <p>{LIST_FAILED_TEXT}</p> }.into_any(),
                ListState::Loaded(activities) => activities
                    .into_iter()
                    .map(|activity| view! { <ActivityCard activity=activity /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
