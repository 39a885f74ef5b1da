//! Activity Board App
//!
//! Root component: builds the board once, shares it via context and kicks off
//! the first load.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::board::ActivityBoard;
use crate::components::{ActivitiesList, MessageBanner, SignupForm};
use crate::config::BoardConfig;
use crate::context::{BoardContext, BrowserConfirm};

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_document();
    let board = ActivityBoard::new(HttpApi::new(config.api_base.clone()), BrowserConfirm, config);

    let ctx = BoardContext::new(board);
    provide_context(ctx);

    web_sys::console::log_1(&"[APP] Loading activities".into());
    ctx.load();

    view! {
        <main class="board-layout">
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivitiesList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageBanner />
            </section>
        </main>
    }
}
