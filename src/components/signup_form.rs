//! Signup Form Component
//!
//! `#signup-form` with the `#email` input and the `#activity` select.

use leptos::prelude::*;

use crate::board::SELECT_PLACEHOLDER;
use crate::context::use_board;

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_board();

    let email = ctx.email;
    let activity = ctx.selected;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let activity = activity.get_untracked();
        web_sys::console::log_1(&format!("[FORM] Signing up {} for {}", email, activity).into());
        ctx.signup(activity, email);
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@school.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || activity.get()
                    on:change=move |ev| activity.set(event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        let current = activity.get_untracked();
                        ctx.list
                            .with(|list| list.options())
                            .into_iter()
                            .map(|name| {
                                let selected = name == current;
                                let value = name.clone();
                                view! { <option value=value selected=selected>{name}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
