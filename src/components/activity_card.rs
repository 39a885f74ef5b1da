//! Activity Card Component

use leptos::prelude::*;

use crate::components::ParticipantRow;
use crate::models::Activity;

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

#[component]
pub fn ActivityCard(activity: Activity) -> impl IntoView {
    let spots_left = activity.spots_left();
    let count = activity.participants.len();
    let name = activity.name.clone();

    let roster = if activity.participants.is_empty() {
        view! { <li class="no-participants">{NO_PARTICIPANTS_TEXT}</li> }.into_any()
    } else {
        activity
            .participants
            .iter()
            .map(|email| {
                view! { <ParticipantRow activity=name.clone() email=email.clone() /> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{activity.name.clone()}</h4>
            <p>{activity.description.clone()}</p>
            <p><strong>"Schedule:"</strong> " " {activity.schedule.clone()}</p>
            <p><strong>"Availability:"</strong> " " {format!("{} spots left", spots_left)}</p>

            <div class="participants-section">
                <h5>
                    "Participants "
                    <span class="participant-count">{format!("({})", count)}</span>
                </h5>
                <ul class="participants-list">{roster}</ul>
            </div>
        </div>
    }
}
