//! UI Components
//!
//! Leptos components for the activity board.

mod activities_list;
mod activity_card;
mod message_banner;
mod participant_row;
mod signup_form;

pub use activities_list::ActivitiesList;
pub use activity_card::ActivityCard;
pub use message_banner::MessageBanner;
pub use participant_row::ParticipantRow;
pub use signup_form::SignupForm;
