//! Activity Board Controller
//!
//! Load / signup / unregister flows, independent of the DOM. Each flow
//! returns what the view should show; the components apply it.

use leptos::logging::{error, log, warn};

use crate::api::ActivityApi;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::message::Message;
use crate::models::Activity;

pub const LIST_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Interactive yes/no prompt
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// What the activities list area shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    Loaded(Vec<Activity>),
    Failed,
}

impl ListState {
    pub fn activities(&self) -> &[Activity] {
        match self {
            ListState::Loaded(activities) => activities.as_slice(),
            ListState::Loading | ListState::Failed => &[],
        }
    }

    /// Option values for the activity select, placeholder excluded
    pub fn options(&self) -> Vec<String> {
        self.activities().iter().map(|a| a.name.clone()).collect()
    }
}

/// Outcome of a signup or unregister attempt
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub message: Message,
    pub hide_after_ms: u32,
    /// Fresh list when the mutation succeeded
    pub refreshed: Option<ListState>,
    pub reset_form: bool,
}

#[derive(Debug, Clone)]
pub struct ActivityBoard<A, C> {
    api: A,
    confirmer: C,
    config: BoardConfig,
}

impl<A: ActivityApi, C: Confirmer> ActivityBoard<A, C> {
    pub fn new(api: A, confirmer: C, config: BoardConfig) -> Self {
        Self { api, confirmer, config }
    }

    /// Fetch and normalise the whole collection. Never fails outward.
    pub async fn load_activities(&self) -> ListState {
        let result = match self.api.fetch_activities().await {
            Ok(payload) => payload.into_activities(),
            Err(e) => Err(e),
        };

        match result {
            Ok(activities) => {
                log!("[BOARD] Loaded {} activities", activities.len());
                ListState::Loaded(activities)
            }
            Err(e) => {
                error!("[BOARD] Error fetching activities: {}", e);
                ListState::Failed
            }
        }
    }

    pub async fn signup(&self, activity: &str, email: &str) -> ActionReport {
        let hide_after_ms = self.config.signup_hide_ms;

        match self.api.signup(activity, email).await.and_then(|r| r.into_result()) {
            Ok(body) => {
                log!("[BOARD] Signed up {} for {}", email, activity);
                let text = body.message_text().unwrap_or_else(|| "Signed up successfully".to_string());
                let refreshed = self.load_activities().await;
                ActionReport {
                    message: Message::success(text),
                    hide_after_ms,
                    refreshed: Some(refreshed),
                    reset_form: true,
                }
            }
            Err(BoardError::Http { status, detail }) => {
                warn!("[BOARD] Signup rejected ({}): {:?}", status, detail);
                ActionReport {
                    message: Message::error(detail.unwrap_or_else(|| "An error occurred".to_string())),
                    hide_after_ms,
                    refreshed: None,
                    reset_form: false,
                }
            }
            Err(e) => {
                error!("[BOARD] Error signing up: {}", e);
                ActionReport {
                    message: Message::error("Failed to sign up. Please try again."),
                    hide_after_ms,
                    refreshed: None,
                    reset_form: false,
                }
            }
        }
    }

    /// `None` when the user declines the confirmation; nothing is sent then.
    pub async fn unregister(&self, activity: &str, email: &str) -> Option<ActionReport> {
        let prompt = format!("Unregister {} from {}?", email, activity);
        if !self.confirmer.confirm(&prompt) {
            return None;
        }

        let hide_after_ms = self.config.unregister_hide_ms;
        let report = match self.api.unregister(activity, email).await.and_then(|r| r.into_result()) {
            Ok(body) => {
                log!("[BOARD] Unregistered {} from {}", email, activity);
                let text = body.message_text().unwrap_or_else(|| format!("Unregistered {}", email));
                let refreshed = self.load_activities().await;
                ActionReport {
                    message: Message::success(text),
                    hide_after_ms,
                    refreshed: Some(refreshed),
                    reset_form: false,
                }
            }
            Err(BoardError::Http { status, detail }) => {
                warn!("[BOARD] Unregister rejected ({}): {:?}", status, detail);
                ActionReport {
                    message: Message::error(detail.unwrap_or_else(|| "Failed to unregister".to_string())),
                    hide_after_ms,
                    refreshed: None,
                    reset_form: false,
                }
            }
            Err(e) => {
                error!("[BOARD] Error unregistering: {}", e);
                ActionReport {
                    message: Message::error("Failed to unregister. Please try again."),
                    hide_after_ms,
                    refreshed: None,
                    reset_form: false,
                }
            }
        };
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use serde_json::{json, Value};

    use crate::api::ApiReply;
    use crate::message::MessageKind;
    use crate::models::{ActivityPayload, ApiMessage};

    /// In-memory backend that counts requests
    #[derive(Default)]
    struct FakeApi {
        list: RefCell<Value>,
        list_error: Option<BoardError>,
        reply: RefCell<Option<Result<ApiReply, BoardError>>>,
        list_calls: Cell<usize>,
        mutation_calls: RefCell<Vec<(String, String, String)>>,
    }

    impl FakeApi {
        fn with_list(list: Value) -> Self {
            Self { list: RefCell::new(list), ..Default::default() }
        }

        fn replying(self, reply: Result<ApiReply, BoardError>) -> Self {
            *self.reply.borrow_mut() = Some(reply);
            self
        }

        fn take_reply(&self) -> Result<ApiReply, BoardError> {
            self.reply
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(BoardError::Transport("no reply scripted".into())))
        }

        fn request_count(&self) -> usize {
            self.list_calls.get() + self.mutation_calls.borrow().len()
        }
    }

    impl ActivityApi for FakeApi {
        async fn fetch_activities(&self) -> Result<ActivityPayload, BoardError> {
            self.list_calls.set(self.list_calls.get() + 1);
            if let Some(e) = &self.list_error {
                return Err(e.clone());
            }
            ActivityPayload::try_from(self.list.borrow().clone())
        }

        async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, BoardError> {
            self.mutation_calls.borrow_mut().push(("signup".into(), activity.into(), email.into()));
            self.take_reply()
        }

        async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, BoardError> {
            self.mutation_calls.borrow_mut().push(("unregister".into(), activity.into(), email.into()));
            self.take_reply()
        }
    }

    struct Answer {
        yes: bool,
        prompts: RefCell<Vec<String>>,
    }

    impl Answer {
        fn new(yes: bool) -> Self {
            Self { yes, prompts: RefCell::new(Vec::new()) }
        }
    }

    impl Confirmer for Answer {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.yes
        }
    }

    fn ok_reply(message: &str) -> Result<ApiReply, BoardError> {
        Ok(ApiReply {
            ok: true,
            status: 200,
            body: ApiMessage { message: Some(message.into()), detail: None },
        })
    }

    fn err_reply(status: u16, detail: &str) -> Result<ApiReply, BoardError> {
        Ok(ApiReply {
            ok: false,
            status,
            body: ApiMessage { message: None, detail: Some(Value::String(detail.into())) },
        })
    }

    fn chess_club() -> Value {
        json!({
            "Chess Club": {
                "description": "d",
                "schedule": "Mon",
                "max_participants": 2,
                "participants": ["a@x.com"]
            }
        })
    }

    fn board(api: FakeApi, yes: bool) -> ActivityBoard<FakeApi, Answer> {
        ActivityBoard::new(api, Answer::new(yes), BoardConfig::default())
    }

    #[tokio::test]
    async fn test_load_chess_club() {
        let board = board(FakeApi::with_list(chess_club()), true);
        let state = board.load_activities().await;

        let activities = state.activities();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Chess Club");
        assert_eq!(format!("{} spots left", activities[0].spots_left()), "1 spots left");
        assert_eq!(activities[0].participants, vec!["a@x.com".to_string()]);
    }

    #[tokio::test]
    async fn test_options_follow_mapping_keys() {
        let board = board(
            FakeApi::with_list(json!({
                "Chess Club": {},
                "Programming Class": {},
                "Gym Class": {}
            })),
            true,
        );
        let state = board.load_activities().await;
        assert_eq!(state.options(), vec!["Chess Club", "Programming Class", "Gym Class"]);
    }

    #[tokio::test]
    async fn test_bare_number_fails_load() {
        let board = board(FakeApi::with_list(json!(42)), true);
        let state = board.load_activities().await;
        assert_eq!(state, ListState::Failed);
        assert!(state.options().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_fails_load() {
        let api = FakeApi {
            list_error: Some(BoardError::Transport("offline".into())),
            ..Default::default()
        };
        assert_eq!(board(api, true).load_activities().await, ListState::Failed);
    }

    #[tokio::test]
    async fn test_signup_success_reloads_once() {
        let api = FakeApi::with_list(chess_club()).replying(ok_reply("Signed up b@x.com for Chess Club"));
        let board = board(api, true);

        let report = board.signup("Chess Club", "b@x.com").await;

        assert_eq!(board.api.list_calls.get(), 1);
        assert_eq!(report.message, Message::success("Signed up b@x.com for Chess Club"));
        assert_eq!(report.hide_after_ms, 5000);
        assert!(report.reset_form);
        assert!(matches!(report.refreshed, Some(ListState::Loaded(_))));
    }

    #[tokio::test]
    async fn test_signup_success_without_message_uses_fallback() {
        let api = FakeApi::with_list(chess_club()).replying(Ok(ApiReply {
            ok: true,
            status: 200,
            body: ApiMessage::default(),
        }));
        let report = board(api, true).signup("Chess Club", "b@x.com").await;
        assert_eq!(report.message, Message::success("Signed up successfully"));
    }

    #[tokio::test]
    async fn test_signup_rejected_shows_detail() {
        let api = FakeApi::with_list(chess_club()).replying(err_reply(400, "Already registered"));
        let board = board(api, true);

        let report = board.signup("Chess Club", "a@x.com").await;

        assert_eq!(report.message.kind, MessageKind::Error);
        assert_eq!(report.message.text, "Already registered");
        assert_eq!(report.refreshed, None);
        assert!(!report.reset_form);
        assert_eq!(board.api.list_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_signup_rejected_without_detail() {
        let api = FakeApi::with_list(chess_club()).replying(Ok(ApiReply {
            ok: false,
            status: 500,
            body: ApiMessage::default(),
        }));
        let report = board(api, true).signup("Chess Club", "a@x.com").await;
        assert_eq!(report.message, Message::error("An error occurred"));
    }

    #[tokio::test]
    async fn test_signup_transport_error() {
        let api = FakeApi::with_list(chess_club()).replying(Err(BoardError::Parse("bad json".into())));
        let report = board(api, true).signup("Chess Club", "a@x.com").await;
        assert_eq!(report.message, Message::error("Failed to sign up. Please try again."));
        assert_eq!(report.refreshed, None);
    }

    #[tokio::test]
    async fn test_unregister_declined_sends_nothing() {
        let board = board(FakeApi::with_list(chess_club()).replying(ok_reply("Unregistered")), false);

        let report = board.unregister("Chess Club", "a@x.com").await;

        assert_eq!(report, None);
        assert_eq!(board.api.request_count(), 0);
        assert_eq!(
            board.confirmer.prompts.borrow().as_slice(),
            ["Unregister a@x.com from Chess Club?".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unregister_confirmed_reloads() {
        let api = FakeApi::with_list(json!({ "Chess Club": { "max_participants": 2, "participants": [] } }))
            .replying(ok_reply("Unregistered a@x.com from Chess Club"));
        let board = board(api, true);

        let report = board.unregister("Chess Club", "a@x.com").await.unwrap();

        assert_eq!(
            board.api.mutation_calls.borrow()[0],
            ("unregister".to_string(), "Chess Club".to_string(), "a@x.com".to_string())
        );
        assert_eq!(board.api.list_calls.get(), 1);
        assert_eq!(report.message, Message::success("Unregistered a@x.com from Chess Club"));
        assert_eq!(report.hide_after_ms, 4000);
        assert!(!report.reset_form);
        let refreshed = report.refreshed.unwrap();
        assert!(refreshed.activities()[0].participants.is_empty());
    }

    #[tokio::test]
    async fn test_unregister_not_found() {
        let api = FakeApi::with_list(chess_club()).replying(err_reply(404, "Participant not found"));
        let report = board(api, true).unregister("Chess Club", "z@x.com").await.unwrap();
        assert_eq!(report.message, Message::error("Participant not found"));
        assert_eq!(report.refreshed, None);
    }

    #[tokio::test]
    async fn test_unregister_transport_error() {
        let api = FakeApi::with_list(chess_club()).replying(Err(BoardError::Transport("offline".into())));
        let report = board(api, true).unregister("Chess Club", "a@x.com").await.unwrap();
        assert_eq!(report.message, Message::error("Failed to unregister. Please try again."));
    }
}
