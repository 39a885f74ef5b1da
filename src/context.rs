//! Board Context
//!
//! The view-controller's handles, built once in `App` and provided via the
//! Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::api::HttpApi;
use crate::board::{ActionReport, ActivityBoard, Confirmer, ListState};
use crate::message::{Message, MessageSlot};

/// `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirmer for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(prompt) {
            Ok(answer) => answer,
            Err(e) => {
                web_sys::console::error_2(&JsValue::from_str("[BOARD] confirm() unavailable:"), &e);
                false
            }
        }
    }
}

pub type Board = ActivityBoard<HttpApi, BrowserConfirm>;

#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Activities list area - read
    pub list: ReadSignal<ListState>,
    /// Activities list area - write
    set_list: WriteSignal<ListState>,
    /// Message slot - read
    pub message: ReadSignal<MessageSlot>,
    /// Message slot - write
    set_message: WriteSignal<MessageSlot>,
    /// `#email` field
    pub email: RwSignal<String>,
    /// `#activity` select value
    pub selected: RwSignal<String>,
    /// Pending auto-hide; replacing it drops (cancels) the old one
    hide_timer: StoredValue<Option<Timeout>, LocalStorage>,
    board: StoredValue<Board>,
}

impl BoardContext {
    pub fn new(board: Board) -> Self {
        let (list, set_list) = signal(ListState::Loading);
        let (message, set_message) = signal(MessageSlot::default());
        Self {
            list,
            set_list,
            message,
            set_message,
            email: RwSignal::new(String::new()),
            selected: RwSignal::new(String::new()),
            hide_timer: StoredValue::new_local(None),
            board: StoredValue::new(board),
        }
    }

    pub fn board(&self) -> Board {
        self.board.get_value()
    }

    /// Fetch the collection and replace the list
    pub fn load(&self) {
        let ctx = *self;
        spawn_local(async move {
            let state = ctx.board().load_activities().await;
            ctx.replace_list(state);
        });
    }

    pub fn replace_list(&self, state: ListState) {
        self.set_list.set(state);
    }

    pub fn signup(&self, activity: String, email: String) {
        let ctx = *self;
        spawn_local(async move {
            let report = ctx.board().signup(&activity, &email).await;
            ctx.apply(report);
        });
    }

    pub fn unregister(&self, activity: String, email: String) {
        let ctx = *self;
        spawn_local(async move {
            if let Some(report) = ctx.board().unregister(&activity, &email).await {
                ctx.apply(report);
            }
        });
    }

    fn apply(&self, report: ActionReport) {
        let (message, hide_after_ms) = self.settle(report);
        self.show_message(message, hide_after_ms);
    }

    /// Form and list side of a report; returns the message still to show
    fn settle(&self, report: ActionReport) -> (Message, u32) {
        if report.reset_form {
            self.email.set(String::new());
            self.selected.set(String::new());
        }
        if let Some(state) = report.refreshed {
            self.set_list.set(state);
        }
        (report.message, report.hide_after_ms)
    }

    fn show_message(&self, message: Message, hide_after_ms: u32) {
        let mut generation = 0;
        self.set_message.update(|slot| generation = slot.show(message));

        let set_message = self.set_message;
        let timer = Timeout::new(hide_after_ms, move || {
            set_message.update(|slot| {
                slot.hide(generation);
            });
        });
        self.hide_timer.set_value(Some(timer));
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
