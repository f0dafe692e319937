//! Board State
//!
//! The page controller: reactive state for the activity list, the signup
//! form and the notification, plus the three operations that drive them
//! (load, signup, removal). Constructed once at mount and shared through
//! Leptos context. Every field is a signal or stored value, so the state
//! is `Copy` and moves freely into event handlers and spawned tasks.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::future::Future;

use crate::api::{self, RequestError, REMOVAL_FAILURE, SIGNUP_FAILURE};
use crate::state::snapshot::Snapshot;

/// How long a notification stays visible
pub const NOTICE_DISMISS_MS: u32 = 5_000;

/// Shown in place of the list when the catalogue cannot be loaded
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

/// What the activity list area currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    /// Initial fetch still pending
    Loading,
    /// Latest successfully fetched snapshot
    Loaded(Snapshot),
    /// Latest fetch failed
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A transient notification
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

/// Page controller state
#[derive(Clone, Copy)]
pub struct BoardState {
    /// Activity list display
    pub list: RwSignal<ListView>,
    /// Selector options, rebuilt only from a successfully fetched snapshot
    pub activity_options: RwSignal<Vec<String>>,
    /// Signup form: email input
    pub email: RwSignal<String>,
    /// Signup form: selected activity name ("" when none)
    pub selected_activity: RwSignal<String>,
    /// Currently visible notification
    pub notice: RwSignal<Option<Notice>>,
    /// Pending auto-dismiss timer; replacing it drops and cancels the old one
    notice_timer: StoredValue<Option<Timeout>>,
    dismiss_ms: u32,
}

impl BoardState {
    pub fn new() -> Self {
        Self::with_dismiss_ms(NOTICE_DISMISS_MS)
    }

    /// State with a custom notification lifetime
    pub fn with_dismiss_ms(dismiss_ms: u32) -> Self {
        Self {
            list: create_rw_signal(ListView::Loading),
            activity_options: create_rw_signal(Vec::new()),
            email: create_rw_signal(String::new()),
            selected_activity: create_rw_signal(String::new()),
            notice: create_rw_signal(None),
            notice_timer: store_value(None),
            dismiss_ms,
        }
    }

    /// Fetch the catalogue and rebuild the list and selector from it.
    ///
    /// On failure only the list degrades; the selector keeps its options.
    pub async fn load_and_render(self) {
        match api::fetch_activities().await {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(e) => self.apply_load_failure(&e),
        }
    }

    /// Replace the displayed snapshot wholesale
    pub fn apply_snapshot(self, snapshot: Snapshot) {
        self.activity_options
            .set(snapshot.names().map(str::to_string).collect());
        self.list.set(ListView::Loaded(snapshot));
    }

    pub fn apply_load_failure(self, error: &RequestError) {
        web_sys::console::error_1(&format!("Error fetching activities: {}", error).into());
        self.list.set(ListView::Failed);
    }

    /// Register `email` for `activity`. Reloads the list only on success.
    pub async fn submit_signup(self, email: String, activity: String) {
        let outcome = api::signup(&activity, &email).await;
        if self.settle_signup(outcome) {
            self.load_and_render().await;
        }
    }

    /// Notify the outcome of a signup request. Returns true when the list
    /// should be reloaded.
    pub fn settle_signup(self, outcome: Result<String, RequestError>) -> bool {
        match outcome {
            Ok(message) => {
                self.show_notice(message, NoticeKind::Success);
                self.reset_form();
                true
            }
            Err(e) => {
                if e.is_transport() {
                    web_sys::console::error_1(&format!("Error signing up: {}", e).into());
                }
                self.show_notice(e.notice_text(&SIGNUP_FAILURE), NoticeKind::Error);
                false
            }
        }
    }

    /// Remove `email` from `activity`.
    ///
    /// `control` is the disabled flag of the clicked removal button. It is
    /// set as soon as this is called, before the request is polled, and
    /// cleared however the request ends.
    pub fn remove_participant(
        self,
        activity: String,
        email: String,
        control: RwSignal<bool>,
    ) -> impl Future<Output = ()> {
        let guard = DisableGuard::engage(control);

        async move {
            let _enabled_on_exit = guard;

            let outcome = api::unregister(&activity, &email).await;
            if self.settle_removal(outcome) {
                self.load_and_render().await;
            }
        }
    }

    /// Notify the outcome of a removal request. Returns true when the list
    /// should be reloaded.
    pub fn settle_removal(self, outcome: Result<String, RequestError>) -> bool {
        match outcome {
            Ok(message) => {
                self.show_notice(message, NoticeKind::Success);
                true
            }
            Err(e) => {
                if e.is_transport() {
                    web_sys::console::error_1(
                        &format!("Error removing participant: {}", e).into(),
                    );
                }
                self.show_notice(e.notice_text(&REMOVAL_FAILURE), NoticeKind::Error);
                false
            }
        }
    }

    /// Show a notification, superseding any current one and restarting the dismiss countdown
    pub fn show_notice(self, text: impl Into<String>, kind: NoticeKind) {
        self.notice.set(Some(Notice {
            text: text.into(),
            kind,
        }));

        let notice = self.notice;
        let timer = Timeout::new(self.dismiss_ms, move || {
            notice.try_set(None);
        });
        self.notice_timer.set_value(Some(timer));
    }

    /// Clear the signup form inputs
    pub fn reset_form(self) {
        self.email.set(String::new());
        self.selected_activity.set(String::new());
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds a control disabled until dropped
pub struct DisableGuard {
    control: RwSignal<bool>,
}

impl DisableGuard {
    pub fn engage(control: RwSignal<bool>) -> Self {
        control.set(true);
        Self { control }
    }
}

impl Drop for DisableGuard {
    fn drop(&mut self) {
        // The row may already be gone after a reload
        self.control.try_set(false);
    }
}

/// Provide board state to the component tree
pub fn provide_board_state() -> BoardState {
    let state = BoardState::new();
    provide_context(state);
    state
}

/// Board state from context
pub fn use_board() -> BoardState {
    expect_context::<BoardState>()
}
