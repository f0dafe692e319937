//! Browser tests for the board controller and its components.
//!
//! Run with `wasm-pack test --headless --firefox board-ui`.

#![cfg(target_arch = "wasm32")]

use board_ui::api::client::API_BASE_STORAGE_KEY;
use board_ui::api::RequestError;
use board_ui::components::{ActivityList, SignupForm};
use board_ui::state::{
    BoardState, DisableGuard, ListView, Notice, NoticeKind, Snapshot, EMPTY_ROSTER_TEXT,
    LOAD_FAILURE_TEXT,
};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Closed port; requests fail at the network level
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

const CHESS_FIXTURE: &str = r#"{"Chess Club": {"description":"Play chess","schedule":"Fri 3pm","max_participants":10,"participants":["a@x.com"]}}"#;

fn fixture(json: &str) -> Snapshot {
    serde_json::from_str(json).unwrap()
}

/// Point the API client at `url`, or back at the page origin
fn set_api_base(url: Option<&str>) {
    let storage = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    match url {
        Some(url) => storage.set_item(API_BASE_STORAGE_KEY, url).unwrap(),
        None => storage.remove_item(API_BASE_STORAGE_KEY).unwrap(),
    }
}

/// Mount the list and form for `board` into a fresh container
fn mount_board(board: BoardState) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    mount_to(container.clone(), move || {
        provide_context(board);
        view! {
            <ActivityList />
            <SignupForm />
        }
    });

    container
}

#[wasm_bindgen_test]
async fn newer_notice_cancels_pending_dismissal() {
    let board = BoardState::with_dismiss_ms(60);

    board.show_notice("first", NoticeKind::Success);
    TimeoutFuture::new(40).await;
    board.show_notice("second", NoticeKind::Error);

    // Past the first notice's deadline
    TimeoutFuture::new(40).await;
    assert_eq!(
        board.notice.get_untracked(),
        Some(Notice {
            text: "second".to_string(),
            kind: NoticeKind::Error,
        })
    );

    // Past the second notice's deadline
    TimeoutFuture::new(60).await;
    assert_eq!(board.notice.get_untracked(), None);
}

#[wasm_bindgen_test]
fn disable_guard_restores_control() {
    let control = create_rw_signal(false);

    let guard = DisableGuard::engage(control);
    assert!(control.get_untracked());

    drop(guard);
    assert!(!control.get_untracked());
}

#[wasm_bindgen_test]
fn removal_disables_control_before_request_runs() {
    let board = BoardState::new();
    let clicked = create_rw_signal(false);
    let other = create_rw_signal(false);

    let pending = board.remove_participant(
        "Chess Club".to_string(),
        "a@x.com".to_string(),
        clicked,
    );
    assert!(clicked.get_untracked());
    assert!(!other.get_untracked());

    // Abandoned requests still re-enable the control
    drop(pending);
    assert!(!clicked.get_untracked());
}

#[wasm_bindgen_test]
fn chess_club_scenario_renders_card_and_option() {
    let board = BoardState::new();
    let container = mount_board(board);

    board.apply_snapshot(fixture(CHESS_FIXTURE));

    let text = container.text_content().unwrap_or_default();
    assert!(text.contains("Chess Club"));
    assert!(text.contains("9 spots left"));

    let rows = container.query_selector_all(".participants-list li").unwrap();
    assert_eq!(rows.length(), 1);

    let email = container.query_selector(".participant-email").unwrap().unwrap();
    assert_eq!(email.text_content().as_deref(), Some("a@x.com"));

    let button = container
        .query_selector("button.participant-remove")
        .unwrap()
        .unwrap();
    assert_eq!(
        button.get_attribute("aria-label").as_deref(),
        Some("Remove a@x.com from Chess Club")
    );

    assert!(container
        .query_selector("option[value='Chess Club']")
        .unwrap()
        .is_some());
}

#[wasm_bindgen_test]
fn empty_roster_shows_placeholder_without_list() {
    let board = BoardState::new();
    let container = mount_board(board);

    board.apply_snapshot(fixture(
        r#"{"Art Club": {"description":"Paint","schedule":"Thu","max_participants":5,"participants":[]}}"#,
    ));

    let placeholder = container.query_selector(".no-participants").unwrap().unwrap();
    assert_eq!(placeholder.text_content().as_deref(), Some(EMPTY_ROSTER_TEXT));
    assert!(container
        .query_selector(".participants-list")
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
fn load_failure_keeps_selector_options() {
    let board = BoardState::new();
    let container = mount_board(board);

    board.apply_snapshot(fixture(CHESS_FIXTURE));
    board.apply_load_failure(&RequestError::Transport("Network error".to_string()));

    assert_eq!(board.list.get_untracked(), ListView::Failed);
    assert_eq!(
        board.activity_options.get_untracked(),
        vec!["Chess Club".to_string()]
    );

    let text = container.text_content().unwrap_or_default();
    assert!(text.contains(LOAD_FAILURE_TEXT));
    assert!(container
        .query_selector("option[value='Chess Club']")
        .unwrap()
        .is_some());
}

#[wasm_bindgen_test]
fn reload_replaces_snapshot_wholesale() {
    let board = BoardState::new();
    let container = mount_board(board);

    board.apply_snapshot(fixture(CHESS_FIXTURE));
    board.apply_snapshot(fixture(
        r#"{"Art Club": {"description":"Paint","schedule":"Thu","max_participants":5,"participants":["b@x.com"]}}"#,
    ));

    let text = container.text_content().unwrap_or_default();
    assert!(!text.contains("Chess Club"));
    assert!(text.contains("Art Club"));
    assert!(text.contains("4 spots left"));
    assert_eq!(board.activity_options.get_untracked(), vec!["Art Club".to_string()]);
}

#[wasm_bindgen_test]
fn reset_form_clears_inputs() {
    let board = BoardState::new();
    board.email.set("b@x.com".to_string());
    board.selected_activity.set("Chess Club".to_string());

    board.reset_form();

    assert!(board.email.get_untracked().is_empty());
    assert!(board.selected_activity.get_untracked().is_empty());
}

#[wasm_bindgen_test]
async fn removal_transport_failure_reenables_control_without_reload() {
    set_api_base(Some(UNREACHABLE_API));
    let board = BoardState::new();
    board.apply_snapshot(fixture(CHESS_FIXTURE));
    let control = create_rw_signal(false);

    board
        .remove_participant("Chess Club".to_string(), "a@x.com".to_string(), control)
        .await;
    set_api_base(None);

    assert!(!control.get_untracked());
    assert_eq!(
        board.notice.get_untracked(),
        Some(Notice {
            text: "Failed to remove participant. Please try again.".to_string(),
            kind: NoticeKind::Error,
        })
    );
    assert_eq!(
        board.list.get_untracked(),
        ListView::Loaded(fixture(CHESS_FIXTURE))
    );
}

#[wasm_bindgen_test]
async fn signup_transport_failure_keeps_list_and_form() {
    set_api_base(Some(UNREACHABLE_API));
    let board = BoardState::new();
    board.apply_snapshot(fixture(CHESS_FIXTURE));
    board.email.set("b@x.com".to_string());
    board.selected_activity.set("Chess Club".to_string());

    board
        .submit_signup("b@x.com".to_string(), "Chess Club".to_string())
        .await;
    set_api_base(None);

    assert_eq!(
        board.notice.get_untracked(),
        Some(Notice {
            text: "Failed to sign up. Please try again.".to_string(),
            kind: NoticeKind::Error,
        })
    );
    assert_eq!(
        board.list.get_untracked(),
        ListView::Loaded(fixture(CHESS_FIXTURE))
    );
    assert_eq!(board.email.get_untracked(), "b@x.com");
}

#[wasm_bindgen_test]
fn rejected_signup_shows_detail_and_skips_reload() {
    let board = BoardState::new();
    board.email.set("a@x.com".to_string());

    let reload = board.settle_signup(Err(RequestError::Rejected {
        detail: Some("Already signed up".to_string()),
    }));

    assert!(!reload);
    assert_eq!(
        board.notice.get_untracked(),
        Some(Notice {
            text: "Already signed up".to_string(),
            kind: NoticeKind::Error,
        })
    );
    assert_eq!(board.email.get_untracked(), "a@x.com");
}

#[wasm_bindgen_test]
fn accepted_signup_resets_form_and_reloads() {
    let board = BoardState::new();
    board.email.set("b@x.com".to_string());
    board.selected_activity.set("Chess Club".to_string());

    let reload = board.settle_signup(Ok("Signed up b@x.com for Chess Club".to_string()));

    assert!(reload);
    assert_eq!(
        board.notice.get_untracked().map(|n| n.kind),
        Some(NoticeKind::Success)
    );
    assert!(board.email.get_untracked().is_empty());
    assert!(board.selected_activity.get_untracked().is_empty());
}

#[wasm_bindgen_test]
fn rejected_removal_without_detail_uses_fallback() {
    let board = BoardState::new();

    let reload = board.settle_removal(Err(RequestError::Rejected { detail: None }));

    assert!(!reload);
    assert_eq!(
        board.notice.get_untracked(),
        Some(Notice {
            text: "Failed to remove participant.".to_string(),
            kind: NoticeKind::Error,
        })
    );
}
