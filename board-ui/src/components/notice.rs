//! Notice Component
//!
//! Shows the current success or error notification.

use leptos::*;

use crate::state::{use_board, NoticeKind};

/// Notification area. Hidden when there is nothing to show.
#[component]
pub fn Notice() -> impl IntoView {
    let board = use_board();

    let class = move || match board.notice.get() {
        Some(notice) => format!("message {}", notice.kind.class()),
        None => "message hidden".to_string(),
    };

    view! {
        <div id="message" class=class role="status">
            {move || board.notice.get().map(|notice| view! {
                <NoticeIcon kind=notice.kind />
                <span>{notice.text}</span>
            })}
        </div>
    }
}

#[component]
fn NoticeIcon(kind: NoticeKind) -> impl IntoView {
    let icon = match kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✕",
    };

    view! { <span class="message-icon" aria-hidden="true">{icon}</span> }
}
