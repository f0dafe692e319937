//! State Management
//!
//! Board controller state and the fetched activity snapshot.

pub mod board;
pub mod snapshot;

pub use board::{
    provide_board_state, use_board, BoardState, DisableGuard, ListView, Notice, NoticeKind,
    LOAD_FAILURE_TEXT, NOTICE_DISMISS_MS,
};
pub use snapshot::{Activity, ActivityDetails, Snapshot, EMPTY_ROSTER_TEXT};
