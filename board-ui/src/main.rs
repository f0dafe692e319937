//! Activity Board
//!
//! Extracurricular activity signup page built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with schedule, availability and participant rosters
//! - Signup form with server-validated registration
//! - Per-participant removal
//! - Auto-dismissing notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All activity state is owned by the server; the page re-fetches
//! the full catalogue after every successful mutation.

use leptos::*;

use board_ui::app::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App /> });
}
