//! App Root Component
//!
//! Page layout, the board state provider, and the initial catalogue load.

use leptos::*;

use crate::components::{ActivityList, Notice, SignupForm};
use crate::state::provide_board_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let board = provide_board_state();

    // Initial load; later loads follow successful mutations
    spawn_local(board.load_and_render());

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <Notice />
            </section>
        </main>

        <footer>
            <p>"Mergington High School"</p>
        </footer>
    }
}
