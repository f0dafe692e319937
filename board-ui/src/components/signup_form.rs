//! Signup Form Component
//!
//! Email input plus an activity selector fed from the latest snapshot.

use leptos::*;

use crate::state::use_board;

/// Signup form component
#[component]
pub fn SignupForm() -> impl IntoView {
    let board = use_board();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = board.email.get_untracked();
        let activity = board.selected_activity.get_untracked();

        spawn_local(board.submit_signup(email, activity));
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || board.email.get()
                    on:input=move |ev| board.email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| board.selected_activity.set(event_target_value(&ev))
                    prop:value=move || board.selected_activity.get()
                >
                    <option value="">"-- Select an activity --"</option>
                    {move || {
                        board.activity_options.get()
                            .into_iter()
                            .map(|name| view! {
                                <option value=name.clone()>{name}</option>
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
