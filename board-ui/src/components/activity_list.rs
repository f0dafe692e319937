//! Activity List Component
//!
//! Activity cards with availability and rosters, rebuilt from the latest
//! snapshot every time it changes.

use leptos::*;

use crate::components::Loading;
use crate::state::{use_board, Activity, ListView, LOAD_FAILURE_TEXT};

/// Activity list container
#[component]
pub fn ActivityList() -> impl IntoView {
    let board = use_board();

    view! {
        <div id="activities-list">
            {move || match board.list.get() {
                ListView::Loading => view! { <Loading /> }.into_view(),
                ListView::Failed => view! { <p>{LOAD_FAILURE_TEXT}</p> }.into_view(),
                ListView::Loaded(snapshot) => snapshot
                    .activities
                    .into_iter()
                    .map(|activity| view! { <ActivityCard activity=activity /> })
                    .collect_view(),
            }}
        </div>
    }
}

/// Single activity card
#[component]
pub fn ActivityCard(activity: Activity) -> impl IntoView {
    let availability = activity.availability_label();
    let placeholder = activity.roster_placeholder();

    let roster = match placeholder {
        Some(text) => view! { <p class="no-participants">{text}</p> }.into_view(),
        None => view! {
            <ul class="participants-list">
                {activity
                    .details
                    .participants
                    .iter()
                    .map(|participant| view! {
                        <ParticipantRow
                            activity=activity.name.clone()
                            email=participant.clone()
                            label=activity.removal_label(participant)
                        />
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    };

    view! {
        <div class="activity-card">
            <h4>{activity.name.clone()}</h4>
            <p>{activity.details.description.clone()}</p>
            <p><strong>"Schedule:"</strong>" "{activity.details.schedule.clone()}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <div class="participants">
                <p class="participants-title">"Participants"</p>
                <div class="participants-content">{roster}</div>
            </div>
        </div>
    }
}

/// Roster entry with its removal control
#[component]
fn ParticipantRow(
    #[prop(into)]
    activity: String,
    #[prop(into)]
    email: String,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let board = use_board();
    let disabled = create_rw_signal(false);

    let display_email = email.clone();
    let on_click = move |_| {
        let activity = activity.clone();
        let email = email.clone();
        spawn_local(board.remove_participant(activity, email, disabled));
    };

    view! {
        <li>
            <span class="participant-email">{display_email}</span>
            <button
                type="button"
                class="participant-remove"
                aria-label=label
                disabled=move || disabled.get()
                on:click=on_click
            >
                "×"
            </button>
        </li>
    }
}
