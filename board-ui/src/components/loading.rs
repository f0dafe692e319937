//! Loading Component

use leptos::*;

/// Placeholder shown until the first catalogue fetch resolves
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
            <p>"Loading activities..."</p>
        </div>
    }
}
