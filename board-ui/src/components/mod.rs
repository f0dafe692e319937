//! UI Components
//!
//! Leptos components for the activity board page.

pub mod activity_list;
pub mod loading;
pub mod notice;
pub mod signup_form;

pub use activity_list::{ActivityCard, ActivityList};
pub use loading::Loading;
pub use notice::Notice;
pub use signup_form::SignupForm;
