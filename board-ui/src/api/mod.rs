//! API access

pub mod client;

pub use client::{
    fetch_activities, get_api_base, signup, signup_path, unregister, FailureText, RequestError,
    REMOVAL_FAILURE, SIGNUP_FAILURE,
};
