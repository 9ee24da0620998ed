//! Presentational Dioxus components for the student roster.

pub mod components;

pub use components::*;
