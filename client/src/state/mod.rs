//! Application state held in Leptos context.

pub mod auth;
