//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clocks)
//! and pure rules (route gating, form validation) from page logic so they
//! can be tested without a DOM.

pub mod auth;
pub mod dates;
pub mod session_store;
pub mod validation;
