//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from the `AuthContext` provider and never
//! touch storage directly.

pub mod navbar;
pub mod route_guard;
