//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form or list orchestration and talks to the API through
//! the shared `ApiClient`. Role gating lives in `components::route_guard`, not
//! in the pages themselves.

pub mod admin_users;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
