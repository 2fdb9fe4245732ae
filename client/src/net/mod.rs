//! Networking modules for the remote user-management API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the bearer/401 plumbing, and `types` defines
//! the wire schema.

pub mod api;
pub mod types;
