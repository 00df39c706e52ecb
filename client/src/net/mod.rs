//! Networking modules for the remote friends API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the wire schema shared by
//! state and components.

pub mod api;
pub mod types;
