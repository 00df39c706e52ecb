//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`friends`, `viewer`, etc.) so individual
//! components can depend on small focused models. Everything here is plain
//! data; Leptos signals wrap it at the page/app level.

pub mod dialog;
pub mod friend_form;
pub mod friends;
pub mod viewer;
