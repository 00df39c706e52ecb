//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list sections, cards, and dialogs while reading viewer
//! and locale state from Leptos context providers.

pub mod dialog;
pub mod draft_fields;
pub mod friend_card;
pub mod friend_list;
