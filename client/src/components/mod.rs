//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render admin page chrome and actions while reading/writing
//! shared state from Leptos context providers.

pub mod admin_content_block;
pub mod flash_message_render;
pub mod new_role_button;
pub mod no_items;
pub mod spinner;
