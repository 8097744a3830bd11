//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`roles`, `flash`) and handed to components as
//! `RwSignal`s through Leptos context, so each screen depends only on the
//! small model it reads.

pub mod flash;
pub mod roles;
