//! Service layer for server-side domain logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route handlers stay thin and delegate validation and persistence here.

pub mod roles;
