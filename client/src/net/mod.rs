//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the role requests, `http` defines the request error and its
//! humanized form, and `types` holds the wire envelopes.

pub mod api;
pub mod http;
pub mod types;
