//! Networking modules for the content REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls (browser only) and `types` defines the JSON
//! schema shared with the server's `/api` routes.

pub mod api;
pub mod types;
