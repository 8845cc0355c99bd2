//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic, persistence, and third-party calls so
//! route handlers can stay focused on protocol translation and auth plumbing.

pub mod content;
pub mod mail;
pub mod media;
pub mod session;
