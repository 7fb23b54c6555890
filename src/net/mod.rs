//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend call and `types` defines the shared wire
//! schema used by both the browser client and the demo backend.

pub mod api;
pub mod types;
