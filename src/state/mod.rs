//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, `refresh`, ...) so components
//! depend on small focused models. Each model is plain Rust; `App` wraps
//! them in `RwSignal`s (or shares them directly, for the refresh bus) and
//! provides them as contexts.

pub mod auth;
pub mod currency;
pub mod dashboard;
pub mod fetch;
pub mod refresh;
pub mod toast;
