//! Networking modules for the auth service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two credential POSTs; `types` defines the shared wire
//! schema both calls reuse.

pub mod api;
pub mod types;
