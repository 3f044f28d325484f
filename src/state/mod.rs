//! Shared application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State lives in plain structs provided through Leptos context as
//! `RwSignal`s; transitions are plain methods so behavior stays testable
//! outside a browser.

pub mod auth;
