//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome; pages keep the submit and navigation
//! orchestration.

pub mod alert;
pub mod icons;
pub mod layout;
