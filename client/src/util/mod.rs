//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so form parsing and storage glue can be tested natively.

pub mod browser_store;
pub mod connect;
pub mod forms;
