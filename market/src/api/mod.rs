//! Typed REST endpoints, one module per backend resource.
//!
//! Every function is an inherent method on [`crate::ApiClient`] so callers
//! hold one client and get one auth convention.

pub mod addresses;
pub mod auth;
pub mod profile;
pub mod questions;
pub mod teachers;
