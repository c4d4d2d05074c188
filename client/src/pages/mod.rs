//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages are wrapped in `RequireRole` by the router.

pub mod dashboards;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod teachers;
pub mod unauthorized;
