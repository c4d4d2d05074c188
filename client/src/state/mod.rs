//! Browser-side remote-state slices.
//!
//! DESIGN
//! ======
//! Each slice is an `RwSignal<RemoteResource<T>>` driven by the same
//! `begin`/`settle` pair the native slices use, so loading, failure and
//! stale-response handling match the CLI exactly.

pub mod remote;
pub mod slices;
