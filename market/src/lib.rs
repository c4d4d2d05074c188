//! Client-side core for the HireTeach marketplace.
//!
//! This crate owns everything the browser UI and the CLI share: the injected
//! session provider, the REST client and its typed endpoints, the
//! remote-resource state machine behind every data slice, and the role-gated
//! route guard.
//!
//! DESIGN
//! ======
//! The backend is an external REST service. Nothing here validates payloads
//! ahead of the server; responses are stored verbatim and every failure is
//! collapsed into an [`ErrorInfo`] at the slice boundary.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod resource;
pub mod session;
pub mod slice;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{AuthScheme, ClientConfig, ConfigError};
pub use error::{ApiError, ErrorBody, ErrorInfo};
pub use guard::{AuthorizationDecision, GuardState, RoleGuard, RoleResolver};
pub use http::ApiClient;
pub use resource::{RemoteResource, Settlement, Status, Ticket};
pub use session::{FileStore, KeyValueStore, MemoryStore, Session, SessionGrant, StoreError};
pub use slice::Slice;
pub use store::MarketStore;
pub use types::Role;
