//! Remote-resource state machine: `idle -> loading -> succeeded | failed`.
//!
//! DESIGN
//! ======
//! Every issue bumps a sequence number and returns a [`Ticket`]. Only the
//! ticket of the most recent issue may settle the resource; older tickets
//! are reported as [`Settlement::Superseded`] and change nothing. A slow
//! response to a stale request therefore can never overwrite a newer one.
//!
//! Invariants:
//! - `Succeeded` implies `error` is `None`.
//! - `Failed` keeps the previous `data` and sets `error`.
//! - Issuing clears `error` immediately; `data` survives until replaced.

use serde::Serialize;

use crate::error::ErrorInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Identifies one issued request against one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Whether a settlement was applied or dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteResource<T> {
    status: Status,
    data: Option<T>,
    error: Option<ErrorInfo>,
    #[serde(skip)]
    issued: u64,
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self { status: Status::Idle, data: None, error: None, issued: 0 }
    }
}

impl<T> RemoteResource<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Ticket of the most recent issue, if anything has been issued.
    #[must_use]
    pub fn latest(&self) -> Option<Ticket> {
        (self.issued > 0).then_some(Ticket(self.issued))
    }

    /// Mark a new request as in flight and return its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.status = Status::Loading;
        self.error = None;
        Ticket(self.issued)
    }

    /// Back to `Idle` with no data. Tickets issued before the reset are stale.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.status = Status::Idle;
        self.data = None;
        self.error = None;
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, ErrorInfo>) -> Settlement {
        if ticket.0 != self.issued {
            return Settlement::Superseded;
        }
        match outcome {
            Ok(data) => {
                self.status = Status::Succeeded;
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => {
                self.status = Status::Failed;
                self.error = Some(error);
            }
        }
        Settlement::Applied
    }
}

#[cfg(test)]
#[path = "resource_test.rs"]
mod tests;
