//! Named remote-state slice for native (non-browser) consumers.
//!
//! DESIGN
//! ======
//! A [`Slice`] owns one [`RemoteResource`] behind a `tokio::sync::watch`
//! channel: `dispatch` issues synchronously, awaits the request and settles
//! with its ticket, and subscribers see each applied transition. The browser
//! client drives the same `begin`/`settle` pair through reactive signals
//! instead.

use std::future::Future;

use tokio::sync::watch;

use crate::error::{ApiError, ErrorInfo};
use crate::resource::{RemoteResource, Settlement, Ticket};

pub struct Slice<T> {
    name: &'static str,
    state: watch::Sender<RemoteResource<T>>,
}

impl<T> std::fmt::Debug for Slice<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slice").field("name", &self.name).field("status", &self.state.borrow().status()).finish()
    }
}

impl<T> Slice<T> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        let (state, _) = watch::channel(RemoteResource::new());
        Self { name, state }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RemoteResource<T>> {
        self.state.subscribe()
    }

    /// Borrow the current snapshot without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&RemoteResource<T>) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Mark a request as issued: `loading`, error cleared, new ticket.
    pub fn begin(&self) -> Ticket {
        let mut ticket = Ticket::default();
        self.state.send_modify(|resource| ticket = resource.begin());
        tracing::debug!(slice = self.name, ticket = ticket.sequence(), "request issued");
        ticket
    }

    /// Apply an outcome; stale tickets are dropped without notifying subscribers.
    pub fn settle(&self, ticket: Ticket, outcome: Result<T, ErrorInfo>) -> Settlement {
        let failure = outcome.as_ref().err().cloned();
        let mut settlement = Settlement::Superseded;
        self.state.send_if_modified(|resource| {
            settlement = resource.settle(ticket, outcome);
            settlement == Settlement::Applied
        });
        match (settlement, failure) {
            (Settlement::Superseded, _) => {
                tracing::debug!(slice = self.name, ticket = ticket.sequence(), "stale response dropped");
            }
            (Settlement::Applied, Some(error)) => {
                tracing::warn!(slice = self.name, code = %error.code, message = %error.message, "request failed");
            }
            (Settlement::Applied, None) => {}
        }
        settlement
    }

    /// Issue `request` and settle the slice with its result.
    ///
    /// The loading transition happens when `dispatch` is called, not when the
    /// returned future is first polled.
    pub fn dispatch<'a, F>(&'a self, request: F) -> impl Future<Output = Settlement> + 'a
    where
        F: Future<Output = Result<T, ApiError>> + 'a,
    {
        let ticket = self.begin();
        async move {
            let outcome = request.await.map_err(ErrorInfo::from);
            self.settle(ticket, outcome)
        }
    }
}

impl<T: Clone> Slice<T> {
    #[must_use]
    pub fn snapshot(&self) -> RemoteResource<T> {
        self.state.borrow().clone()
    }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod tests;
