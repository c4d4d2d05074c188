//! Dispatch helpers for signal-backed slices.

use std::future::Future;

use leptos::prelude::*;
use market::{ApiError, ErrorInfo, RemoteResource, Settlement, Status};

/// A remote-state slice held in a reactive signal.
pub type RemoteSignal<T> = RwSignal<RemoteResource<T>>;

/// Issue `request` against `slice`. The slice flips to `loading`
/// synchronously; the response settles it from a local task.
pub fn dispatch<T, F>(slice: RemoteSignal<T>, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    dispatch_then(slice, request, |_| {});
}

/// Like [`dispatch`], then run `then` with the new status if this request's
/// settlement was applied. Nothing runs for a superseded response.
pub fn dispatch_then<T, F, C>(slice: RemoteSignal<T>, request: F, then: C)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
    C: FnOnce(Status) + 'static,
{
    let Some(ticket) = slice.try_update(RemoteResource::begin) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let outcome = request.await.map_err(ErrorInfo::from);
        if let Err(error) = &outcome {
            leptos::logging::warn!("request failed: {} ({})", error.message, error.code);
        }
        let settled = slice.try_update(|resource| (resource.settle(ticket, outcome), resource.status()));
        match settled {
            Some((Settlement::Applied, status)) => then(status),
            Some((Settlement::Superseded, _)) => {
                leptos::logging::log!("stale response dropped (ticket {})", ticket.sequence());
            }
            None => {}
        }
    });
}

/// Reset `slice` to idle, invalidating anything still in flight.
pub fn reset<T: Send + Sync + 'static>(slice: RemoteSignal<T>) {
    slice.try_update(RemoteResource::reset);
}

/// Human-readable status line for a slice, `None` when there is nothing to say.
pub fn status_line(status: Status, error: Option<&ErrorInfo>) -> Option<String> {
    match status {
        Status::Loading => Some("Loading...".to_owned()),
        Status::Failed => Some(error.map_or_else(|| ErrorInfo::fallback().message, |e| e.message.clone())),
        Status::Idle | Status::Succeeded => None,
    }
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;
