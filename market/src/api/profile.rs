//! Education and experience entries on the signed-in teacher's profile.
//!
//! DESIGN
//! ======
//! Editors never mutate a local list as the record of truth. Each change is
//! an [`EntryCommand`] sent to the backend collection; the caller reloads or
//! patches its view from the server's answer.

use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{EntryCommand, EntryKind, ProfileEntry};

impl ApiClient {
    /// `GET /api/self/{kind}/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the body is not an entry list.
    pub async fn entries(&self, kind: EntryKind) -> Result<Vec<ProfileEntry>, ApiError> {
        self.send_json(self.authorized(Method::GET, &kind.collection_path())).await
    }

    /// Execute one entry command. Create and update return the stored entry;
    /// delete returns `None`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the server rejects the command.
    pub async fn submit_entry(&self, command: &EntryCommand) -> Result<Option<ProfileEntry>, ApiError> {
        tracing::debug!(kind = command.kind().as_str(), ?command, "submitting entry command");
        match command {
            EntryCommand::Create { kind, draft } => {
                let request = self.authorized(Method::POST, &kind.collection_path()).json(draft);
                self.send_json(request).await.map(Some)
            }
            EntryCommand::Update { kind, id, draft } => {
                let request = self.authorized(Method::PUT, &kind.item_path(*id)).json(draft);
                self.send_json(request).await.map(Some)
            }
            EntryCommand::Delete { kind, id } => {
                self.send_empty(self.authorized(Method::DELETE, &kind.item_path(*id))).await.map(|()| None)
            }
        }
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
