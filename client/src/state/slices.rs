//! The named slices every page reads from, provided once at the root.

use leptos::prelude::*;
use market::types::{Address, CurrentUser, EntryCommand, EntryKind, ProfileEntry, Question, Teacher};
use market::{ApiClient, RemoteResource};

use super::remote::{RemoteSignal, reset};

#[derive(Clone, Copy, Debug)]
pub struct MarketSlices {
    pub current_user: RemoteSignal<CurrentUser>,
    pub teachers: RemoteSignal<Vec<Teacher>>,
    pub questions: RemoteSignal<Vec<Question>>,
    pub addresses: RemoteSignal<Vec<Address>>,
    pub address_save: RemoteSignal<Address>,
    pub education: RemoteSignal<Vec<ProfileEntry>>,
    pub experience: RemoteSignal<Vec<ProfileEntry>>,
    pub entry_save: RemoteSignal<Option<ProfileEntry>>,
    pub entry_delete: RemoteSignal<Option<ProfileEntry>>,
}

impl MarketSlices {
    pub fn new() -> Self {
        Self {
            current_user: RwSignal::new(RemoteResource::new()),
            teachers: RwSignal::new(RemoteResource::new()),
            questions: RwSignal::new(RemoteResource::new()),
            addresses: RwSignal::new(RemoteResource::new()),
            address_save: RwSignal::new(RemoteResource::new()),
            education: RwSignal::new(RemoteResource::new()),
            experience: RwSignal::new(RemoteResource::new()),
            entry_save: RwSignal::new(RemoteResource::new()),
            entry_delete: RwSignal::new(RemoteResource::new()),
        }
    }

    pub fn entries(&self, kind: EntryKind) -> RemoteSignal<Vec<ProfileEntry>> {
        match kind {
            EntryKind::Education => self.education,
            EntryKind::Experience => self.experience,
        }
    }

    /// Deletes settle apart from creates and updates so a delete never
    /// supersedes an open editor's save.
    pub fn command_slice(&self, command: &EntryCommand) -> RemoteSignal<Option<ProfileEntry>> {
        match command {
            EntryCommand::Delete { .. } => self.entry_delete,
            EntryCommand::Create { .. } | EntryCommand::Update { .. } => self.entry_save,
        }
    }

    /// Clear every slice so the next account never sees this one's data.
    pub fn clear(&self) {
        reset(self.current_user);
        reset(self.teachers);
        reset(self.questions);
        reset(self.addresses);
        reset(self.address_save);
        reset(self.education);
        reset(self.experience);
        reset(self.entry_save);
        reset(self.entry_delete);
    }
}

impl Default for MarketSlices {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear the local session and every slice. Only local state changes.
pub fn sign_out(api: &ApiClient, slices: MarketSlices) {
    if let Err(e) = api.logout() {
        leptos::logging::warn!("failed to clear session: {e}");
    }
    slices.clear();
}

#[cfg(test)]
#[path = "slices_test.rs"]
mod slices_test;
