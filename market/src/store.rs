//! Named slices for every remote interaction the marketplace makes.
//!
//! Each `load_*`/`submit_*` method dispatches exactly one request into its
//! slice and reports whether the result was applied. Failures never escape
//! as errors: they land in the slice snapshot as an [`crate::ErrorInfo`].

use crate::http::ApiClient;
use crate::resource::{RemoteResource, Settlement, Status};
use crate::slice::Slice;
use crate::types::{Address, CurrentUser, EntryCommand, EntryKind, ProfileEntry, Question, Teacher, TeacherQuery};

#[derive(Debug)]
pub struct MarketStore {
    pub current_user: Slice<CurrentUser>,
    pub teachers: Slice<Vec<Teacher>>,
    pub teacher: Slice<Teacher>,
    pub questions: Slice<Vec<Question>>,
    pub addresses: Slice<Vec<Address>>,
    pub address_save: Slice<Address>,
    pub education: Slice<Vec<ProfileEntry>>,
    pub experience: Slice<Vec<ProfileEntry>>,
    pub entry_save: Slice<Option<ProfileEntry>>,
}

impl Default for MarketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_user: Slice::new("current_user"),
            teachers: Slice::new("teachers"),
            teacher: Slice::new("teacher"),
            questions: Slice::new("questions"),
            addresses: Slice::new("addresses"),
            address_save: Slice::new("address_save"),
            education: Slice::new("education"),
            experience: Slice::new("experience"),
            entry_save: Slice::new("entry_save"),
        }
    }

    pub async fn load_current_user(&self, api: &ApiClient) -> Settlement {
        self.current_user.dispatch(api.current_user()).await
    }

    pub async fn load_teachers(&self, api: &ApiClient, query: &TeacherQuery) -> Settlement {
        self.teachers.dispatch(api.teachers(query)).await
    }

    pub async fn load_teacher(&self, api: &ApiClient, id: i64) -> Settlement {
        self.teacher.dispatch(api.teacher(id)).await
    }

    pub async fn load_questions(&self, api: &ApiClient) -> Settlement {
        self.questions.dispatch(api.questions()).await
    }

    pub async fn load_addresses(&self, api: &ApiClient) -> Settlement {
        self.addresses.dispatch(api.addresses()).await
    }

    /// Create `address`; on success the address list is reloaded.
    pub async fn add_address(&self, api: &ApiClient, address: &Address) -> Settlement {
        let settlement = self.address_save.dispatch(api.create_address(address)).await;
        if settlement == Settlement::Applied && self.address_save.with(succeeded) {
            self.load_addresses(api).await;
        }
        settlement
    }

    /// The list slice for `kind`.
    #[must_use]
    pub fn entries(&self, kind: EntryKind) -> &Slice<Vec<ProfileEntry>> {
        match kind {
            EntryKind::Education => &self.education,
            EntryKind::Experience => &self.experience,
        }
    }

    pub async fn load_entries(&self, api: &ApiClient, kind: EntryKind) -> Settlement {
        self.entries(kind).dispatch(api.entries(kind)).await
    }

    /// Submit `command`; on success the list for its kind is reloaded so
    /// that slice reflects the server's copy.
    pub async fn submit_entry(&self, api: &ApiClient, command: &EntryCommand) -> Settlement {
        let settlement = self.entry_save.dispatch(api.submit_entry(command)).await;
        if settlement == Settlement::Applied && self.entry_save.with(succeeded) {
            self.load_entries(api, command.kind()).await;
        }
        settlement
    }
}

fn succeeded<T>(resource: &RemoteResource<T>) -> bool {
    resource.status() == Status::Succeeded
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
