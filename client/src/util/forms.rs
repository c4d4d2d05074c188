//! Form-value conversion shared by the auth pages and profile editors.
//!
//! DESIGN
//! ======
//! Inputs arrive as raw strings from `event_target_value`. These helpers only
//! trim and convert them into wire types; the backend decides what is valid.

use market::Role;
use market::types::{Address, Credentials, EntryDraft, ProfileEntry, ProfilePatch, RegisterForm, TeacherQuery};

/// Trimmed value, `None` when blank.
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub fn credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.trim().to_owned(), password: password.to_owned() }
}

/// # Errors
///
/// Returns a user-facing message when no known role was picked.
pub fn registration(name: &str, email: &str, password: &str, role: &str) -> Result<RegisterForm, &'static str> {
    match Role::parse(role) {
        Role::Unknown => Err("Choose whether you are a teacher, school or recruiter."),
        role => Ok(RegisterForm {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            password: password.to_owned(),
            role,
        }),
    }
}

/// Blank means "not set"; anything else must be a whole number.
///
/// # Errors
///
/// Returns a user-facing message when the value is not a year.
pub fn parse_year(raw: &str) -> Result<Option<i32>, &'static str> {
    match optional(raw) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| "Years must be whole numbers, e.g. 2019."),
    }
}

pub fn teacher_query(subject: &str, city: &str, search: &str) -> TeacherQuery {
    TeacherQuery { subject: optional(subject), city: optional(city), search: optional(search) }
}

pub fn min_experience(raw: &str) -> Option<u32> {
    optional(raw).and_then(|value| value.parse().ok())
}

/// Comma-separated subjects, blanks dropped.
pub fn subject_list(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(optional).collect()
}

/// Only fields the user filled in are sent; blank means "leave unchanged".
pub fn profile_patch(name: &str, bio: &str, city: &str, subjects: &str) -> ProfilePatch {
    let subjects = subject_list(subjects);
    ProfilePatch {
        name: optional(name),
        bio: optional(bio),
        city: optional(city),
        subjects: (!subjects.is_empty()).then_some(subjects),
    }
}

/// Raw field values of the education/experience editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub organization: String,
    pub start_year: String,
    pub end_year: String,
    pub description: String,
}

impl EntryForm {
    /// Prefill from a saved entry when editing.
    pub fn from_entry(entry: &ProfileEntry) -> Self {
        Self {
            title: entry.title.clone(),
            organization: entry.organization.clone(),
            start_year: entry.start_year.to_string(),
            end_year: entry.end_year.map(|y| y.to_string()).unwrap_or_default(),
            description: entry.description.clone().unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// Returns a user-facing message when a year field does not parse or the
    /// start year is missing.
    pub fn to_draft(&self) -> Result<EntryDraft, &'static str> {
        let start_year = parse_year(&self.start_year)?.ok_or("Enter a start year.")?;
        Ok(EntryDraft {
            title: self.title.trim().to_owned(),
            organization: self.organization.trim().to_owned(),
            start_year,
            end_year: parse_year(&self.end_year)?,
            description: optional(&self.description),
        })
    }
}

/// Raw field values of the add-address form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressForm {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl AddressForm {
    pub fn to_address(&self) -> Address {
        Address {
            id: None,
            line1: self.line1.trim().to_owned(),
            line2: optional(&self.line2),
            city: self.city.trim().to_owned(),
            state: optional(&self.state),
            postal_code: optional(&self.postal_code),
            country: optional(&self.country),
        }
    }
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;
