//! Wire types for the marketplace REST API.
//!
//! Response types are lenient: optional fields default and unknown fields are
//! ignored, because the backend owns the schema.

use serde::{Deserialize, Serialize};

// =============================================================================
// ROLES & USERS
// =============================================================================

/// Account role. Any role string the client does not know becomes
/// [`Role::Unknown`], which never matches an allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Teacher,
    School,
    Recruiter,
    Unknown,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Teacher, Role::School, Role::Recruiter];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::School => "school",
            Self::Recruiter => "recruiter",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "teacher" => Self::Teacher,
            "school" => Self::School,
            "recruiter" => Self::Recruiter,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record returned by `GET /api/self/customuser/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Partial update for `PATCH /api/self/customuser/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Login response. Older backend builds name the token `access` or
/// `access_token`; all three are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access", alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, alias = "access", alias = "access_token")]
    pub token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

// =============================================================================
// TEACHERS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Server-side query parameters for `GET /api/teachers/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeacherQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// In-memory filter applied to an already fetched teacher list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherFilter {
    /// Case-insensitive substring over name, bio and subjects.
    pub search: String,
    pub subject: String,
    pub city: String,
    pub min_experience: Option<u32>,
}

impl TeacherFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.subject.trim().is_empty()
            && self.city.trim().is_empty()
            && self.min_experience.is_none()
    }

    #[must_use]
    pub fn matches(&self, teacher: &Teacher) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let in_name = teacher.name.to_lowercase().contains(&search);
            let in_bio = teacher.bio.as_deref().is_some_and(|b| b.to_lowercase().contains(&search));
            let in_subjects = teacher.subjects.iter().any(|s| s.to_lowercase().contains(&search));
            if !(in_name || in_bio || in_subjects) {
                return false;
            }
        }

        let subject = self.subject.trim();
        if !subject.is_empty() && !teacher.subjects.iter().any(|s| s.trim().eq_ignore_ascii_case(subject)) {
            return false;
        }

        let city = self.city.trim();
        if !city.is_empty() && !teacher.city.as_deref().is_some_and(|c| c.trim().eq_ignore_ascii_case(city)) {
            return false;
        }

        match self.min_experience {
            Some(min) => teacher.experience_years.unwrap_or(0) >= min,
            None => true,
        }
    }

    /// Matching teachers in input order.
    #[must_use]
    pub fn apply<'a>(&self, teachers: &'a [Teacher]) -> Vec<&'a Teacher> {
        teachers.iter().filter(|t| self.matches(t)).collect()
    }
}

// =============================================================================
// QUESTIONS & ADDRESSES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

// =============================================================================
// PROFILE ENTRIES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Education,
    Experience,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Education, EntryKind::Experience];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Experience => "experience",
        }
    }

    #[must_use]
    pub fn collection_path(self) -> String {
        format!("/api/self/{}/", self.as_str())
    }

    #[must_use]
    pub fn item_path(self, id: i64) -> String {
        format!("/api/self/{}/{id}/", self.as_str())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "education" => Ok(Self::Education),
            "experience" => Ok(Self::Experience),
            other => Err(format!("unknown entry kind '{other}' (expected 'education' or 'experience')")),
        }
    }
}

/// A saved education or experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub id: i64,
    pub title: String,
    pub organization: String,
    pub start_year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body sent when creating or replacing an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub organization: String,
    pub start_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&ProfileEntry> for EntryDraft {
    fn from(entry: &ProfileEntry) -> Self {
        Self {
            title: entry.title.clone(),
            organization: entry.organization.clone(),
            start_year: entry.start_year,
            end_year: entry.end_year,
            description: entry.description.clone(),
        }
    }
}

/// One change to a backend-owned profile entry collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryCommand {
    Create { kind: EntryKind, draft: EntryDraft },
    Update { kind: EntryKind, id: i64, draft: EntryDraft },
    Delete { kind: EntryKind, id: i64 },
}

impl EntryCommand {
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Create { kind, .. } | Self::Update { kind, .. } | Self::Delete { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
