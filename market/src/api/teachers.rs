//! Teacher directory browsed by schools and recruiters.

use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{Teacher, TeacherQuery};

pub const TEACHERS_PATH: &str = "/api/teachers/";

impl ApiClient {
    /// `GET /api/teachers/` with `query` as URL parameters; absent fields are omitted.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the body is not a teacher list.
    pub async fn teachers(&self, query: &TeacherQuery) -> Result<Vec<Teacher>, ApiError> {
        self.send_json(self.authorized(Method::GET, TEACHERS_PATH).query(query)).await
    }

    /// `GET /api/teachers/{id}/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the teacher does not exist or the request fails.
    pub async fn teacher(&self, id: i64) -> Result<Teacher, ApiError> {
        self.send_json(self.authorized(Method::GET, &format!("{TEACHERS_PATH}{id}/"))).await
    }
}

#[cfg(test)]
#[path = "teachers_test.rs"]
mod tests;
