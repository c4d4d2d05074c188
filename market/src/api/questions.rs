//! Question bank listing used by the teacher dashboard.

use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::Question;

pub const QUESTIONS_PATH: &str = "/api/questions/";

impl ApiClient {
    /// `GET /api/questions/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the body is not a question list.
    pub async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        self.send_json(self.authorized(Method::GET, QUESTIONS_PATH)).await
    }
}
