//! Login, registration, logout and current-user lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration are the only calls sent without credentials. Both
//! write the issued token into the injected session; logout only clears it
//! (the backend keeps no client-visible session to revoke).

use reqwest::Method;

use crate::error::ApiError;
use crate::guard::RoleResolver;
use crate::http::ApiClient;
use crate::session::SessionGrant;
use crate::types::{Credentials, CurrentUser, LoginResponse, ProfilePatch, RegisterForm, RegisterResponse};

pub const LOGIN_PATH: &str = "/api/login/";
pub const REGISTER_PATH: &str = "/api/register/";
pub const CURRENT_USER_PATH: &str = "/api/self/customuser/";

impl ApiClient {
    /// `POST /api/login/`, then persist the returned token.
    ///
    /// The email from `credentials` is stored when the response omits it.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the server rejects the credentials or the
    /// session cannot be written.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.send_json(self.anonymous(Method::POST, LOGIN_PATH).json(credentials)).await?;
        self.session().begin(&SessionGrant {
            token: response.token.clone(),
            email: response.email.clone().or_else(|| Some(credentials.email.clone())),
            name: response.name.clone(),
        })?;
        tracing::info!(email = %credentials.email, "signed in");
        Ok(response)
    }

    /// `POST /api/register/`. When the backend issues a token right away the
    /// new account is signed in; otherwise the caller still has to log in.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when registration is rejected or the session
    /// cannot be written.
    pub async fn register(&self, form: &RegisterForm) -> Result<RegisterResponse, ApiError> {
        let response: RegisterResponse = self.send_json(self.anonymous(Method::POST, REGISTER_PATH).json(form)).await?;
        if let Some(token) = response.token.as_deref().filter(|t| !t.trim().is_empty()) {
            self.session().begin(&SessionGrant {
                token: token.to_owned(),
                email: response.email.clone().or_else(|| Some(form.email.clone())),
                name: response.name.clone().or_else(|| Some(form.name.clone())),
            })?;
            tracing::info!(email = %form.email, role = %form.role, "registered and signed in");
        } else {
            tracing::info!(email = %form.email, role = %form.role, "registered");
        }
        Ok(response)
    }

    /// Drop the local session. Requests already in flight keep the token they
    /// were built with.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Storage`] if the session cannot be cleared.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session().end()?;
        tracing::info!("signed out");
        Ok(())
    }

    /// `GET /api/self/customuser/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.send_json(self.authorized(Method::GET, CURRENT_USER_PATH)).await
    }

    /// `PATCH /api/self/customuser/` with only the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the update is rejected.
    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<CurrentUser, ApiError> {
        self.send_json(self.authorized(Method::PATCH, CURRENT_USER_PATH).json(patch)).await
    }
}

#[async_trait::async_trait(?Send)]
impl RoleResolver for ApiClient {
    async fn resolve_current_user(&self) -> Result<CurrentUser, ApiError> {
        self.current_user().await
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
