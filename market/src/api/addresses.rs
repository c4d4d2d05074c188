//! Saved addresses for school accounts.

use reqwest::Method;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::Address;

pub const ADDRESSES_PATH: &str = "/api/addresses/";

impl ApiClient {
    /// `GET /api/addresses/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the body is not an address list.
    pub async fn addresses(&self) -> Result<Vec<Address>, ApiError> {
        self.send_json(self.authorized(Method::GET, ADDRESSES_PATH)).await
    }

    /// `POST /api/addresses/`. The `id` of `address` is ignored by the server.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the server rejects the address.
    pub async fn create_address(&self, address: &Address) -> Result<Address, ApiError> {
        self.send_json(self.authorized(Method::POST, ADDRESSES_PATH).json(address)).await
    }
}

#[cfg(test)]
#[path = "addresses_test.rs"]
mod tests;
