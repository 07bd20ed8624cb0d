//! Sign-in, registration, user listing, and the current user's contact.

use super::ApiClient;
use crate::errors::AppResult;
use crate::models::user::{Contact, TokenResponse, User, UserCreate};

impl ApiClient {
    /// Exchange credentials for a bearer token (`POST /token`,
    /// form-encoded per the OAuth2 password flow)
    pub fn sign_in(&self, email: &str, password: &str) -> AppResult<TokenResponse> {
        let params = [("username", email), ("password", password)];
        Ok(self.post_form("/token", &params)?.json()?)
    }

    pub fn register(&self, payload: &UserCreate) -> AppResult<User> {
        Ok(self.post_json("/users/", payload)?.json()?)
    }

    pub fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.get("/users/")?.json()?)
    }

    pub fn my_contact(&self) -> AppResult<Contact> {
        Ok(self.get("/users/me/contact")?.json()?)
    }
}
