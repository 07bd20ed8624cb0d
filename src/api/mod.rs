//! Blocking HTTP client for the organisation REST API.
//!
//! Every authenticated call attaches `Authorization: Bearer <token>`. Non-2xx
//! responses are mapped to `AppError::Api`, with the message extracted from
//! the structured `detail` field when present (either a plain string or a
//! list of validation-error objects). A failed call never touches the
//! session.

pub mod assets;
pub mod roles;
pub mod tasks;
pub mod templates;
pub mod users;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

pub struct ApiClient {
    base_url: String,
    http: Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: cfg.api_url.trim_end_matches('/').to_string(),
            http,
            token: None,
        })
    }

    /// Attach the bearer token used for subsequent calls
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => builder.bearer_auth(t),
            None => builder,
        }
    }

    pub(crate) fn get(&self, path: &str) -> AppResult<Response> {
        let resp = self.authorized(self.http.get(self.url(path))).send()?;
        check(resp)
    }

    pub(crate) fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> AppResult<Response> {
        let resp = self
            .authorized(self.http.post(self.url(path)))
            .json(body)
            .send()?;
        check(resp)
    }

    pub(crate) fn post_form<B: serde::Serialize>(&self, path: &str, form: &B) -> AppResult<Response> {
        let resp = self
            .authorized(self.http.post(self.url(path)))
            .form(form)
            .send()?;
        check(resp)
    }

    pub(crate) fn post_empty(&self, path: &str) -> AppResult<Response> {
        let resp = self.authorized(self.http.post(self.url(path))).send()?;
        check(resp)
    }

    pub(crate) fn put_json<B: serde::Serialize>(&self, path: &str, body: &B) -> AppResult<Response> {
        let resp = self
            .authorized(self.http.put(self.url(path)))
            .json(body)
            .send()?;
        check(resp)
    }

    pub(crate) fn delete(&self, path: &str) -> AppResult<Response> {
        let resp = self.authorized(self.http.delete(self.url(path))).send()?;
        check(resp)
    }
}

fn check(resp: Response) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_default();
    Err(AppError::Api {
        status: status.as_u16(),
        message: extract_detail(&body),
    })
}

/// Pull a human-readable message out of an error body. The API reports
/// errors as `{"detail": ...}` where `detail` is either a plain string or a
/// list of `{loc, msg}` validation objects; anything else falls back to a
/// generic message.
pub fn extract_detail(body: &str) -> String {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return generic_message(body),
    };

    match parsed.get("detail") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => {
            let first = match items.first() {
                Some(v) => v,
                None => return generic_message(body),
            };
            let msg = first
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("invalid input");
            // loc is ["body", "field", ...]; the second entry names the field
            let field = first
                .get("loc")
                .and_then(Value::as_array)
                .and_then(|loc| loc.get(1))
                .and_then(Value::as_str)
                .unwrap_or("input");
            format!("{}: {}", capitalize(field), msg)
        }
        _ => generic_message(body),
    }
}

fn generic_message(body: &str) -> String {
    if body.trim().is_empty() {
        "request failed".to_string()
    } else {
        let trimmed: String = body.chars().take(200).collect();
        trimmed
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
