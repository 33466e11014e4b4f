use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{redirect, Client, Response, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::config::Config;

pub type BookId = i64;

/// Reading status of a book, serialized with the exact strings the server stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum BookStatus {
    #[default]
    #[serde(rename = "In plan")]
    InPlan,
    Reading,
    Finished,
}

impl BookStatus {
    pub const ALL: [BookStatus; 3] = [BookStatus::InPlan, BookStatus::Reading, BookStatus::Finished];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::InPlan => "In plan",
            BookStatus::Reading => "Reading",
            BookStatus::Finished => "Finished",
        }
    }

    /// In plan → Reading → Finished → In plan
    pub fn next(self) -> Self {
        match self {
            BookStatus::InPlan => BookStatus::Reading,
            BookStatus::Reading => BookStatus::Finished,
            BookStatus::Finished => BookStatus::InPlan,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            BookStatus::InPlan => BookStatus::Finished,
            BookStatus::Reading => BookStatus::InPlan,
            BookStatus::Finished => BookStatus::Reading,
        }
    }
}

impl From<String> for BookStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Reading" => BookStatus::Reading,
            "Finished" => BookStatus::Finished,
            // Server default for new rows
            _ => BookStatus::InPlan,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub author: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub status: BookStatus,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub current_page: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub rating: u32,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub description: Option<String>,
}

/// Partial update body for `PUT /api/books/{id}`; `None` fields are left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
}

impl BookPatch {
    pub fn status_only(status: BookStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedBook {
    #[serde(default)]
    pub id: Option<BookId>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

// Keep passwords out of debug logs
impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Helper function to deserialize null as the type's default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Empty or whitespace-only strings carry no value (the server stores '' by default)
fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

/// Page and rating columns have been written as strings by older clients,
/// so accept a number, a numeric string, or null
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match Option::<Count>::deserialize(deserializer)? {
        None => 0,
        Some(Count::Int(n)) => n,
        Some(Count::Float(n)) => n as i64,
        Some(Count::Text(s)) => s.trim().parse::<i64>().unwrap_or(0),
    };
    Ok(value.clamp(0, u32::MAX as i64) as u32)
}

/// Errors at the HTTP boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401, or a redirect to the login view
    #[error("not authenticated")]
    Unauthorized,

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// HTTP status for errors that carry one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }
}

/// Turn a non-success book endpoint response into an error.
/// Unauthenticated requests get redirected to the login view by the server,
/// so any redirect counts as 401.
async fn check_book_response(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED || status.is_redirection() {
        return Err(ApiError::Unauthorized);
    }

    let fallback = status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string();
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(error) }) => error,
        _ => fallback,
    };

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[derive(Clone)]
pub struct BookClient {
    base_url: String,
    client: Client,
}

impl fmt::Debug for BookClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookClient")
            .field("base_url", &self.base_url)
            .field("client", &"<HttpClient>")
            .finish()
    }
}

impl BookClient {
    pub fn new(base_url: &str, accept_invalid_certs: bool, timeout: Duration) -> Result<Self> {
        // Redirects are surfaced to callers: they signal a missing session
        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(accept_invalid_certs)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.base_url,
            config.accept_invalid_certs,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/books"))
            .send()
            .await
            .map_err(ApiError::Network)?;

        check_book_response(response)
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    pub async fn get_book(&self, id: BookId) -> Result<Book, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/books/{}", id)))
            .send()
            .await
            .map_err(ApiError::Network)?;

        check_book_response(response)
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    pub async fn create_book(&self, book: &NewBook) -> Result<CreatedBook, ApiError> {
        let response = self
            .client
            .post(self.url("/api/books"))
            .json(book)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let response = check_book_response(response).await?;
        // The body is informational only
        Ok(response.json().await.unwrap_or_default())
    }

    pub async fn update_book(&self, id: BookId, patch: &BookPatch) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/api/books/{}", id)))
            .json(patch)
            .send()
            .await
            .map_err(ApiError::Network)?;

        check_book_response(response).await?;
        Ok(())
    }

    pub async fn delete_book(&self, id: BookId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/books/{}", id)))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(ApiError::Network)?;

        check_book_response(response).await?;
        Ok(())
    }

    /// Rejections come back as 400 with a JSON body, so the body is read
    /// regardless of status
    pub async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/auth/register"))
            .json(registration)
            .send()
            .await
            .map_err(ApiError::Network)?;

        response.json().await.map_err(ApiError::Decode)
    }

    /// Submit the login form, then ask the server whether the session took
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthStatus, ApiError> {
        self.client
            .post(self.url("/api/auth/login"))
            .form(credentials)
            .send()
            .await
            .map_err(ApiError::Network)?;

        self.auth_status().await
    }

    pub async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        let response = self
            .client
            .get(self.url("/api/auth/status"))
            .send()
            .await
            .map_err(ApiError::Network)?;

        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(self.url("/api/auth/logout"))
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("logout failed").to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_decodes_server_shape() {
        let json = r#"{
            "id": 7, "title": "Dune", "author": "Frank Herbert", "status": "Reading",
            "image_url": "", "description": "", "current_page": 150, "rating": 0
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.status, BookStatus::Reading);
        assert_eq!(book.current_page, 150);
        assert_eq!(book.image_url, None);
        assert_eq!(book.description, None);
    }

    #[test]
    fn test_book_tolerates_nulls_and_missing_fields() {
        let json = r#"{"id": 1, "title": "T", "author": null, "status": null, "current_page": null}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.author, "");
        assert_eq!(book.status, BookStatus::InPlan);
        assert_eq!(book.current_page, 0);
        assert_eq!(book.rating, 0);
    }

    #[test]
    fn test_book_accepts_numeric_strings() {
        let json = r#"{"id": 1, "title": "T", "current_page": "42", "rating": "x"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.current_page, 42);
        assert_eq!(book.rating, 0);
    }

    #[test]
    fn test_negative_count_clamps_to_zero() {
        let json = r#"{"id": 1, "title": "T", "current_page": -5}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.current_page, 0);
    }

    #[test]
    fn test_unknown_status_falls_back_to_in_plan() {
        let status: BookStatus = serde_json::from_str(r#""Abandoned""#).unwrap();
        assert_eq!(status, BookStatus::InPlan);
    }

    #[test]
    fn test_status_serializes_with_server_strings() {
        assert_eq!(serde_json::to_string(&BookStatus::InPlan).unwrap(), r#""In plan""#);
        assert_eq!(serde_json::to_string(&BookStatus::Finished).unwrap(), r#""Finished""#);
    }

    #[test]
    fn test_status_cycle() {
        assert_eq!(BookStatus::InPlan.next(), BookStatus::Reading);
        assert_eq!(BookStatus::Finished.next(), BookStatus::InPlan);
        assert_eq!(BookStatus::InPlan.prev(), BookStatus::Finished);
    }

    #[test]
    fn test_status_only_patch_omits_other_fields() {
        let patch = BookPatch::status_only(BookStatus::Finished);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"status": "Finished"}));
    }

    #[test]
    fn test_registration_debug_redacts_passwords() {
        let registration = Registration {
            username: "ann".to_string(),
            email: "ann@gmail.com".to_string(),
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
        };
        let debug = format!("{:?}", registration);
        assert!(!debug.contains("Secret123"));
        assert!(debug.contains("ann@gmail.com"));
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        let err = ApiError::Status {
            status: 400,
            message: "Title is required".to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = BookClient::new("https://localhost:5001/", false, Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "https://localhost:5001");
        assert_eq!(client.url("/api/books"), "https://localhost:5001/api/books");
    }
}
