// src/web/types.rs
use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::serde::{Deserialize, Serialize};
use rocket::{Request, Response};
use std::io::Cursor;

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct JobPostRequest {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

/// JSON error carrying its HTTP status, so handlers return one type for
/// every failure path.
pub struct ApiError {
    pub status: Status,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: Status, error: impl Into<String>, error_code: &str) -> Self {
        Self {
            status,
            body: ErrorBody {
                success: false,
                error: error.into(),
                error_code: error_code.to_string(),
            },
        }
    }

    pub fn bad_request(error: impl Into<String>, error_code: &str) -> Self {
        Self::new(Status::BadRequest, error, error_code)
    }

    pub fn unauthorized(error: impl Into<String>, error_code: &str) -> Self {
        Self::new(Status::Unauthorized, error, error_code)
    }

    pub fn not_found(error: impl Into<String>, error_code: &str) -> Self {
        Self::new(Status::NotFound, error, error_code)
    }

    pub fn internal(error: impl Into<String>, error_code: &str) -> Self {
        Self::new(Status::InternalServerError, error, error_code)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = serde_json::to_string(&self.body).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
