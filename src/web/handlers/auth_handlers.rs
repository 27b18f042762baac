// src/web/handlers/auth_handlers.rs
use crate::accounts::{AccountError, CredentialStore};
use crate::auth::TokenIssuer;
use crate::web::types::{ApiError, CredentialsRequest, MessageResponse, TokenResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

pub async fn register_handler(
    request: Json<CredentialsRequest>,
    accounts: &State<CredentialStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    match accounts.register(&request.email, &request.password) {
        Ok(()) => Ok(Json(MessageResponse {
            message: "User registered successfully".to_string(),
        })),
        Err(AccountError::DuplicateAccount) => {
            warn!("Registration rejected, account exists: {}", request.email);
            Err(ApiError::bad_request(
                "User already exists",
                "DUPLICATE_ACCOUNT",
            ))
        }
        Err(e) => {
            error!("Registration failed for {}: {}", request.email, e);
            Err(ApiError::internal("Registration failed", "INTERNAL_ERROR"))
        }
    }
}

pub async fn login_handler(
    request: Json<CredentialsRequest>,
    accounts: &State<CredentialStore>,
    issuer: &State<TokenIssuer>,
) -> Result<Json<TokenResponse>, ApiError> {
    match accounts.verify(&request.email, &request.password) {
        Ok(()) => {}
        Err(AccountError::AccountNotFound) => {
            warn!("Login attempt for unknown account: {}", request.email);
            return Err(ApiError::bad_request(
                "User does not exist",
                "ACCOUNT_NOT_FOUND",
            ));
        }
        Err(e) => {
            warn!("Login rejected for {}: {}", request.email, e);
            return Err(ApiError::unauthorized(
                "Invalid credentials",
                "INVALID_CREDENTIALS",
            ));
        }
    }

    match issuer.issue(&request.email) {
        Ok(token) => {
            info!("Issued access token for {}", request.email);
            Ok(Json(TokenResponse {
                access_token: token,
            }))
        }
        Err(e) => {
            error!("Token issuance failed for {}: {}", request.email, e);
            Err(ApiError::internal("Failed to issue token", "TOKEN_ERROR"))
        }
    }
}
