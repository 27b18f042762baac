// src/web/handlers/system_handlers.rs
use crate::web::types::StatusResponse;

use rocket::serde::json::Json;

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
