// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::accounts::CredentialStore;
use crate::auth::{AuthenticatedUser, TokenIssuer};
use crate::config::AppConfig;
use crate::jobs::{JobStore, StoredJob};
use crate::scrape::{HttpListingFetcher, JobListing, ListingFetcher, ListingParser, ScrapeService};

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::time::Duration;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

// Routes

#[get("/status")]
pub async fn status() -> Json<StatusResponse> {
    handlers::status_handler().await
}

#[post("/auth/register", data = "<request>")]
pub async fn register(
    request: Json<CredentialsRequest>,
    accounts: &State<CredentialStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    handlers::register_handler(request, accounts).await
}

#[post("/auth/login", data = "<request>")]
pub async fn login(
    request: Json<CredentialsRequest>,
    accounts: &State<CredentialStore>,
    issuer: &State<TokenIssuer>,
) -> Result<Json<TokenResponse>, ApiError> {
    handlers::login_handler(request, accounts, issuer).await
}

#[get("/jobs?<page>")]
pub async fn list_jobs(
    page: Option<usize>,
    scrape: &State<ScrapeService>,
) -> Result<Json<Vec<JobListing>>, ApiError> {
    handlers::list_jobs_handler(page.unwrap_or(1), scrape).await
}

#[get("/jobs/<id>")]
pub async fn get_job(id: u64, jobs: &State<JobStore>) -> Result<Json<StoredJob>, ApiError> {
    handlers::get_job_handler(id, jobs).await
}

#[post("/jobs", data = "<request>")]
pub async fn create_job(
    request: Json<JobPostRequest>,
    auth: AuthenticatedUser,
    jobs: &State<JobStore>,
) -> Json<StoredJob> {
    handlers::create_job_handler(request, auth, jobs).await
}

#[delete("/jobs/<id>")]
pub async fn delete_job(
    id: u64,
    auth: AuthenticatedUser,
    jobs: &State<JobStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    handlers::delete_job_handler(id, auth, jobs).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error: "Invalid request format".to_string(),
        error_code: "BAD_REQUEST".to_string(),
    })
}

#[rocket::catch(401)]
pub fn unauthorized() -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error: "Missing or invalid authorization token".to_string(),
        error_code: "UNAUTHORIZED".to_string(),
    })
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error: "Resource not found".to_string(),
        error_code: "NOT_FOUND".to_string(),
    })
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error: "Internal server error".to_string(),
        error_code: "INTERNAL_ERROR".to_string(),
    })
}

/// Assemble the rocket with all managed state. The fetcher is injected so
/// tests can substitute a fixed document for the live network call.
pub fn build_rocket(config: &AppConfig, fetcher: Box<dyn ListingFetcher>) -> Result<Rocket<Build>> {
    let parser = ListingParser::from_config(&config.selectors)?;
    let scrape = ScrapeService::new(
        fetcher,
        parser,
        config.listing_url.clone(),
        config.page_size,
    );
    let issuer = TokenIssuer::new(&config.token_secret, config.token_ttl_secs);

    Ok(rocket::build()
        .attach(Cors)
        .manage(CredentialStore::new())
        .manage(JobStore::new())
        .manage(issuer)
        .manage(scrape)
        .register(
            "/",
            catchers![bad_request, unauthorized, not_found, internal_error],
        )
        .mount(
            "/",
            routes![
                status, register, login, list_jobs, get_job, create_job, delete_job, options,
            ],
        ))
}

// Main server start function
pub async fn start_web_server(config: AppConfig, port: u16) -> Result<()> {
    let fetcher = Box::new(HttpListingFetcher::new(Duration::from_secs(
        config.fetch_timeout_secs,
    )));

    info!("Starting job board API server");
    info!("Listing source: {}", config.listing_url);
    info!("Server: http://0.0.0.0:{}", port);

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    build_rocket(&config, fetcher)?
        .configure(figment)
        .launch()
        .await?;

    Ok(())
}
