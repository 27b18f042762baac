// tests/api.rs - end-to-end tests over the full rocket with a stub fetcher
use async_trait::async_trait;
use job_board::config::AppConfig;
use job_board::scrape::{FetchError, ListingFetcher};
use job_board::web::build_rocket;
use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};

/// Serves a fixed document instead of hitting the network.
struct StubFetcher {
    html: String,
}

#[async_trait]
impl ListingFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        Ok(self.html.clone())
    }
}

/// Fails every fetch with an upstream status error.
struct FailingFetcher;

#[async_trait]
impl ListingFetcher for FailingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        Err(FetchError::Status(503))
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        listing_url: "http://stubbed.invalid/list".to_string(),
        fetch_timeout_secs: 5,
        page_size: 20,
        token_secret: "test-secret".to_string(),
        token_ttl_secs: 3600,
        selectors: Default::default(),
    }
}

fn listing_page(count: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 1..=count {
        html.push_str(&format!(
            r#"<div class="item_recruit">
                <h2 class="job_tit"><a>Engineer {i}</a></h2>
                <div class="area_corp"><strong class="corp_name"><a>Company {i}</a></strong></div>
                <div class="job_condition"><span class="job_loc">Seoul</span><span class="pay">Negotiable</span></div>
                <div class="job_desc">Role {i}</div>
            </div>"#
        ));
    }
    html.push_str("</body></html>");
    html
}

async fn client_with_listings(count: usize) -> Client {
    let rocket = build_rocket(
        &test_config(),
        Box::new(StubFetcher {
            html: listing_page(count),
        }),
    )
    .unwrap();
    Client::tracked(rocket).await.unwrap()
}

async fn register_and_login(client: &Client, email: &str, password: &str) -> String {
    let response = client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(json!({"email": email, "password": password}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(json!({"email": email, "password": password}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().await.unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

#[rocket::async_test]
async fn status_endpoint_reports_ok() {
    let client = client_with_listings(0).await;
    let response = client.get("/status").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[rocket::async_test]
async fn duplicate_registration_returns_400() {
    let client = client_with_listings(0).await;

    let response = client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(json!({"email": "dup@example.com", "password": "pw1"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    // Same email with a different password still fails.
    let response = client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(json!({"email": "dup@example.com", "password": "pw2"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error_code"], "DUPLICATE_ACCOUNT");
}

#[rocket::async_test]
async fn distinct_registrations_both_succeed() {
    let client = client_with_listings(0).await;

    for email in ["one@example.com", "two@example.com"] {
        let response = client
            .post("/auth/register")
            .header(ContentType::JSON)
            .body(json!({"email": email, "password": "pw"}).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
    }
}

#[rocket::async_test]
async fn login_distinguishes_unknown_account_from_bad_password() {
    let client = client_with_listings(0).await;

    let response = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(json!({"email": "ghost@example.com", "password": "pw"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(json!({"email": "real@example.com", "password": "right"}).to_string())
        .dispatch()
        .await;

    let response = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(json!({"email": "real@example.com", "password": "wrong"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn second_page_of_45_listings_is_records_21_through_40() {
    let client = client_with_listings(45).await;

    let response = client.get("/jobs?page=2").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let jobs: Vec<Value> = response.into_json().await.unwrap();
    assert_eq!(jobs.len(), 20);
    assert_eq!(jobs[0]["id"], 21);
    assert_eq!(jobs[0]["title"], "Engineer 21");
    assert_eq!(jobs[19]["id"], 40);
    assert_eq!(jobs[19]["company"], "Company 40");
}

#[rocket::async_test]
async fn listing_pages_clip_and_run_out() {
    let client = client_with_listings(45).await;

    let response = client.get("/jobs?page=3").dispatch().await;
    let jobs: Vec<Value> = response.into_json().await.unwrap();
    assert_eq!(jobs.len(), 5);

    let response = client.get("/jobs?page=4").dispatch().await;
    let jobs: Vec<Value> = response.into_json().await.unwrap();
    assert!(jobs.is_empty());
}

#[rocket::async_test]
async fn page_zero_is_rejected() {
    let client = client_with_listings(45).await;
    let response = client.get("/jobs?page=0").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn default_page_is_the_first() {
    let client = client_with_listings(45).await;
    let response = client.get("/jobs").dispatch().await;
    let jobs: Vec<Value> = response.into_json().await.unwrap();
    assert_eq!(jobs.len(), 20);
    assert_eq!(jobs[0]["id"], 1);
}

#[rocket::async_test]
async fn fetch_failure_surfaces_as_500() {
    let rocket = build_rocket(&test_config(), Box::new(FailingFetcher)).unwrap();
    let client = Client::tracked(rocket).await.unwrap();

    let response = client.get("/jobs?page=1").dispatch().await;
    assert_eq!(response.status(), Status::InternalServerError);

    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error_code"], "UPSTREAM_ERROR");
}

#[rocket::async_test]
async fn job_creation_without_token_is_rejected_and_mutates_nothing() {
    let client = client_with_listings(0).await;

    let response = client
        .post("/jobs")
        .header(ContentType::JSON)
        .body(
            json!({
                "title": "Intruder",
                "description": "d",
                "company": "c",
                "location": "l"
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);

    // Nothing was stored: the first id is never assigned.
    let response = client.get("/jobs/1").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn job_creation_with_garbage_token_is_rejected() {
    let client = client_with_listings(0).await;

    let response = client
        .post("/jobs")
        .header(ContentType::JSON)
        .header(bearer("not-a-real-token"))
        .body(
            json!({
                "title": "Intruder",
                "description": "d",
                "company": "c",
                "location": "l"
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn authenticated_job_lifecycle() {
    let client = client_with_listings(0).await;
    let token = register_and_login(&client, "poster@example.com", "pw").await;

    let response = client
        .post("/jobs")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(
            json!({
                "title": "Rust Engineer",
                "description": "Build the job board",
                "company": "Acme",
                "location": "Seoul",
                "salary": "Negotiable"
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let created: Value = response.into_json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Rust Engineer");
    assert_eq!(created["salary"], "Negotiable");

    // Readable without auth.
    let response = client.get("/jobs/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    // Delete requires auth.
    let response = client.delete("/jobs/1").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);

    let response = client.delete("/jobs/1").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let response = client.delete("/jobs/1").header(bearer(&token)).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn expired_token_is_rejected() {
    let config = AppConfig {
        token_ttl_secs: -10,
        ..test_config()
    };
    let rocket = build_rocket(
        &config,
        Box::new(StubFetcher {
            html: listing_page(0),
        }),
    )
    .unwrap();
    let client = Client::tracked(rocket).await.unwrap();

    let token = register_and_login(&client, "late@example.com", "pw").await;

    let response = client
        .post("/jobs")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(
            json!({
                "title": "Too late",
                "description": "d",
                "company": "c",
                "location": "l"
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}
