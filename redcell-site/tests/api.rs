use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use redcell_site::{SiteConfig, create_app};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    create_app(SiteConfig::default())
}

fn summary(words: usize) -> String {
    vec!["evidence"; words].join(" ")
}

fn valid_payload() -> Value {
    json!({
        "basics": {
            "scenario": "pre-payment",
            "geography": "US-China",
            "amountAtRisk": "$50,000 USD",
            "urgency": "24h",
            "caseSummary": summary(20)
        },
        "counterparty": {
            "entityType": "company",
            "nameOrHandle": "ABC Trading Ltd",
            "website": "https://abc-trading.example",
            "contactedBefore": true,
            "files": [
                {"name": "invoice.pdf", "size": 1024, "type": "application/pdf", "lastModified": 1700000000000i64}
            ]
        },
        "tier": {"selectedTier": "tactical"},
        "review": {"confirmAccuracy": true}
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec(), headers)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes, _) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, bytes, _) = send(app, request).await;
    (status, String::from_utf8(bytes).unwrap())
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = get_text(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn well_formed_submission_gets_case_id() {
    let (status, body) = post_json(&app(), "/api/intake/submit", valid_payload()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let id = body["id"].as_str().unwrap();
    let pattern = regex::Regex::new(r"^RC-\d+-[0-9A-Z]{6}$").unwrap();
    assert!(pattern.is_match(id), "unexpected id {}", id);
}

#[tokio::test]
async fn missing_scenario_is_a_validation_failure() {
    let mut payload = valid_payload();
    payload["basics"].as_object_mut().unwrap().remove("scenario");

    let (status, body) = post_json(&app(), "/api/intake/submit", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["fields"]["basics.scenario"], "Please select a scenario");
}

#[tokio::test]
async fn counterparty_must_state_prior_contact() {
    let mut payload = valid_payload();
    payload["counterparty"]
        .as_object_mut()
        .unwrap()
        .remove("contactedBefore");
    let (status, body) = post_json(&app(), "/api/intake/submit", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert!(body["details"].as_str().unwrap().contains("contactedBefore"));

    let mut payload = valid_payload();
    payload["counterparty"].as_object_mut().unwrap().remove("files");
    let (status, _) = post_json(&app(), "/api/intake/submit", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unconfirmed_review_is_rejected() {
    let mut payload = valid_payload();
    payload["review"]["confirmAccuracy"] = json!(false);

    let (status, body) = post_json(&app(), "/api/intake/submit", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["review.confirmAccuracy"].is_string());
}

#[tokio::test]
async fn unknown_enum_value_is_a_bad_request() {
    let mut payload = valid_payload();
    payload["tier"]["selectedTier"] = json!("platinum");

    let (status, body) = post_json(&app(), "/api/intake/submit", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn non_json_body_is_a_server_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/intake/submit")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("definitely not json"))
        .unwrap();
    let (status, bytes, _) = send(&app(), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"ok": false, "error": "Internal server error"}));
}

#[tokio::test]
async fn wizard_session_walks_to_completion() {
    let app = app();
    let payload = valid_payload();

    let (status, view) = post_json(&app, "/api/intake/sessions", json!({"plan": "recovery"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["currentStep"], "basics");
    assert_eq!(view["progress"], 25);
    assert_eq!(view["data"]["tier"]["selectedTier"], "reclamation");
    let id = view["sessionId"].as_str().unwrap().to_string();
    let next = format!("/api/intake/sessions/{}/next", id);

    let mut short = payload["basics"].clone();
    short["caseSummary"] = json!(summary(3));
    let (status, view) = post_json(&app, &next, json!({"data": short})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["currentStep"], "basics");
    assert!(view["errors"]["basics.caseSummary"].is_string());

    let (_, view) = post_json(&app, &next, json!({"data": payload["basics"]})).await;
    assert_eq!(view["currentStep"], "counterparty");
    assert_eq!(view["errors"], json!({}));

    let (_, view) = post_json(&app, &next, json!({"data": payload["counterparty"]})).await;
    assert_eq!(view["currentStep"], "tier");

    let (_, view) = post_json(&app, &next, json!({"data": payload["tier"]})).await;
    assert_eq!(view["currentStep"], "review");
    assert_eq!(view["progress"], 100);

    let (_, view) = post_json(&app, &next, json!({"data": payload["review"]})).await;
    assert_eq!(view["completed"], true);
    assert!(view["caseId"].as_str().unwrap().starts_with("RC-"));

    let (status, body) = post_json(&app, &next, json!({"data": {}})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["ok"], false);

    let (status, _) = get_text(&app, &format!("/api/intake/sessions/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn back_returns_to_previous_step_without_errors() {
    let app = app();
    let payload = valid_payload();
    let (_, view) = post_json(&app, "/api/intake/sessions", json!({})).await;
    let id = view["sessionId"].as_str().unwrap().to_string();
    let next = format!("/api/intake/sessions/{}/next", id);

    post_json(&app, &next, json!({"data": payload["basics"]})).await;
    let (_, view) = post_json(
        &app,
        &next,
        json!({"data": {"nameOrHandle": "", "contactedBefore": false, "files": []}}),
    )
    .await;
    assert_eq!(view["currentStep"], "counterparty");
    assert!(!view["errors"].as_object().unwrap().is_empty());

    let (status, view) =
        post_json(&app, &format!("/api/intake/sessions/{}/back", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["currentStep"], "basics");
    assert_eq!(view["errors"], json!({}));
    assert_eq!(view["data"]["basics"]["geography"], "US-China");
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let app = app();
    let (status, _) = get_text(&app, "/api/intake/sessions/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) =
        post_json(&app, "/api/intake/sessions/missing/next", json!({"data": {}})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found");
}

#[tokio::test]
async fn quick_start_returns_short_reference() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/api/start-investigation",
        json!({"plan": "technical", "fullName": "Dana Reyes", "email": "dana@example.com", "summary": "Supplier changed bank details"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_str().unwrap().starts_with("RCA-"));

    let (status, body) = post_json(
        &app,
        "/api/start-investigation",
        json!({"fullName": "", "email": "nope"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["fullName"], "Full name is required");
    assert_eq!(body["fields"]["email"], "Please enter a valid email address");
}

#[tokio::test]
async fn contact_requires_name_email_and_message() {
    let app = app();
    let (status, body) = post_json(&app, "/api/contact", json!({"email": "a@b.co"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["name"].is_string());
    assert!(body["fields"]["message"].is_string());

    let (status, body) = post_json(
        &app,
        "/api/contact",
        json!({"name": "Sam", "email": "sam@example.com", "message": "Need a vendor check", "topic": "evidence"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn consent_sets_both_cookies_and_hides_banner() {
    let app = app();
    let (_, html) = get_text(&app, "/").await;
    assert!(html.contains("cookie-banner"));

    let request = Request::builder()
        .method("POST")
        .uri("/api/consent")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"action": "accept_all"}).to_string()))
        .unwrap();
    let (status, bytes, headers) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body["preferences"],
        json!({"essential": true, "performance": true, "functional": true, "marketing": true})
    );

    let cookies: Vec<String> = headers
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_string())
        .collect();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("redcell-cookie-consent=")));
    assert!(cookies.iter().any(|c| c.starts_with("redcell-cookie-preferences=")));

    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, cookies.join("; "))
        .body(Body::empty())
        .unwrap();
    let (_, bytes, _) = send(&app, request).await;
    let html = String::from_utf8(bytes).unwrap();
    assert!(!html.contains("cookie-banner"));
}

#[tokio::test]
async fn consent_reset_expires_both_cookies() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/consent")
        .header(header::CONTENT_TYPE, "application/json")
        .header(
            header::COOKIE,
            "redcell-cookie-consent=true; redcell-cookie-preferences=%7B%7D",
        )
        .body(Body::from(json!({"action": "reset"}).to_string()))
        .unwrap();
    let (status, bytes, headers) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["preferences"]["performance"], false);

    let cookies: Vec<&str> = headers
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));

    let (status, html) = get_text(&app, "/legal/cookies").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Update Cookie Preferences"));
}

#[tokio::test]
async fn custom_consent_needs_preferences() {
    let (status, _) = post_json(&app(), "/api/consent", json!({"action": "custom"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn events_are_dropped_without_consent() {
    let (status, body) = post_json(
        &app(),
        "/api/events",
        json!({"name": "run_check", "properties": {"page_location": "/pricing"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tracked"], false);
}

#[tokio::test]
async fn maps_config_reflects_key() {
    let (_, body) = get_text(&app(), "/api/maps-config").await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({"apiKey": "", "hasApiKey": false}));

    let config = SiteConfig {
        maps_api_key: Some("key-123".to_string()),
        ..SiteConfig::default()
    };
    let (_, body) = get_text(&create_app(config), "/api/maps-config").await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["hasApiKey"], true);
}

#[tokio::test]
async fn sitemap_and_robots_use_site_url() {
    let app = app();
    let (status, xml) = get_text(&app, "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(xml.contains("<loc>https://redcells.vercel.app/</loc>"));
    assert!(xml.contains("<loc>https://redcells.vercel.app/legal/dpa-gdpr</loc>"));

    let (_, robots) = get_text(&app, "/robots.txt").await;
    assert!(robots.contains("Sitemap: https://redcells.vercel.app/sitemap.xml"));
}

#[tokio::test]
async fn every_page_renders() {
    let app = app();
    for uri in [
        "/",
        "/services",
        "/pricing",
        "/cases",
        "/blog",
        "/faq?q=ofac",
        "/contact?topic=evidence",
        "/legal",
        "/legal/terms",
        "/trust-center",
        "/start-investigation?plan=tactical",
        "/submit",
        "/thank-you?case=RC-1-ABCDEF",
        "/assets/site.css",
        "/assets/intake.js",
    ] {
        let (status, _) = get_text(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
    }
}

#[tokio::test]
async fn missing_content_is_not_found() {
    let app = app();
    for uri in ["/blog/no-such-post", "/legal/nothing", "/blog/page/0", "/blog/page/99", "/blog/page/x", "/nowhere"] {
        let (status, html) = get_text(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(html.contains("Page Not Found"));
    }
}

#[tokio::test]
async fn filtered_blog_pages_redirect_to_listing() {
    let request = Request::builder()
        .uri("/blog/page/2?cat=How-To")
        .body(Body::empty())
        .unwrap();
    let (status, _, headers) = send(&app(), request).await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(headers[header::LOCATION], "/blog?cat=How-To");
}

#[tokio::test]
async fn responses_carry_correlation_id() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (_, _, headers) = send(&app(), request).await;
    let id = headers["x-correlation-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

async fn post_raw(app: &Router, uri: &str, content_type: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    let (status, bytes, headers) = send(app, request).await;
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let app = app();
    for uri in [
        "/api/intake/sessions",
        "/api/start-investigation",
        "/api/contact",
        "/api/consent",
        "/api/events",
    ] {
        let (status, body) = post_raw(&app, uri, "application/json", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "Invalid request body");
    }

    let (status, body) = post_raw(&app, "/api/contact", "text/plain", "name=Sam").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
}
