use axum::{
    Router,
    body::Bytes,
    extract::{FromRequest, Path, Query, Request, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    middleware::{Next, from_fn},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Instrument, error, info, warn};
use uuid::Uuid;
use wizard_flow::{FlowError, FlowRunner, InMemorySessionStorage, Session, SessionStorage};

use crate::{
    analytics::{TrackOutcome, track_named},
    case_id::generate_quick_case_id,
    config::SiteConfig,
    consent::{CookieConsent, CookieHeaderStore},
    content::{blog, legal},
    maps::MapsConfig,
    models::{
        BasicsFormData, ConsentAction, ConsentRequest, ContactRequest, CounterpartyFormData,
        CreateSessionRequest, EventRequest, IntakeFormData, QuickStartRequest, ReviewFormData,
        SessionView, StepSubmission, SubmitResponse, TierFormData,
    },
    pages::{self, BlogQuery, ContactQuery, FaqQuery, PageContext, PlanQuery, ThankYouQuery},
    sitemap::{render_sitemap, robots_txt, sitemap_entries},
    submission::{CaseSubmitter, MockCaseSubmitter},
    tasks::{session_keys, step_ids},
    validation::{ValidationErrors, validate_contact, validate_intake, validate_quick_start},
    workflow::{build_session_view, create_flow_runner, create_intake_session},
};

const SITE_CSS: &str = include_str!("../assets/site.css");
const INTAKE_JS: &str = include_str!("../assets/intake.js");
const CORRELATION_ID_HEADER: &str = "x-correlation-id";

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;
type ApiError = (StatusCode, Json<Value>);

/// `Json` extractor whose rejections use the API error envelope
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(status = %rejection.status(), "rejected request body: {}", rejection.body_text());
                Err(bad_request_error("Invalid request body", &rejection.body_text()))
            }
        }
    }
}

fn bad_request_error(message: &str, details: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "ok": false,
            "error": message,
            "details": details
        })),
    )
}

fn validation_error(errors: &ValidationErrors) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "ok": false,
            "error": "Validation failed",
            "details": errors.to_string(),
            "fields": errors.to_field_map()
        })),
    )
}

fn not_found_error(message: &str, id: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "ok": false,
            "error": message,
            "session_id": id
        })),
    )
}

fn conflict_error(message: &str, id: &str) -> ApiError {
    (
        StatusCode::CONFLICT,
        Json(json!({
            "ok": false,
            "error": message,
            "session_id": id
        })),
    )
}

fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "ok": false,
            "error": "Internal server error"
        })),
    )
}

fn flow_error(e: FlowError, session_id: &str) -> ApiError {
    match e {
        FlowError::SessionNotFound(_) => not_found_error("Session not found", session_id),
        other => {
            error!("Wizard failure for session {}: {}", session_id, other);
            internal_error()
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub session_storage: Arc<dyn SessionStorage>,
    pub flow_runner: FlowRunner,
    pub submitter: Arc<dyn CaseSubmitter>,
}

impl AppState {
    /// In-memory sessions and the mock submitter
    pub fn new(config: SiteConfig) -> Self {
        let submitter: Arc<dyn CaseSubmitter> =
            Arc::new(MockCaseSubmitter::new(config.submit_delay));
        Self::with_submitter(config, submitter)
    }

    pub fn with_submitter(config: SiteConfig, submitter: Arc<dyn CaseSubmitter>) -> Self {
        let session_storage: Arc<dyn SessionStorage> =
            Arc::new(InMemorySessionStorage::with_max_age(config.session_ttl));
        let flow_runner = create_flow_runner(session_storage.clone(), submitter.clone());
        Self {
            config: Arc::new(config),
            session_storage,
            flow_runner,
            submitter,
        }
    }
}

pub fn create_app(config: SiteConfig) -> Router {
    build_router(AppState::new(config))
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/services", get(services))
        .route("/pricing", get(pricing))
        .route("/cases", get(cases))
        .route("/blog", get(blog_index))
        .route("/blog/page/{page}", get(blog_page))
        .route("/blog/{slug}", get(blog_post))
        .route("/faq", get(faq))
        .route("/contact", get(contact))
        .route("/legal", get(legal_index))
        .route("/legal/{doc}", get(legal_doc))
        .route("/trust-center", get(trust_center))
        .route("/start-investigation", get(start_investigation))
        .route("/submit", get(submit))
        .route("/thank-you", get(thank_you))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .route("/assets/site.css", get(stylesheet))
        .route("/assets/intake.js", get(intake_script))
        .route("/health", get(health_check))
        .route("/api/intake/submit", post(submit_intake))
        .route("/api/intake/sessions", post(create_session))
        .route("/api/intake/sessions/{session_id}", get(get_session))
        .route("/api/intake/sessions/{session_id}/next", post(next_step))
        .route("/api/intake/sessions/{session_id}/back", post(previous_step))
        .route("/api/start-investigation", post(quick_start))
        .route("/api/contact", post(contact_form))
        .route("/api/consent", post(save_consent))
        .route("/api/events", post(track_event))
        .route("/api/maps-config", get(maps_config))
        .fallback(not_found)
        .layer(from_fn(correlation_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Tags every request with a fresh correlation id, visible in the span and echoed back.
async fn correlation_id_middleware(mut request: Request, next: Next) -> Response {
    let correlation_id = Uuid::new_v4().to_string();
    let header_value = HeaderValue::from_str(&correlation_id).ok();

    if let Some(value) = &header_value {
        request
            .headers_mut()
            .insert(CORRELATION_ID_HEADER, value.clone());
    }

    let span = tracing::info_span!(
        "http_request",
        correlation_id = %correlation_id,
        method = %request.method(),
        path = %request.uri().path()
    );

    let mut response = next.run(request).instrument(span).await;
    if let Some(value) = header_value {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}

// ---- pages ----

fn page_context(state: &AppState, uri: &Uri, headers: &HeaderMap) -> PageContext {
    let consent = CookieConsent::load(CookieHeaderStore::from_headers(headers));
    PageContext::new(
        uri.path(),
        state.config.site_url.clone(),
        consent.banner_visible(),
    )
}

async fn home(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Html<String> {
    Html(pages::home_page(&page_context(&state, &uri, &headers)))
}

async fn services(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Html<String> {
    Html(pages::services_page(&page_context(&state, &uri, &headers)))
}

async fn pricing(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Html<String> {
    Html(pages::pricing_page(&page_context(&state, &uri, &headers)))
}

async fn cases(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Html<String> {
    Html(pages::cases_page(&page_context(&state, &uri, &headers)))
}

async fn blog_index(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<BlogQuery>,
) -> Html<String> {
    Html(pages::blog_listing_page(
        &page_context(&state, &uri, &headers),
        &query,
        1,
    ))
}

/// Numbered listing pages exist only for the unfiltered blog; filtered views live on `/blog`.
async fn blog_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<BlogQuery>,
) -> Response {
    let ctx = page_context(&state, &uri, &headers);
    let Ok(page) = page.parse::<usize>() else {
        return not_found_response(&ctx);
    };
    if page == 0 || page > pages::unfiltered_page_count() {
        return not_found_response(&ctx);
    }
    if page == 1 || query.has_filters() {
        let target = format!("{}{}", blog::BLOG_BASE_URL, query.to_query_string());
        return Redirect::permanent(&target).into_response();
    }
    Html(pages::blog_listing_page(&ctx, &query, page)).into_response()
}

async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let ctx = page_context(&state, &uri, &headers);
    match blog::find_post(&slug) {
        Some(post) => Html(pages::blog_post_page(&ctx, post)).into_response(),
        None => not_found_response(&ctx),
    }
}

async fn faq(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<FaqQuery>,
) -> Html<String> {
    Html(pages::faq_page(&page_context(&state, &uri, &headers), &query))
}

async fn contact(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<ContactQuery>,
) -> Html<String> {
    let maps = MapsConfig::from_config(&state.config);
    Html(pages::contact_page(
        &page_context(&state, &uri, &headers),
        &maps,
        &query,
    ))
}

async fn legal_index(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Html<String> {
    Html(pages::legal_index_page(&page_context(&state, &uri, &headers)))
}

async fn legal_doc(
    State(state): State<AppState>,
    Path(doc): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let ctx = page_context(&state, &uri, &headers);
    match legal::find_doc(&doc) {
        Some(doc) => Html(pages::legal_doc_page(&ctx, doc)).into_response(),
        None => not_found_response(&ctx),
    }
}

async fn trust_center(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Html<String> {
    Html(pages::trust_center_page(&page_context(&state, &uri, &headers)))
}

async fn start_investigation(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<PlanQuery>,
) -> Html<String> {
    Html(pages::start_investigation_page(
        &page_context(&state, &uri, &headers),
        &query,
    ))
}

async fn submit(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<PlanQuery>,
) -> Html<String> {
    Html(pages::submit_page(&page_context(&state, &uri, &headers), &query))
}

async fn thank_you(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<ThankYouQuery>,
) -> Html<String> {
    Html(pages::thank_you_page(
        &page_context(&state, &uri, &headers),
        &query,
    ))
}

async fn not_found(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    not_found_response(&page_context(&state, &uri, &headers))
}

fn not_found_response(ctx: &PageContext) -> Response {
    (StatusCode::NOT_FOUND, Html(pages::not_found_page(ctx))).into_response()
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let entries = sitemap_entries(&state.config.site_url, Utc::now().date_naive());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&entries),
    )
}

async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.config.site_url),
    )
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

async fn intake_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        INTAKE_JS,
    )
}

// ---- API ----

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// One-shot submission of the whole intake form. A body that is not JSON at all is a
/// server error; a JSON body of the wrong shape is a validation failure.
async fn submit_intake(State(state): State<AppState>, body: Bytes) -> ApiResult<SubmitResponse> {
    let raw: Value = serde_json::from_slice(&body).map_err(|e| {
        error!("Intake submission body is not JSON: {}", e);
        internal_error()
    })?;

    let data: IntakeFormData = serde_json::from_value(raw).map_err(|e| {
        warn!("Intake submission has the wrong shape: {}", e);
        bad_request_error("Validation failed", &e.to_string())
    })?;

    if let Err(errors) = validate_intake(&data) {
        info!("Intake submission rejected: {}", errors);
        return Err(validation_error(&errors));
    }

    let id = state.submitter.submit(&data).await.map_err(|e| {
        error!("Case submission failed: {}", e);
        internal_error()
    })?;

    Ok(Json(SubmitResponse {
        ok: true,
        id: Some(id),
        message: Some("Case submitted successfully".to_string()),
        error: None,
        details: None,
    }))
}

async fn create_session(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateSessionRequest>,
) -> ApiResult<SessionView> {
    let session = create_intake_session(request.plan.as_deref())
        .await
        .map_err(|e| flow_error(e, "new"))?;
    info!("Intake session {} created", session.id);

    let view = build_session_view(state.flow_runner.graph(), &session).await;
    save_session(&state, session).await?;
    Ok(Json(view))
}

async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<SessionView> {
    let session = load_session(&state, &session_id).await?;
    Ok(Json(
        build_session_view(state.flow_runner.graph(), &session).await,
    ))
}

/// Stores the answers for the current step and runs it. The reply is the session after the
/// step ran: either the next step or the same step with field errors.
async fn next_step(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    ApiJson(request): ApiJson<StepSubmission>,
) -> ApiResult<SessionView> {
    let session = load_session(&state, &session_id).await?;
    if session.completed {
        return Err(conflict_error("Case already submitted", &session_id));
    }

    merge_step_answers(&session, request.data).await?;
    save_session(&state, session).await?;

    let result = state
        .flow_runner
        .run(&session_id)
        .await
        .map_err(|e| flow_error(e, &session_id))?;
    info!("Session {} step ran: {:?}", session_id, result.status);

    let session = load_session(&state, &session_id).await?;
    Ok(Json(
        build_session_view(state.flow_runner.graph(), &session).await,
    ))
}

async fn previous_step(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<SessionView> {
    let session = load_session(&state, &session_id).await?;
    if session.completed {
        return Err(conflict_error("Case already submitted", &session_id));
    }

    let session = state
        .flow_runner
        .back(&session_id)
        .await
        .map_err(|e| flow_error(e, &session_id))?;
    session.context.remove(session_keys::STEP_ERRORS).await;
    let view = build_session_view(state.flow_runner.graph(), &session).await;
    save_session(&state, session).await?;
    Ok(Json(view))
}

async fn load_session(state: &AppState, session_id: &str) -> Result<Session, ApiError> {
    match state.session_storage.get(session_id).await {
        Ok(Some(session)) => Ok(session),
        Ok(None) => Err(not_found_error("Session not found", session_id)),
        Err(e) => {
            error!("Failed to load session {}: {}", session_id, e);
            Err(internal_error())
        }
    }
}

async fn save_session(state: &AppState, session: Session) -> Result<(), ApiError> {
    let session_id = session.id.clone();
    state.session_storage.save(session).await.map_err(|e| {
        error!("Failed to save session {}: {}", session_id, e);
        internal_error()
    })
}

/// Overlays the posted fields on the stored section of the current step.
async fn merge_step_answers(session: &Session, data: Value) -> Result<(), ApiError> {
    let step_id = session.current_step_id.as_str();
    let Some(key) = step_ids::section_key(step_id) else {
        return Err(bad_request_error("Unknown step", step_id));
    };

    let mut merged = session
        .context
        .get_value(key)
        .filter(Value::is_object)
        .unwrap_or_else(|| json!({}));
    match (data, merged.as_object_mut()) {
        (Value::Object(fields), Some(target)) => target.extend(fields),
        (Value::Null, _) => {}
        (_, _) => return Err(bad_request_error("Step data must be an object", step_id)),
    }

    match step_id {
        step_ids::BASICS => store_section::<BasicsFormData>(session, key, merged).await,
        step_ids::COUNTERPARTY => store_section::<CounterpartyFormData>(session, key, merged).await,
        step_ids::TIER => store_section::<TierFormData>(session, key, merged).await,
        _ => store_section::<ReviewFormData>(session, key, merged).await,
    }
}

async fn store_section<T>(session: &Session, key: &str, value: Value) -> Result<(), ApiError>
where
    T: DeserializeOwned + Serialize,
{
    let section: T = serde_json::from_value(value).map_err(|e| {
        info!("Session {} sent malformed {} data: {}", session.id, key, e);
        bad_request_error("Validation failed", &e.to_string())
    })?;
    session.context.set(key, section).await.map_err(|e| {
        error!("Failed to store {} for session {}: {}", key, session.id, e);
        internal_error()
    })
}

async fn quick_start(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuickStartRequest>,
) -> ApiResult<Value> {
    validate_quick_start(&request).map_err(|errors| validation_error(&errors))?;

    if !state.config.submit_delay.is_zero() {
        tokio::time::sleep(state.config.submit_delay).await;
    }

    let id = generate_quick_case_id();
    info!(
        id = %id,
        plan = ?request.plan,
        doc_count = request.docs.len(),
        "quick start request received"
    );
    Ok(Json(json!({
        "ok": true,
        "id": id,
        "message": "Request received. A specialist will contact you shortly."
    })))
}

async fn contact_form(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> ApiResult<Value> {
    validate_contact(&request).map_err(|errors| validation_error(&errors))?;

    if !state.config.submit_delay.is_zero() {
        tokio::time::sleep(state.config.submit_delay).await;
    }

    info!(
        topic = ?request.topic,
        case_id = ?request.case_id,
        has_company = !request.company.trim().is_empty(),
        "contact message received"
    );
    Ok(Json(json!({
        "ok": true,
        "message": "Thanks for reaching out. We'll get back to you within one business day."
    })))
}

async fn save_consent(
    headers: HeaderMap,
    ApiJson(request): ApiJson<ConsentRequest>,
) -> Result<Response, ApiError> {
    let mut consent = CookieConsent::load(CookieHeaderStore::from_headers(&headers));
    match request.action {
        ConsentAction::AcceptAll => consent.accept_all(),
        ConsentAction::EssentialOnly => consent.accept_essential_only(),
        ConsentAction::Reset => consent.reset(),
        ConsentAction::Custom => {
            let Some(preferences) = request.preferences else {
                return Err(bad_request_error(
                    "Missing preferences",
                    "custom consent needs a preferences object",
                ));
            };
            consent.save_custom(preferences);
        }
    }

    let preferences = consent.preferences();
    info!(action = ?request.action, ?preferences, "cookie consent saved");

    let mut response = Json(json!({
        "ok": true,
        "preferences": preferences
    }))
    .into_response();
    for cookie in consent.into_store().set_cookie_headers() {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

async fn track_event(
    headers: HeaderMap,
    ApiJson(request): ApiJson<EventRequest>,
) -> ApiResult<Value> {
    if request.name.trim().is_empty() {
        return Err(bad_request_error("Event name is required", ""));
    }

    let consent = CookieConsent::load(CookieHeaderStore::from_headers(&headers));
    let outcome = track_named(&consent, request.name.trim(), request.properties);
    Ok(Json(json!({
        "ok": true,
        "tracked": outcome == TrackOutcome::Recorded
    })))
}

async fn maps_config(State(state): State<AppState>) -> Json<MapsConfig> {
    Json(MapsConfig::from_config(&state.config))
}
