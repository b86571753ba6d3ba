//! Axum routes for the converter.
//!
//! Handlers only validate input, pick the token out of the auth service and
//! shape responses; everything else is delegated to the core services.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use super::api_error::ApiError;
use super::pages;
use crate::core::auth::{AuthError, AuthService, OAuthProvider, TokenPersistence};
use crate::core::slides::{default_title, presentation_url, SlidesApi, SlidesService};

const INVALID_BULLETS: &str = "Invalid request: bullets array is required";
const INVALID_TEXT: &str = "Invalid request: text is required";

pub type Auth = AuthService<Box<dyn OAuthProvider>, Box<dyn TokenPersistence>>;
pub type Slides = SlidesService<Box<dyn SlidesApi>>;

/// Shared state for all routes.
pub struct AppState {
    pub auth: Auth,
    pub slides: Slides,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/auth", get(auth_start))
        .route("/auth/callback", get(auth_callback))
        .route("/auth/refresh", post(auth_refresh))
        .route(
            "/api/create-slides",
            post(create_slides).get(create_slides_wrong_method),
        )
        .route("/api/presentations/:id", get(get_presentation))
        .route(
            "/api/presentations/:id/slides/:slide_id/text",
            post(add_text),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// -- Payloads --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlidesRequest {
    pub bullets: Option<Vec<String>>,
    pub presentation_title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlidesResponse {
    pub success: bool,
    pub presentation_id: String,
    pub presentation_url: String,
    pub slides_created: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSummary {
    pub presentation_id: String,
    pub title: Option<String>,
    pub slide_ids: Vec<String>,
    pub slide_count: usize,
    pub presentation_url: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTextRequest {
    pub text: Option<String>,
}

/// Query string Google appends to the redirect URI.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

// -- Handlers --

async fn index() -> Html<&'static str> {
    Html(pages::INDEX_PAGE)
}

async fn auth_start(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::auth_start_page(&state.auth.authorization_url()))
}

async fn auth_callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    if let Some(reason) = query.error {
        return (
            StatusCode::BAD_REQUEST,
            format!("Authorization was not granted: {}", reason),
        )
            .into_response();
    }

    let Some(code) = query.code.filter(|c| !c.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing authorization code").into_response();
    };

    match state.auth.complete_authorization(&code).await {
        Ok(_) => Html(pages::AUTH_SUCCESS_PAGE).into_response(),
        Err(e) => {
            tracing::error!("Error exchanging code for token: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Authentication failed: {}", e),
            )
                .into_response()
        }
    }
}

async fn auth_refresh(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    match state.auth.refresh().await {
        Ok(token) => Ok(Json(json!({
            "success": true,
            "expiresIn": token.expires_in,
        }))),
        Err(AuthError::NotAuthenticated) => Err(ApiError::not_authenticated()),
        Err(e @ AuthError::NoRefreshToken) => Err(ApiError::AuthenticationRequired(e.to_string())),
        Err(e) => Err(ApiError::upstream("Failed to refresh token", e)),
    }
}

async fn create_slides(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateSlidesRequest>, JsonRejection>,
) -> Result<Json<CreateSlidesResponse>, ApiError> {
    let Ok(Json(request)) = payload else {
        return Err(ApiError::Validation(INVALID_BULLETS.to_string()));
    };
    let bullets = match request.bullets {
        Some(bullets) if !bullets.is_empty() => bullets,
        _ => return Err(ApiError::Validation(INVALID_BULLETS.to_string())),
    };

    let access_token = state
        .auth
        .access_token()
        .await
        .ok_or_else(ApiError::not_authenticated)?;

    let title = request
        .presentation_title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| default_title(Utc::now()));

    let deck = state
        .slides
        .create_from_bullets(&access_token, &title, &bullets)
        .await
        .map_err(|e| ApiError::upstream("Failed to create slides", e))?;

    Ok(Json(CreateSlidesResponse {
        success: true,
        presentation_id: deck.presentation_id,
        presentation_url: deck.presentation_url,
        slides_created: deck.slides_created,
    }))
}

/// Creation is POST only, but unauthenticated callers learn that first.
async fn create_slides_wrong_method(State(state): State<Arc<AppState>>) -> Response {
    if !state.auth.is_authenticated().await {
        return ApiError::not_authenticated().into_response();
    }

    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(json!({ "error": "Use POST to create slides" })),
    )
        .into_response()
}

async fn get_presentation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PresentationSummary>, ApiError> {
    let access_token = state
        .auth
        .access_token()
        .await
        .ok_or_else(ApiError::not_authenticated)?;

    let presentation = state
        .slides
        .get_presentation(&access_token, &id)
        .await
        .map_err(|e| ApiError::upstream("Failed to fetch presentation", e))?;

    let slide_ids: Vec<String> = presentation
        .slides
        .iter()
        .filter_map(|s| s.object_id.clone())
        .collect();

    Ok(Json(PresentationSummary {
        presentation_url: presentation_url(&presentation.presentation_id),
        presentation_id: presentation.presentation_id,
        title: presentation.title,
        slide_count: presentation.slides.len(),
        slide_ids,
    }))
}

async fn add_text(
    State(state): State<Arc<AppState>>,
    Path((id, slide_id)): Path<(String, String)>,
    payload: Result<Json<AddTextRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let text = match payload {
        Ok(Json(AddTextRequest { text: Some(text) })) if !text.is_empty() => text,
        _ => return Err(ApiError::Validation(INVALID_TEXT.to_string())),
    };

    let access_token = state
        .auth
        .access_token()
        .await
        .ok_or_else(ApiError::not_authenticated)?;

    let shape_id = state
        .slides
        .add_text_to_slide(&access_token, &id, &slide_id, &text)
        .await
        .map_err(|e| ApiError::upstream("Failed to add text", e))?;

    Ok(Json(json!({ "success": true, "shapeId": shape_id })))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "authenticated": state.auth.is_authenticated().await,
    }))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::Token;
    use crate::core::slides::batch_builder::SequentialIds;
    use crate::infra::google_auth::{GoogleOAuthClient, JsonTokenFile};
    use crate::infra::google_slides::GoogleSlidesClient;
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt;
    use wiremock::matchers::{bearer_token, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Everything a route test needs: the app, the mock upstream and the
    /// directory holding the token file.
    struct Harness {
        app: Router,
        server: MockServer,
        dir: TempDir,
    }

    fn saved_token() -> Token {
        Token {
            access_token: "ya29.valid".to_string(),
            refresh_token: Some("1//refresh".to_string()),
            expires_in: 3599,
            token_type: "Bearer".to_string(),
            scope: None,
        }
    }

    async fn harness(token: Option<Token>) -> Harness {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let token_file = JsonTokenFile::new(dir.path().join("tokens.json"));
        if let Some(token) = token {
            token_file.save(&token).await.unwrap();
        }

        let provider: Box<dyn OAuthProvider> = Box::new(
            GoogleOAuthClient::new("cid", "secret", "http://localhost:8000/auth/callback")
                .with_token_endpoint(&format!("{}/token", server.uri())),
        );
        let persistence: Box<dyn TokenPersistence> = Box::new(token_file);
        let api: Box<dyn SlidesApi> =
            Box::new(GoogleSlidesClient::new().with_base_url(&server.uri()));

        let state = Arc::new(AppState {
            auth: AuthService::new(provider, persistence).await,
            slides: SlidesService::with_id_generator(api, SequentialIds::with_seed("t")),
        });

        Harness {
            app: router(state),
            server,
            dir,
        }
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    async fn body_text(response: Response) -> String {
        String::from_utf8(body_bytes(response).await).unwrap()
    }

    async fn upstream_calls(server: &MockServer) -> usize {
        server.received_requests().await.unwrap_or_default().len()
    }

    // -- Health and pages --

    #[tokio::test]
    async fn health_reports_unauthenticated() {
        let h = harness(None).await;

        let response = h.app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "ok", "authenticated": false })
        );
    }

    #[tokio::test]
    async fn health_reports_restored_token() {
        let h = harness(Some(saved_token())).await;

        let response = h.app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(body_json(response).await["authenticated"], true);
    }

    #[tokio::test]
    async fn index_and_auth_pages_render() {
        let h = harness(None).await;

        let index = h.app.clone().oneshot(get_request("/")).await.unwrap();
        assert_eq!(index.status(), StatusCode::OK);
        assert!(body_text(index).await.contains("/api/create-slides"));

        let auth = h.app.oneshot(get_request("/auth")).await.unwrap();
        assert_eq!(auth.status(), StatusCode::OK);
        let page = body_text(auth).await;
        assert!(page.contains("https://accounts.google.com/o/oauth2/v2/auth?client_id=cid"));
        assert!(page.contains("access_type=offline"));
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let h = harness(None).await;
        let response = h.app.oneshot(get_request("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // -- Authorization callback --

    #[tokio::test]
    async fn callback_without_code_is_400() {
        let h = harness(None).await;

        let response = h.app.oneshot(get_request("/auth/callback")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Missing authorization code");
        assert_eq!(upstream_calls(&h.server).await, 0);
    }

    #[tokio::test]
    async fn callback_with_denied_consent_is_400() {
        let h = harness(None).await;

        let response = h
            .app
            .oneshot(get_request("/auth/callback?error=access_denied"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("access_denied"));
        assert_eq!(upstream_calls(&h.server).await, 0);
    }

    #[tokio::test]
    async fn callback_exchanges_code_and_persists_token() {
        let h = harness(None).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "ya29.fresh",
                "refresh_token": "1//new",
                "expires_in": 3599,
                "token_type": "Bearer"
            })))
            .expect(1)
            .mount(&h.server)
            .await;

        let response = h
            .app
            .clone()
            .oneshot(get_request("/auth/callback?code=4%2Fabc&scope=x"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Authentication Successful!"));

        let saved = JsonTokenFile::new(h.dir.path().join("tokens.json"))
            .load()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.access_token, "ya29.fresh");

        let health = h.app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(body_json(health).await["authenticated"], true);
    }

    #[tokio::test]
    async fn callback_exchange_failure_is_500() {
        let h = harness(None).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid_grant"))
            .mount(&h.server)
            .await;

        let response = h
            .app
            .oneshot(get_request("/auth/callback?code=used"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = body_text(response).await;
        assert!(text.starts_with("Authentication failed:"));
        assert!(text.contains("invalid_grant"));
    }

    // -- Refresh --

    #[tokio::test]
    async fn refresh_without_token_is_401() {
        let h = harness(None).await;

        let response = h
            .app
            .oneshot(post_json("/auth/refresh", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(upstream_calls(&h.server).await, 0);
    }

    #[tokio::test]
    async fn refresh_keeps_saved_refresh_token() {
        let h = harness(Some(saved_token())).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "ya29.renewed",
                "expires_in": 1800,
                "token_type": "Bearer"
            })))
            .expect(1)
            .mount(&h.server)
            .await;

        let response = h
            .app
            .oneshot(post_json("/auth/refresh", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "expiresIn": 1800 })
        );
        let saved = JsonTokenFile::new(h.dir.path().join("tokens.json"))
            .load()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.access_token, "ya29.renewed");
        assert_eq!(saved.refresh_token.as_deref(), Some("1//refresh"));
    }

    // -- Create slides --

    #[tokio::test]
    async fn empty_bullets_are_400_without_upstream_calls() {
        let h = harness(Some(saved_token())).await;

        let response = h
            .app
            .oneshot(post_json("/api/create-slides", json!({ "bullets": [] })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], INVALID_BULLETS);
        assert_eq!(upstream_calls(&h.server).await, 0);
    }

    #[tokio::test]
    async fn missing_or_mistyped_bullets_are_400() {
        let h = harness(Some(saved_token())).await;

        for body in [
            json!({}),
            json!({ "bullets": "not a list" }),
            json!({ "bullets": [1, 2] }),
        ] {
            let response = h
                .app
                .clone()
                .oneshot(post_json("/api/create-slides", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        let not_json = Request::builder()
            .method("POST")
            .uri("/api/create-slides")
            .header("content-type", "application/json")
            .body(Body::from("{bullets"))
            .unwrap();
        let response = h.app.oneshot(not_json).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(upstream_calls(&h.server).await, 0);
    }

    #[tokio::test]
    async fn create_without_token_is_401() {
        let h = harness(None).await;

        let response = h
            .app
            .oneshot(post_json("/api/create-slides", json!({ "bullets": ["A"] })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["error"],
            "Not authenticated. Please authenticate first."
        );
        assert_eq!(upstream_calls(&h.server).await, 0);
    }

    #[tokio::test]
    async fn get_create_slides_without_token_is_401() {
        let h = harness(None).await;

        let response = h
            .app
            .oneshot(get_request("/api/create-slides"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(upstream_calls(&h.server).await, 0);
    }

    #[tokio::test]
    async fn get_create_slides_with_token_is_405() {
        let h = harness(Some(saved_token())).await;

        let response = h
            .app
            .oneshot(get_request("/api/create-slides"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");
    }

    #[tokio::test]
    async fn create_slides_end_to_end() {
        let h = harness(Some(saved_token())).await;

        Mock::given(method("POST"))
            .and(path("/presentations"))
            .and(bearer_token("ya29.valid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "presentationId": "pres123",
                "title": "Deck",
                "slides": [{ "objectId": "p" }]
            })))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/presentations/pres123:batchUpdate"))
            .and(bearer_token("ya29.valid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "presentationId": "pres123",
                "replies": []
            })))
            .expect(1)
            .mount(&h.server)
            .await;

        let response = h
            .app
            .oneshot(post_json(
                "/api/create-slides",
                json!({ "bullets": ["A", "B"], "presentationTitle": "Deck" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "presentationId": "pres123",
                "presentationUrl": "https://docs.google.com/presentation/d/pres123/edit",
                "slidesCreated": 2
            })
        );

        let received = h.server.received_requests().await.unwrap();
        let batch = received
            .iter()
            .find(|r| r.url.path().ends_with(":batchUpdate"))
            .unwrap();
        let body: Value = serde_json::from_slice(&batch.body).unwrap();
        let requests = body["requests"].as_array().unwrap();
        assert_eq!(requests.len(), 8);
        assert_eq!(requests[2]["insertText"]["text"], "A");
        assert_eq!(requests[6]["insertText"]["text"], "B");
        assert_eq!(requests[4]["createSlide"]["insertionIndex"], 2);
    }

    #[tokio::test]
    async fn missing_title_gets_a_default() {
        let h = harness(Some(saved_token())).await;

        Mock::given(method("POST"))
            .and(path("/presentations"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "presentationId": "p1" })),
            )
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/presentations/p1:batchUpdate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&h.server)
            .await;

        let response = h
            .app
            .oneshot(post_json("/api/create-slides", json!({ "bullets": ["A"] })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let received = h.server.received_requests().await.unwrap();
        let create: Value = serde_json::from_slice(&received[0].body).unwrap();
        assert!(create["title"]
            .as_str()
            .unwrap()
            .starts_with("Dynalist Import - "));
    }

    #[tokio::test]
    async fn upstream_failure_is_500_with_details() {
        let h = harness(Some(saved_token())).await;

        Mock::given(method("POST"))
            .and(path("/presentations"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Request had invalid authentication credentials"))
            .mount(&h.server)
            .await;

        let response = h
            .app
            .oneshot(post_json("/api/create-slides", json!({ "bullets": ["A"] })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to create slides");
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("invalid authentication credentials"));
    }

    // -- Presentations --

    #[tokio::test]
    async fn presentation_summary_lists_slides() {
        let h = harness(Some(saved_token())).await;

        Mock::given(method("GET"))
            .and(path("/presentations/pres123"))
            .and(bearer_token("ya29.valid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "presentationId": "pres123",
                "title": "Deck",
                "slides": [{ "objectId": "p" }, { "objectId": "slide_t_0" }]
            })))
            .mount(&h.server)
            .await;

        let response = h
            .app
            .oneshot(get_request("/api/presentations/pres123"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "presentationId": "pres123",
                "title": "Deck",
                "slideIds": ["p", "slide_t_0"],
                "slideCount": 2,
                "presentationUrl": "https://docs.google.com/presentation/d/pres123/edit"
            })
        );
    }

    #[tokio::test]
    async fn encoded_slashes_in_presentation_id_stay_under_presentations() {
        let h = harness(Some(saved_token())).await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "presentationId": "x" })),
            )
            .mount(&h.server)
            .await;

        let response = h
            .app
            .oneshot(get_request("/api/presentations/..%2F..%2Fother%3Fx=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let received = h.server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0].url.path(),
            "/presentations/..%2F..%2Fother%3Fx=1"
        );
        assert_eq!(received[0].url.query(), None);
    }

    #[tokio::test]
    async fn add_text_returns_new_shape_id() {
        let h = harness(Some(saved_token())).await;

        Mock::given(method("POST"))
            .and(path("/presentations/pres123:batchUpdate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "replies": [{}, {}] })))
            .expect(1)
            .mount(&h.server)
            .await;

        let response = h
            .app
            .oneshot(post_json(
                "/api/presentations/pres123/slides/p/text",
                json!({ "text": "Speaker note" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "shapeId": "textbox_t_0" })
        );
    }

    #[tokio::test]
    async fn add_text_requires_text() {
        let h = harness(Some(saved_token())).await;

        let response = h
            .app
            .oneshot(post_json(
                "/api/presentations/pres123/slides/p/text",
                json!({ "text": "" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(upstream_calls(&h.server).await, 0);
    }
}
