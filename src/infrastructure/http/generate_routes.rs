//! Generation API routes - MythicMobs configuration from a text description

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Method,
    Json,
};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use super::ApiError;
use crate::application::dto::{GenerateRequestDto, GeneratedConfigDto};
use crate::application::ports::outbound::LlmError;
use crate::application::services::{GenerationError, MobGenerationService};
use crate::domain::value_objects::GenerationRequest;
use crate::infrastructure::anthropic::AnthropicClient;
use crate::infrastructure::state::AppState;

/// Generate mob, skill, item and drop configuration
pub async fn generate_mobs(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequestDto>, JsonRejection>,
) -> Result<Json<GeneratedConfigDto>, ApiError> {
    let span = tracing::info_span!("generate", request_id = %Uuid::new_v4());
    generate(state, payload).instrument(span).await
}

async fn generate(
    state: Arc<AppState>,
    payload: Result<Json<GenerateRequestDto>, JsonRejection>,
) -> Result<Json<GeneratedConfigDto>, ApiError> {
    let Json(dto) = payload.map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    let request =
        GenerationRequest::try_from(dto).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let Some(api_key) = state.config.resolve_api_key() else {
        tracing::error!("{} not set", state.config.api_key_env);
        return Err(ApiError::Configuration);
    };

    tracing::info!(
        category = %request.category,
        libs_disguises = request.use_libs_disguises,
        items = request.include_items,
        drops = request.include_drops,
        advanced_skills = request.advanced_skills,
        has_reference = request.reference.is_some(),
        "Generating MythicMobs configuration"
    );

    let client = AnthropicClient::new(
        state.http_client.clone(),
        &state.config.anthropic_base_url,
        api_key,
    );
    let service = MobGenerationService::new(client);

    let config = service.generate(&request).await.map_err(|e| {
        match &e {
            GenerationError::Llm(LlmError::Api { status, body }) => {
                tracing::error!(status, "Anthropic API error: {}", body);
            }
            other => tracing::error!("Error in generate handler: {}", other),
        }
        ApiError::from(e)
    })?;

    tracing::info!(
        mobs_len = config.mobs.len(),
        skills_len = config.skills.len(),
        items_len = config.items.len(),
        drops_len = config.drops.len(),
        "Generation complete"
    );

    Ok(Json(config.into()))
}

/// Any method other than POST; the body is never read
pub async fn method_not_allowed(method: Method) -> ApiError {
    tracing::debug!("Rejected {} on generation route", method);
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{header as header_matcher, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::application::services::llm::section_parser::SKILLS_FALLBACK_PLACEHOLDER;
    use crate::infrastructure::anthropic::ANTHROPIC_MODEL;
    use crate::infrastructure::config::AppConfig;
    use crate::infrastructure::http::create_routes;

    /// Router whose API key lives in a variable private to this call
    fn app(base_url: &str, api_key: Option<&str>) -> Router {
        let api_key_env = format!("MYTHICGEN_TEST_KEY_{}", Uuid::new_v4().simple());
        if let Some(key) = api_key {
            std::env::set_var(&api_key_env, key);
        }
        let config = AppConfig {
            server_port: 0,
            anthropic_base_url: base_url.to_string(),
            api_key_env,
        };
        let state = AppState::new(config).expect("state");
        create_routes().with_state(Arc::new(state))
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, body)
    }

    fn anthropic_reply(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "model": ANTHROPIC_MODEL,
            "content": [{ "type": "text", "text": text }],
            "stop_reason": "end_turn"
        }))
    }

    /// Upstream that fails the test if it is ever called
    async fn untouchable_upstream() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_non_post_methods_rejected_without_upstream_call() {
        let server = untouchable_upstream().await;

        for verb in ["GET", "PUT", "DELETE", "PATCH"] {
            let request = Request::builder()
                .method(verb)
                .uri("/api/generate")
                .body(Body::from("not even json"))
                .expect("request");

            let (status, body) = send(app(&server.uri(), Some("sk-test")), request).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(body, json!({ "error": "Method not allowed" }));
        }
    }

    #[tokio::test]
    async fn test_missing_or_blank_prompt_is_bad_request() {
        let server = untouchable_upstream().await;

        for payload in [
            json!({ "category": "boss" }),
            json!({ "category": "boss", "prompt": "" }),
            json!({ "category": "boss", "prompt": "   " }),
            json!({ "category": "boss", "prompt": ["not", "text"] }),
        ] {
            let (status, body) = send(app(&server.uri(), Some("sk-test")), post_json(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Prompt is required" }));
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let server = untouchable_upstream().await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ nope"))
            .expect("request");

        let (status, body) = send(app(&server.uri(), Some("sk-test")), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_generic_server_error() {
        let server = untouchable_upstream().await;

        let (status, body) = send(
            app(&server.uri(), None),
            post_json(json!({ "category": "boss", "prompt": "lich" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Server configuration error" }));
    }

    #[tokio::test]
    async fn test_successful_generation_returns_sections() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(anthropic_reply(
                "=== MOBS ===\nLich:\n  Health: 4000\n=== SKILLS ===\nFrostNova:\n=== ITEMS ===\nStaff:\n=== DROPS ===\nLichDrops:",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = send(
            app(&server.uri(), Some("sk-test")),
            post_json(json!({
                "category": "boss",
                "prompt": "An ancient lich",
                "includeItems": true,
                "includeDrops": true
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "mobs": "Lich:\n  Health: 4000",
                "skills": "FrostNova:",
                "items": "Staff:",
                "drops": "LichDrops:"
            })
        );
    }

    #[tokio::test]
    async fn test_outbound_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header_matcher("x-api-key", "sk-shape"))
            .and(header_matcher("anthropic-version", "2023-06-01"))
            .respond_with(anthropic_reply("Golem:\n  Type: IRON_GOLEM"))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = send(
            app(&server.uri(), Some("sk-shape")),
            post_json(json!({ "category": "titan", "prompt": "A stone golem", "reference": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mobs"], "Golem:\n  Type: IRON_GOLEM");
        assert_eq!(body["skills"], SKILLS_FALLBACK_PLACEHOLDER);
        assert_eq!(body["items"], "");
        assert_eq!(body["drops"], "");

        let received = server.received_requests().await.expect("recording enabled");
        assert_eq!(received.len(), 1);
        let sent_body: Value = serde_json::from_slice(&received[0].body).expect("json");
        assert_eq!(sent_body["model"], ANTHROPIC_MODEL);
        assert_eq!(sent_body["max_tokens"], 8000);
        assert_eq!(sent_body["messages"].as_array().map(Vec::len), Some(1));
        assert_eq!(sent_body["messages"][0]["role"], "user");

        let user_prompt = sent_body["messages"][0]["content"].as_str().expect("text");
        assert!(user_prompt.contains("CATEGORY: titan\n"));
        assert!(user_prompt.contains("DESCRIPTION: A stone golem\n"));
        assert!(!user_prompt.contains("REFERENCE:"));

        let system_prompt = sent_body["system"].as_str().expect("text");
        assert!(system_prompt.contains("REGULAR MOBS:"));
        assert!(system_prompt.contains("BASIC SKILLS:"));
    }

    #[tokio::test]
    async fn test_loosely_typed_optional_fields_are_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(anthropic_reply("=== MOBS ===\nZombie:\n=== SKILLS ===\nBite:"))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = send(
            app(&server.uri(), Some("sk-test")),
            post_json(json!({
                "prompt": "zombie",
                "category": 5,
                "reference": 7,
                "includeItems": 1,
                "useLibsDisguises": "true"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mobs"], "Zombie:");

        let received = server.received_requests().await.expect("recording enabled");
        let sent_body: Value = serde_json::from_slice(&received[0].body).expect("json");
        let user_prompt = sent_body["messages"][0]["content"].as_str().expect("text");
        assert!(user_prompt.contains("CATEGORY: 5\n"));
        assert!(user_prompt.contains("REFERENCE: Base this on 7\n"));

        let system_prompt = sent_body["system"].as_str().expect("text");
        assert!(system_prompt.contains("REGULAR MOBS:"));
        assert!(system_prompt.contains("=== ITEMS ==="));
        assert!(system_prompt.contains("LIBSDISGUISES:"));
    }

    #[tokio::test]
    async fn test_upstream_failure_relays_status_and_body() {
        let server = MockServer::start().await;
        let upstream_body = r#"{"type":"error","error":{"type":"rate_limit_error","message":"Rate limited"}}"#;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(429).set_body_string(upstream_body))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = send(
            app(&server.uri(), Some("sk-test")),
            post_json(json!({ "prompt": "slime" })),
        )
        .await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body,
            json!({ "error": "API request failed", "details": upstream_body })
        );
    }

    #[tokio::test]
    async fn test_unusable_reply_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let (status, body) = send(
            app(&server.uri(), Some("sk-test")),
            post_json(json!({ "prompt": "slime" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body["message"].is_string());
    }
}
