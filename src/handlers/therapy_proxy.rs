//! Same-origin proxy for the therapy service
//!
//! The browser talks to `/api/therapy/*`; these handlers forward to the
//! configured upstream so its URL never has to be exposed to the client.

use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;

use crate::domain::models::{ContinueConversationRequest, StartConversationRequest, TherapyReply, TherapyStats};
use crate::infrastructure::therapy::{TherapyBackend, TherapyError, CONTINUE_FAILED, START_FAILED};
use crate::shared::logging::{log_therapy_error, log_therapy_forward, log_therapy_reply};

/// Shared state for the therapy routes, added as an `Extension`
#[derive(Clone)]
pub struct TherapyProxyState {
    pub backend: Arc<dyn TherapyBackend>,
}

impl TherapyProxyState {
    pub fn new(backend: impl TherapyBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProxyErrorBody {
    pub error: String,
}

/// Upstream failure mapped to an HTTP response
#[derive(Debug)]
pub struct ProxyError {
    pub status: StatusCode,
    pub message: String,
}

impl ProxyError {
    fn from_therapy(endpoint: &str, error: TherapyError, user_message: &str) -> Self {
        log_therapy_error(endpoint, &error.to_string());
        match error {
            TherapyError::NoActiveSession => Self {
                status: StatusCode::BAD_REQUEST,
                message: error.to_string(),
            },
            _ => Self {
                status: StatusCode::BAD_GATEWAY,
                message: user_message.to_string(),
            },
        }
    }

    fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status, Json(ProxyErrorBody { error: self.message })).into_response()
    }
}

/// POST /api/therapy/start
pub async fn start_conversation_handler(
    Extension(state): Extension<TherapyProxyState>,
    Json(body): Json<StartConversationRequest>,
) -> Result<Json<TherapyReply>, ProxyError> {
    if body.user_input.trim().is_empty() {
        return Err(ProxyError::bad_request("Message cannot be empty"));
    }
    log_therapy_forward("start_conversation", None);

    let reply = state
        .backend
        .start_conversation(&body.user_input)
        .await
        .map_err(|e| ProxyError::from_therapy("start_conversation", e, START_FAILED))?;

    log_therapy_reply("start_conversation", &reply.session_id, &reply.stage, &reply.api_source);
    Ok(Json(reply))
}

/// POST /api/therapy/continue
pub async fn continue_conversation_handler(
    Extension(state): Extension<TherapyProxyState>,
    Json(body): Json<ContinueConversationRequest>,
) -> Result<Json<TherapyReply>, ProxyError> {
    if body.user_input.trim().is_empty() {
        return Err(ProxyError::bad_request("Message cannot be empty"));
    }
    log_therapy_forward("continue_conversation", Some(&body.session_id));

    let reply = state
        .backend
        .continue_conversation(&body.session_id, &body.user_input)
        .await
        .map_err(|e| ProxyError::from_therapy("continue_conversation", e, CONTINUE_FAILED))?;

    log_therapy_reply("continue_conversation", &reply.session_id, &reply.stage, &reply.api_source);
    Ok(Json(reply))
}

/// GET /api/therapy/stats/{session_id}
pub async fn therapy_stats_handler(
    Extension(state): Extension<TherapyProxyState>,
    Path(session_id): Path<String>,
) -> Result<Json<TherapyStats>, ProxyError> {
    log_therapy_forward("get_stats", Some(&session_id));

    state
        .backend
        .get_stats(&session_id)
        .await
        .map(Json)
        .map_err(|e| ProxyError::from_therapy("get_stats", e, "Could not load session stats"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        routing::{get, post},
        Router,
    };
    use tower::ServiceExt;

    /// In-process stand-in for the therapy service
    struct FakeBackend {
        fail: bool,
    }

    #[async_trait]
    impl TherapyBackend for FakeBackend {
        async fn start_conversation(&self, user_input: &str) -> Result<TherapyReply, TherapyError> {
            if self.fail {
                return Err(TherapyError::Http(500));
            }
            Ok(TherapyReply {
                response: format!("You said: {}", user_input),
                session_id: "session-12345678".into(),
                interaction_count: 1,
                stage: "rapport".into(),
                api_source: "gemini".into(),
                success: true,
                error: None,
            })
        }

        async fn continue_conversation(
            &self,
            session_id: &str,
            user_input: &str,
        ) -> Result<TherapyReply, TherapyError> {
            if session_id.is_empty() {
                return Err(TherapyError::NoActiveSession);
            }
            if self.fail {
                return Err(TherapyError::Service("quota exceeded".into()));
            }
            Ok(TherapyReply {
                response: format!("Go on: {}", user_input),
                session_id: session_id.into(),
                interaction_count: 2,
                stage: "exploration".into(),
                api_source: "gemini".into(),
                success: true,
                error: None,
            })
        }

        async fn get_stats(&self, session_id: &str) -> Result<TherapyStats, TherapyError> {
            Ok(TherapyStats {
                gemini_api_count: 3,
                gemini_api_limit: 50,
                gemini_api_remaining: 47,
                current_api_source: "gemini".into(),
                session_id: session_id.into(),
            })
        }
    }

    fn make_router(fail: bool) -> Router {
        Router::new()
            .route("/api/therapy/start", post(start_conversation_handler))
            .route("/api/therapy/continue", post(continue_conversation_handler))
            .route("/api/therapy/stats/{session_id}", get(therapy_stats_handler))
            .layer(Extension(TherapyProxyState::new(FakeBackend { fail })))
    }

    fn make_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_start_forwards_reply() {
        let response = make_router(false)
            .oneshot(make_post("/api/therapy/start", r#"{"user_input":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["response"], "You said: hello");
        assert_eq!(json["session_id"], "session-12345678");
    }

    #[tokio::test]
    async fn test_start_failure_is_bad_gateway() {
        let response = make_router(true)
            .oneshot(make_post("/api/therapy/start", r#"{"user_input":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"], START_FAILED);
    }

    #[tokio::test]
    async fn test_continue_failure_uses_continue_message() {
        let response = make_router(true)
            .oneshot(make_post(
                "/api/therapy/continue",
                r#"{"session_id":"s1","user_input":"more"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"], CONTINUE_FAILED);
    }

    #[tokio::test]
    async fn test_continue_without_session_is_bad_request() {
        let response = make_router(false)
            .oneshot(make_post(
                "/api/therapy/continue",
                r#"{"session_id":"","user_input":"more"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let response = make_router(false)
            .oneshot(make_post("/api/therapy/start", r#"{"user_input":"   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats() {
        let response = make_router(false)
            .oneshot(
                Request::builder()
                    .uri("/api/therapy/stats/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["session_id"], "abc");
        assert_eq!(json["gemini_api_remaining"], 47);
    }
}
