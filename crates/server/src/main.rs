use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use mailer::{SmtpConfig, SmtpMailSender};
use relay_api::{relay_chat_message, RelayContext};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{ChatResponse, ChatSubmission},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info};

mod config;

use config::load_settings;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
struct AppState {
    relay: RelayContext,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let mailer = SmtpMailSender::new(&SmtpConfig {
        host: settings.smtp_host.clone(),
        port: settings.smtp_port,
        username: settings.smtp_username.clone(),
        password: settings.smtp_password.clone(),
        from_address: settings.smtp_from_address.clone(),
        from_name: settings.smtp_from_name.clone(),
        send_timeout: Duration::from_secs(settings.smtp_send_timeout_seconds),
    })
    .map_err(|e| {
        error!(%e, "failed to build SMTP transport; verify smtp_host and credentials");
        anyhow::anyhow!(e)
    })?;

    let state = AppState {
        relay: RelayContext {
            mailer: Arc::new(mailer),
            operator_email: settings.operator_email,
            site_name: settings.site_name,
        },
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "chat relay listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/chat", post(submit_chat))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn submit_chat(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ChatSubmission>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ChatResponse>)> {
    match relay_chat_message(&state.relay, submission).await {
        Ok(message) => Ok(Json(ChatResponse::ok(message))),
        Err(err) => {
            let api: ApiError = err.into();
            let status = match api.code {
                ErrorCode::Validation => StatusCode::BAD_REQUEST,
                ErrorCode::Delivery | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((status, Json(ChatResponse::err(api.message))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body, body::Body, http::Request};
    use mailer::{DeliveryError, MailSender, OutboundEmail};
    use tower::ServiceExt;

    struct FakeSender {
        fail: bool,
    }

    #[async_trait]
    impl MailSender for FakeSender {
        async fn send(&self, _email: OutboundEmail) -> Result<(), DeliveryError> {
            if self.fail {
                Err(DeliveryError::Transport("smtp unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    fn test_app(fail_sends: bool) -> Router {
        build_router(Arc::new(AppState {
            relay: RelayContext {
                mailer: Arc::new(FakeSender { fail: fail_sends }),
                operator_email: "info@example.com".into(),
                site_name: "Pure Prints Media".into(),
            },
        }))
    }

    fn chat_request(json: serde_json::Value) -> Request<Body> {
        Request::post("/chat")
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request")
    }

    async fn response_body(response: axum::response::Response) -> ChatResponse {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let request = Request::get("/healthz")
            .body(Body::empty())
            .expect("request");
        let response = test_app(false).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(bytes.as_ref(), b"ok");
    }

    #[tokio::test]
    async fn valid_submission_returns_success_when_transport_works() {
        let request = chat_request(serde_json::json!({
            "name": "Jo", "email": "jo@example.com", "message": "Hi"
        }));
        let response = test_app(false).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let dto = response_body(response).await;
        assert!(dto.success);
        assert_eq!(dto.message.as_deref(), Some(relay_api::SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn valid_submission_returns_500_when_transport_fails() {
        let request = chat_request(serde_json::json!({
            "name": "Jo", "email": "jo@example.com", "message": "Hi"
        }));
        let response = test_app(true).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let dto = response_body(response).await;
        assert!(!dto.success);
        assert!(dto.error.is_some());
    }

    #[tokio::test]
    async fn missing_email_yields_400_naming_the_field() {
        let request = chat_request(serde_json::json!({
            "name": "Jo", "message": "Hi"
        }));
        let response = test_app(false).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let dto = response_body(response).await;
        assert!(!dto.success);
        assert!(dto.error.expect("error").contains("email"));
    }

    #[tokio::test]
    async fn malformed_email_yields_400_citing_invalid_email() {
        let request = chat_request(serde_json::json!({
            "name": "A", "email": "not-an-email", "message": "B"
        }));
        let response = test_app(false).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let dto = response_body(response).await;
        assert!(dto.error.expect("error").contains("Invalid email"));
    }

    #[tokio::test]
    async fn optional_phone_and_timestamp_are_accepted() {
        let request = chat_request(serde_json::json!({
            "name": "Jo",
            "email": "jo@example.com",
            "phone": "+254 700 000000",
            "message": "Hi",
            "timestamp": "2026-08-30 10:00:00"
        }));
        let response = test_app(false).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
