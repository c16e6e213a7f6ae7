use crate::cli::Args;
use crate::llm::chat::ChatClient;
use crate::models::chat::{ChatMessage, ChatReply, ChatRequest, ErrorDetail, Role};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
    extract::State,
    response::{Html, IntoResponse},
    http::StatusCode,
    Json,
};
use tower_http::cors::{Any, CorsLayer};
use log::{info, error};

const CHAT_PAGE: &str = include_str!("../../assets/index.html");

#[derive(Clone)]
pub struct AppState {
    client: Arc<dyn ChatClient>,
    system_prompt: Arc<str>,
}

impl AppState {
    pub fn new(client: Arc<dyn ChatClient>, system_prompt: Arc<str>) -> Self {
        Self {
            client,
            system_prompt,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    addr: &str,
    client: Arc<dyn ChatClient>,
    system_prompt: Arc<str>,
    args: &Args,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting HTTP server on: http://{}", addr);

    let app = router(AppState::new(client, system_prompt));

    if args.enable_tls && args.tls_cert_path.is_some() && args.tls_key_path.is_some() {
        let cert_path = args.tls_cert_path.as_ref().unwrap();
        let key_path = args.tls_key_path.as_ref().unwrap();

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("TLS enabled, serving HTTPS");
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await
            .map_err(|e| format!("Failed to bind HTTP server to {}: {}", addr, e))?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    // The fixed system message is always exactly one entry, always first.
    let mut messages = Vec::with_capacity(req.messages.len() + 1);
    messages.push(ChatMessage {
        role: Role::System,
        content: state.system_prompt.to_string(),
    });
    messages.extend(req.messages);

    match state.client.complete(&messages).await {
        Ok(completion) => (
            StatusCode::OK,
            Json(ChatReply {
                reply: completion.response,
            }),
        ).into_response(),
        Err(e) => {
            error!("Upstream chat completion failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail {
                    detail: e.to_string(),
                }),
            ).into_response()
        }
    }
}
