use crate::chain::{self, Network, ParseNetworkError};
use crate::cli::Args;
use crate::config::prompt;
use crate::llm::chat::GroqChatClient;
use crate::llm::{LlmConfig, LlmError};
use crate::sanitize::sanitize_generated_code;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
    extract::State,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error as ThisError;
use tower_http::cors::{Any, CorsLayer};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub source_code: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub converted_code: String,
}

#[derive(Deserialize)]
pub struct ExplainRequest {
    pub code: Option<String>,
}

#[derive(Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

#[derive(Deserialize)]
pub struct DeployRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub network: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    pub tx_id: String,
    pub address: String,
    pub contract_id: String,
    pub network: Network,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub model: String,
    pub response: Value,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("No {0} provided")]
    MissingField(&'static str),
    #[error(transparent)]
    InvalidNetwork(#[from] ParseNetworkError),
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidNetwork(_) => StatusCode::BAD_REQUEST,
            ApiError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    upstream: Option<Arc<GroqChatClient>>,
}

impl AppState {
    fn upstream(&self) -> Result<&GroqChatClient, ApiError> {
        self.upstream
            .as_deref()
            .ok_or(ApiError::Llm(LlmError::MissingApiKey))
    }
}

pub fn build_state(args: &Args) -> AppState {
    let config = LlmConfig {
        api_key: args.api_key.clone(),
        completion_model: args.model.clone(),
        base_url: args.upstream_url.clone(),
        temperature: args.temperature,
        max_tokens: args.max_tokens,
    };

    let upstream = match GroqChatClient::from_config(&config) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("{}", e);
            None
        }
    };

    AppState { upstream }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/convert", post(convert_handler))
        .route("/api/explain", post(explain_handler))
        .route("/api/deploy", post(deploy_handler))
        .route("/api/health", get(health_handler))
        .route("/api/test-upstream", get(test_upstream_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    args: &Args,
    state: AppState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = format!("0.0.0.0:{}", args.port).parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = router(state);

    if let (true, Some(cert_path), Some(key_path)) =
        (args.enable_tls, &args.tls_cert_path, &args.tls_key_path)
    {
        let tls_config =
            axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path).await?;

        info!("HTTPS server started with TLS enabled");
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e)
        })?;

        info!("HTTP server started");
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

async fn convert_handler(
    State(state): State<AppState>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let solidity_code = required_field(req.source_code, "Solidity code")?;
    let client = state.upstream()?;

    let user_prompt = prompt::conversion_prompt(&solidity_code);
    let completion = client
        .complete(prompt::CONVERSION_SYSTEM_PROMPT, &user_prompt)
        .await?;

    info!("Original AI response: {}...", preview(&completion.response));
    let converted_code = sanitize_generated_code(&completion.response);
    info!("Processed Clarity code: {}...", preview(&converted_code));

    Ok(Json(ConvertResponse { converted_code }))
}

async fn explain_handler(
    State(state): State<AppState>,
    Json(req): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let clarity_code = required_field(req.code, "Clarity code")?;
    let client = state.upstream()?;

    let user_prompt = prompt::explain_prompt(&clarity_code);
    let completion = client
        .complete(prompt::EXPLAIN_SYSTEM_PROMPT, &user_prompt)
        .await?;

    Ok(Json(ExplainResponse {
        explanation: completion.response,
    }))
}

async fn deploy_handler(
    Json(req): Json<DeployRequest>,
) -> Result<Json<DeployResponse>, ApiError> {
    required_field(req.code, "Clarity code")?;

    let network = match req.network {
        Some(value) => value.parse::<Network>()?,
        None => Network::default(),
    };
    let name = req
        .name
        .unwrap_or_else(|| chain::DEFAULT_CONTRACT_NAME.to_string());

    let deployment = chain::broadcast(&name, network).await;
    info!(
        "Mock-deployed contract {} on {}",
        deployment.contract_id, deployment.network
    );

    Ok(Json(DeployResponse {
        tx_id: deployment.tx_id,
        address: deployment.address,
        contract_id: deployment.contract_id,
        network: deployment.network,
    }))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn test_upstream_handler(
    State(state): State<AppState>,
) -> Result<Json<ProbeResponse>, ApiError> {
    let client = state.upstream()?;
    let response = client.probe().await?;

    Ok(Json(ProbeResponse {
        status: "success",
        message: "Groq API connection successful",
        model: client.model().to_string(),
        response,
    }))
}

fn required_field(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::MissingField(name)),
    }
}

fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}
