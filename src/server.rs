use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::HeaderValue,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    calculator::{CalculationQuery, CalculationResult},
    compiler::PdfLatex,
    config::TemplateServiceConfig,
    document::{GenerateRequest, GenerationResult, PdfGenerator},
    error::ServiceError,
    extract::{ApiJson, ApiQuery},
    placeholders::PlaceholderTable,
    templates::TemplateStore,
};

#[derive(Clone)]
pub struct TemplateState {
    pub generator: Arc<PdfGenerator>,
}

impl TemplateState {
    pub fn new(generator: PdfGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }

    pub fn from_config(config: &TemplateServiceConfig) -> Self {
        let templates = TemplateStore::new(&config.template_dir, &config.template_extension);
        let compiler = Arc::new(PdfLatex::new(&config.latex_program));
        Self::new(PdfGenerator::new(templates, &config.output_dir, compiler))
    }
}

pub fn build_template_router(state: TemplateState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(template_root))
        .route("/health", get(health))
        .route("/templates", get(list_templates))
        .route("/placeholders", get(placeholders))
        .route("/generate-pdf", post(generate_pdf))
        .with_state(state)
        .layer(build_cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

pub fn build_calculator_router(cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(calculator_root))
        .route("/health", get(health))
        .route("/calculate", get(calculate))
        .layer(build_cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Origins are listed explicitly with credentials allowed; `*` opens the
/// service to any origin without credentials.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}

async fn health() -> &'static str {
    "ok"
}

async fn template_root() -> Json<Value> {
    Json(json!({ "message": "LaTeX Template Processing API is running" }))
}

async fn calculator_root() -> Json<Value> {
    Json(json!({ "message": "Calculator API is running" }))
}

async fn list_templates(
    State(state): State<TemplateState>,
) -> Result<Json<BTreeMap<usize, String>>, ServiceError> {
    let templates = state.generator.templates().list().await?;
    info!(count = templates.len(), "listed templates");
    Ok(Json(templates))
}

async fn placeholders() -> Json<PlaceholderTable> {
    Json(PlaceholderTable)
}

async fn generate_pdf(
    State(state): State<TemplateState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> Result<Json<GenerationResult>, ServiceError> {
    let result = state.generator.generate(request).await?;
    Ok(Json(result))
}

async fn calculate(
    ApiQuery(query): ApiQuery<CalculationQuery>,
) -> Result<Json<CalculationResult>, ServiceError> {
    Ok(Json(query.evaluate()?))
}
