//! # API Server Module
//!
//! ## Purpose
//! REST API server exposing the question-answering, recommendation,
//! comparison and statistics endpoints over the record store.
//!
//! ## Input/Output Specification
//! - **Input**: HTTP requests with questions, domains, profiles, title pairs
//! - **Output**: JSON responses with answers, suggestions, comparison
//!   reports, statistics, system status
//! - **Errors**: JSON `{error, message}` bodies with distinct status codes
//!   per error kind (400 validation, 404 not found, 502 upstream, 503
//!   dataset unavailable)
//!
//! ## Key Features
//! - Side-identifying not-found responses for two-project comparisons
//! - Optional CORS support for browser front-ends
//! - Structured error responses, never raw panics

use crate::errors::{AdvisorError, Result};
use crate::search::{self, StudentProfile};
use crate::{compare, AppState};
use actix_cors::Cors;
use actix_web::middleware::Condition;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};

/// Application state wrapper for the API server
pub struct ApiServer {
    app_state: AppState,
}

/// Question payload for /predict and /chat
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: Option<String>,
}

/// Answer payload for /predict and /chat
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Domain payload for /recommend
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub domain: Option<String>,
}

/// Suggestion payload for /recommend
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub domain: String,
    pub suggestions: Vec<String>,
}

/// Title-pair payload for /compare
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub project1: Option<String>,
    pub project2: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub components: HealthComponents,
}

/// Component health status
#[derive(Debug, Serialize)]
pub struct HealthComponents {
    pub record_store: String,
    pub record_count: usize,
    pub completion_service: String,
}

impl ApiServer {
    /// Create new API server
    pub fn new(app_state: AppState) -> Self {
        Self { app_state }
    }

    /// Run the API server
    pub async fn run(self) -> Result<()> {
        let bind_addr = format!(
            "{}:{}",
            self.app_state.config.server.host, self.app_state.config.server.port
        );
        let enable_cors = self.app_state.config.server.enable_cors;

        tracing::info!("Starting API server on {}", bind_addr);

        HttpServer::new(move || {
            App::new()
                .wrap(Condition::new(enable_cors, Cors::permissive()))
                .app_data(web::Data::new(self.app_state.clone()))
                .route("/predict", web::post().to(predict_handler))
                .route("/recommend", web::post().to(recommend_handler))
                .route("/profile_recommend", web::post().to(profile_recommend_handler))
                .route("/compare", web::post().to(compare_handler))
                .route("/chat", web::post().to(chat_handler))
                .route("/stats", web::get().to(stats_handler))
                .route("/health", web::get().to(health_handler))
                .route("/", web::get().to(index_handler))
        })
        .bind(&bind_addr)
        .map_err(|e| AdvisorError::Internal {
            message: format!("Failed to bind server to {}: {}", bind_addr, e),
        })?
        .run()
        .await
        .map_err(|e| AdvisorError::Internal {
            message: format!("Server error: {}", e),
        })?;

        Ok(())
    }
}

/// Map an error to its HTTP response. Validation and not-found outcomes are
/// deliberately distinguishable so callers know which input to correct.
fn error_response(err: &AdvisorError) -> HttpResponse {
    let body = serde_json::json!({
        "error": err.category(),
        "message": err.to_string(),
    });
    match err {
        AdvisorError::Validation { .. } => HttpResponse::BadRequest().json(body),
        AdvisorError::ProjectNotFound { .. } => HttpResponse::NotFound().json(body),
        AdvisorError::DatasetUnavailable { .. } => HttpResponse::ServiceUnavailable().json(body),
        AdvisorError::Upstream { .. } | AdvisorError::Http(_) => {
            HttpResponse::BadGateway().json(body)
        }
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Pull a required, non-empty field out of a request payload.
fn require_field(value: &Option<String>, field: &str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AdvisorError::Validation {
            field: field.to_string(),
            reason: format!("Missing '{}'", field),
        }),
    }
}

/// Bilingual question-answering endpoint
async fn predict_handler(
    app_state: web::Data<AppState>,
    request: web::Json<QuestionRequest>,
) -> ActixResult<HttpResponse> {
    let question = match require_field(&request.question, "question") {
        Ok(q) => q,
        Err(e) => return Ok(error_response(&e)),
    };

    let answer = search::answer_question(
        &app_state.store,
        &question,
        &app_state.config.search,
    );
    Ok(HttpResponse::Ok().json(AnswerResponse { answer }))
}

/// Curated topic suggestions endpoint
async fn recommend_handler(
    request: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let domain = match require_field(&request.domain, "domain") {
        Ok(d) => d.to_lowercase(),
        Err(e) => return Ok(error_response(&e)),
    };

    let suggestions = search::suggest_topics(&domain);
    Ok(HttpResponse::Ok().json(RecommendResponse {
        domain,
        suggestions,
    }))
}

/// Profile-based recommendation endpoint
async fn profile_recommend_handler(
    app_state: web::Data<AppState>,
    request: web::Json<StudentProfile>,
) -> ActixResult<HttpResponse> {
    let recommendation = search::profile_recommend(
        &app_state.store,
        &request,
        &app_state.config.search,
    );
    Ok(HttpResponse::Ok().json(recommendation))
}

/// Two-project comparison endpoint
async fn compare_handler(
    app_state: web::Data<AppState>,
    request: web::Json<CompareRequest>,
) -> ActixResult<HttpResponse> {
    let project1 = match require_field(&request.project1, "project1") {
        Ok(p) => p,
        Err(e) => return Ok(error_response(&e)),
    };
    let project2 = match require_field(&request.project2, "project2") {
        Ok(p) => p,
        Err(e) => return Ok(error_response(&e)),
    };

    match compare::compare_projects(&app_state.store, &project1, &project2) {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            tracing::warn!("Comparison failed ({}): {}", e.category(), e);
            Ok(error_response(&e))
        }
    }
}

/// LLM chat endpoint: forwards the question with keyword-matched records
/// as context
async fn chat_handler(
    app_state: web::Data<AppState>,
    request: web::Json<QuestionRequest>,
) -> ActixResult<HttpResponse> {
    let question = match require_field(&request.question, "question") {
        Ok(q) => q,
        Err(e) => return Ok(error_response(&e)),
    };

    let context = search::build_context(&app_state.store, &question);
    match app_state.completion.ask(&question, &context).await {
        Ok(answer) => Ok(HttpResponse::Ok().json(AnswerResponse { answer })),
        Err(e) => {
            tracing::error!("Completion call failed: {}", e);
            Ok(error_response(&e))
        }
    }
}

/// Dataset statistics endpoint
async fn stats_handler(app_state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let stats = search::dataset_stats(&app_state.store);
    Ok(HttpResponse::Ok().json(stats))
}

/// Health check endpoint
async fn health_handler(app_state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let record_count = app_state.store.len();
    let store_status = if record_count > 0 { "healthy" } else { "empty" };
    let completion_status = if app_state.completion.is_configured() {
        "configured"
    } else {
        "not configured"
    };

    let response = HealthResponse {
        status: if record_count > 0 { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        components: HealthComponents {
            record_store: store_status.to_string(),
            record_count,
            completion_service: completion_status.to_string(),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Index page handler
async fn index_handler() -> ActixResult<HttpResponse> {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>PFE Advisor</title>
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            .header { color: #2c3e50; }
            .endpoint { margin: 20px 0; padding: 15px; background: #f8f9fa; border-radius: 5px; }
            .method { font-weight: bold; color: #27ae60; }
        </style>
    </head>
    <body>
        <h1 class="header">PFE Advisor API</h1>
        <p>Bilingual (French/English) question answering, recommendation and comparison over end-of-studies project records.</p>

        <h2>Available Endpoints</h2>

        <div class="endpoint">
            <span class="method">POST</span> /predict
            <p>Ask a question about the project records, in French or English.</p>
        </div>

        <div class="endpoint">
            <span class="method">POST</span> /recommend
            <p>Get curated topic suggestions for a domain.</p>
        </div>

        <div class="endpoint">
            <span class="method">POST</span> /profile_recommend
            <p>Rank projects against your skills, certifications, interests and level.</p>
        </div>

        <div class="endpoint">
            <span class="method">POST</span> /compare
            <p>Compare two projects by title fragment.</p>
        </div>

        <div class="endpoint">
            <span class="method">POST</span> /chat
            <p>Forward a question to the completion service with matched records as context.</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /stats
            <p>Dataset statistics: counts, percentages, domain breakdowns.</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /health
            <p>Check the health status of all system components.</p>
        </div>

        <h2>Example Comparison Request</h2>
        <pre>{
  "project1": "AI Agent",
  "project2": "Wazuh"
}</pre>
    </body>
    </html>
    "#;

    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
