//! Liveness endpoint

use actix_web::HttpResponse;

/// Handler for GET /healthcheck
pub async fn healthcheck() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
