//! Producer Service
//!
//! Stateless service answering health and data lookups with freshly
//! stamped records. Nothing here can fail.

use axum::{extract::Path, routing::get, Json, Router};
use service_common::{now, DataRecord, HealthRecord};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const SERVICE_NAME: &str = "producer-service";

/// Build the producer's `/api` routes.
pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/data", get(get_data))
        .route("/api/data/:id", get(get_data_by_id))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health_check() -> Json<HealthRecord> {
    Json(HealthRecord::up(SERVICE_NAME))
}

async fn get_data() -> Json<DataRecord> {
    Json(DataRecord {
        id: None,
        message: "Hello from Producer Service!".to_string(),
        data: "This is sample data from the producer".to_string(),
        timestamp: now(),
        service: SERVICE_NAME.to_string(),
    })
}

async fn get_data_by_id(Path(id): Path<String>) -> Json<DataRecord> {
    Json(DataRecord {
        message: format!("Data for ID: {}", id),
        data: format!("Sample data item with ID: {}", id),
        id: Some(id),
        timestamp: now(),
        service: SERVICE_NAME.to_string(),
    })
}
