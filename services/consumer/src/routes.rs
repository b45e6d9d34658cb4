//! HTTP surface of the consumer.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use service_common::HealthRecord;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::records::{ConsumeByIdResponse, ConsumeResponse, Outcome, ProducerCheckResponse};
use crate::service::Consumer;

/// Build the consumer's `/api` routes around a configured [`Consumer`].
pub fn router(consumer: Consumer) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/consume", get(consume))
        .route("/api/consume/:id", get(consume_by_id))
        .route("/api/check-producer", get(check_producer))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(consumer)
}

async fn health_check(State(consumer): State<Consumer>) -> Json<HealthRecord> {
    Json(consumer.health())
}

async fn consume(State(consumer): State<Consumer>) -> Outcome<ConsumeResponse> {
    consumer.consume().await
}

async fn consume_by_id(
    State(consumer): State<Consumer>,
    Path(id): Path<String>,
) -> Outcome<ConsumeByIdResponse> {
    consumer.consume_by_id(&id).await
}

async fn check_producer(State(consumer): State<Consumer>) -> Outcome<ProducerCheckResponse> {
    consumer.check_producer().await
}
