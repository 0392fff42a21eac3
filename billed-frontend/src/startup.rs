use axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{make_request_span, request_id_middleware};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    app::health_check,
    bills::{list_bills, open_new_bill, show_proof},
    new_bill::{submit_bill, upload_file},
};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/bills", get(list_bills).post(submit_bill))
        .route("/bills/new", get(open_new_bill))
        .route("/bills/file", post(upload_file))
        .route("/bills/proof", get(show_proof))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        // Outermost, so the trace span sees the request id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
