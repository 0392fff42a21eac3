use crate::error::ApiError;
use crate::handlers::PendingRedirect;
use crate::models::{FileSelected, FormSubmitted, SelectedFile};
use crate::navigation::Route;
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use std::sync::Arc;

/// Proof file input: expects a multipart field named `file`.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut selected = FileSelected::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await.map_err(|e| {
            tracing::error!("Failed to read file {}: {}", name, e);
            ApiError::BadRequest(format!("{}: Failed to read file", name))
        })?;

        selected = FileSelected::new(SelectedFile {
            name,
            content_type,
            data: data.to_vec(),
        });
        break;
    }

    // The upload settles in the background; its failure only shows in the logs.
    let redirect = Arc::new(PendingRedirect::default());
    let _upload = state.new_bill(&redirect).handle_change_file(selected)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "status": "uploading" })),
    ))
}

/// New bill form submission. Answers with a redirect to the bill list
/// without waiting for the store to acknowledge the bill.
pub async fn submit_bill(
    State(state): State<AppState>,
    Json(form): Json<FormSubmitted>,
) -> impl IntoResponse {
    let redirect = Arc::new(PendingRedirect::default());
    let _commit = state.new_bill(&redirect).handle_submit(form);
    redirect.redirect_or(Route::Bills)
}
