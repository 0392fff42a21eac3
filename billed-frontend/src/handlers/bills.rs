use crate::error::ApiError;
use crate::handlers::PendingRedirect;
use crate::models::DisplayBillRecord;
use crate::navigation::Route;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use std::cmp::Reverse;
use std::sync::Arc;

/// Sort latest first; bills whose date could not be parsed go last, in their
/// original order.
pub fn order_latest_first(bills: &mut [DisplayBillRecord]) {
    bills.sort_by_key(|bill| (bill.calendar_date.is_none(), Reverse(bill.calendar_date)));
}

pub async fn list_bills(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let redirect = Arc::new(PendingRedirect::default());
    let mut bills = state.bills(&redirect).get_bills().await?;
    order_latest_first(&mut bills);

    Ok(Json(bills))
}

pub async fn open_new_bill(State(state): State<AppState>) -> impl IntoResponse {
    let redirect = Arc::new(PendingRedirect::default());
    state.bills(&redirect).handle_click_new_bill();
    redirect.redirect_or(Route::NewBill)
}

#[derive(Deserialize)]
pub struct ProofParams {
    pub url: String,
}

/// The eye icon. Only proofs served from a configured origin are opened.
pub async fn show_proof(
    State(state): State<AppState>,
    Query(params): Query<ProofParams>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.proof_origins.permits(&params.url) {
        tracing::warn!(url = %params.url, "Refusing proof URL from an unknown origin");
        return Err(ApiError::BadRequest(format!("Proof URL not allowed: {}", params.url)));
    }

    let redirect = Arc::new(PendingRedirect::default());
    state.bills(&redirect).handle_click_icon_eye(&params.url);
    Ok(redirect.redirect_or(Route::Bills))
}
