use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;

use crate::models::AppState;
use crate::pricing::{Billing, PricingTable, Selection};

#[derive(Debug, Default, Deserialize)]
pub struct PricingQuery {
    pub billing: Option<String>,
    pub plan: Option<String>,
}

/// `GET /api/pricing?billing=monthly&plan=28`
pub async fn pricing_get(State(state): State<AppState>, Query(q): Query<PricingQuery>) -> impl IntoResponse {
    let billing = match q.billing.as_deref().map(str::parse::<Billing>) {
        None => Billing::default(),
        Some(Ok(b)) => b,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Rejected pricing query");
            return (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": e }))).into_response();
        }
    };
    let active_plan = q
        .plan
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| state.settings.default_active_plan.clone());

    let table = PricingTable::build(&state.pricing, &Selection::new(active_plan, billing), &state.settings);
    Json(table).into_response()
}
