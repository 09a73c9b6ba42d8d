use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{PriceTier, ProposedTier, TierEdit};
use super::gateway::PriceGateway;
use super::service::RepricingService;
use super::session::RepriceSession;
use crate::error::AppError;

/// Router builder exposing HTTP endpoints for proposal preview and
/// change-set submission.
pub fn pricing_router<G>(service: Arc<RepricingService<G>>) -> Router
where
    G: PriceGateway + 'static,
{
    Router::new()
        .route("/api/v1/pricing/proposals", post(proposals_handler))
        .route("/api/v1/pricing/changes", post(changes_handler::<G>))
        .with_state(service)
}

/// One repricing round trip: the catalog, the cost pair, and any committed
/// hand-edits. The session is owned by the calling workflow, so every
/// request carries the full picture instead of referencing server-side
/// state.
#[derive(Debug, Deserialize)]
pub struct RepriceRequest {
    pub old_cost: Option<f64>,
    pub new_cost: Option<f64>,
    #[serde(default)]
    pub tiers: Vec<PriceTier>,
    #[serde(default)]
    pub edits: Vec<TierEdit>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeSubmissionRequest {
    pub old_cost: Option<f64>,
    pub new_cost: Option<f64>,
    #[serde(default)]
    pub tiers: Vec<PriceTier>,
    #[serde(default)]
    pub edits: Vec<TierEdit>,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ProposalsResponse {
    pub proposals: Vec<ProposedTier>,
}

fn build_session(
    old_cost: Option<f64>,
    new_cost: Option<f64>,
    tiers: Vec<PriceTier>,
    edits: Vec<TierEdit>,
) -> RepriceSession {
    let mut session = RepriceSession::new(old_cost, new_cost, tiers);
    for edit in edits {
        session.apply(edit);
    }
    session
}

pub(crate) async fn proposals_handler(
    axum::Json(request): axum::Json<RepriceRequest>,
) -> Response {
    let session = build_session(
        request.old_cost,
        request.new_cost,
        request.tiers,
        request.edits,
    );

    let body = ProposalsResponse {
        proposals: session.proposals().to_vec(),
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn changes_handler<G>(
    State(service): State<Arc<RepricingService<G>>>,
    axum::Json(request): axum::Json<ChangeSubmissionRequest>,
) -> Result<Response, AppError>
where
    G: PriceGateway + 'static,
{
    let session = build_session(
        request.old_cost,
        request.new_cost,
        request.tiers,
        request.edits,
    );

    let changes = service.submit(session.proposals(), &request.reason).await?;
    let payload = json!({
        "submitted": changes.len(),
        "changes": changes,
    });
    Ok((StatusCode::ACCEPTED, axum::Json(payload)).into_response())
}
