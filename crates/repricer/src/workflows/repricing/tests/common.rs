use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::repricing::domain::{ChangeRecord, PriceTier, ProposedTier, TierId};
use crate::workflows::repricing::gateway::{GatewayError, PriceGateway};
use crate::workflows::repricing::router::pricing_router;
use crate::workflows::repricing::service::RepricingService;
use crate::workflows::repricing::session::RepriceSession;

pub(super) const OLD_COST: f64 = 100.0;
pub(super) const NEW_COST: f64 = 120.0;

pub(super) fn cost_tier() -> PriceTier {
    PriceTier {
        id: TierId("tier-costo".to_string()),
        type_id: 1,
        type_code: "COSTO".to_string(),
        type_name: "Costo".to_string(),
        type_color: "#9e9e9e".to_string(),
        is_profit_type: false,
        current_price: 100.0,
        current_margin_amount: 0.0,
        current_margin_percent: 0.0,
    }
}

pub(super) fn wholesale_tier() -> PriceTier {
    PriceTier {
        id: TierId("tier-mayorista".to_string()),
        type_id: 2,
        type_code: "MAYORISTA".to_string(),
        type_name: "Mayorista".to_string(),
        type_color: "#1976d2".to_string(),
        is_profit_type: true,
        current_price: 130.0,
        current_margin_amount: 30.0,
        current_margin_percent: 30.0,
    }
}

pub(super) fn retail_tier() -> PriceTier {
    PriceTier {
        id: TierId("tier-minorista".to_string()),
        type_id: 3,
        type_code: "MINORISTA".to_string(),
        type_name: "Minorista".to_string(),
        type_color: "#388e3c".to_string(),
        is_profit_type: true,
        current_price: 145.0,
        current_margin_amount: 45.0,
        current_margin_percent: 45.0,
    }
}

pub(super) fn catalog() -> Vec<PriceTier> {
    vec![cost_tier(), wholesale_tier(), retail_tier()]
}

pub(super) fn session() -> RepriceSession {
    RepriceSession::new(Some(OLD_COST), Some(NEW_COST), catalog())
}

pub(super) fn wholesale_id() -> TierId {
    TierId("tier-mayorista".to_string())
}

pub(super) fn cost_id() -> TierId {
    TierId("tier-costo".to_string())
}

pub(super) fn find<'a>(proposals: &'a [ProposedTier], id: &TierId) -> &'a ProposedTier {
    proposals
        .iter()
        .find(|tier| &tier.tier_id == id)
        .expect("tier present in proposals")
}

#[derive(Default, Clone)]
pub(super) struct MemoryGateway {
    batches: Arc<Mutex<Vec<Vec<ChangeRecord>>>>,
}

impl MemoryGateway {
    pub(super) fn batches(&self) -> Vec<Vec<ChangeRecord>> {
        self.batches.lock().expect("gateway mutex poisoned").clone()
    }
}

impl PriceGateway for MemoryGateway {
    async fn submit(&self, changes: &[ChangeRecord]) -> Result<(), GatewayError> {
        self.batches
            .lock()
            .expect("gateway mutex poisoned")
            .push(changes.to_vec());
        Ok(())
    }
}

pub(super) struct RejectingGateway;

impl PriceGateway for RejectingGateway {
    async fn submit(&self, _changes: &[ChangeRecord]) -> Result<(), GatewayError> {
        Err(GatewayError::Rejected("cost update out of policy".to_string()))
    }
}

pub(super) struct UnavailableGateway;

impl PriceGateway for UnavailableGateway {
    async fn submit(&self, _changes: &[ChangeRecord]) -> Result<(), GatewayError> {
        Err(GatewayError::Transport("backend offline".to_string()))
    }
}

pub(super) fn memory_service() -> (RepricingService<MemoryGateway>, Arc<MemoryGateway>) {
    let gateway = Arc::new(MemoryGateway::default());
    (RepricingService::new(gateway.clone()), gateway)
}

pub(super) fn memory_router() -> (axum::Router, Arc<MemoryGateway>) {
    let gateway = Arc::new(MemoryGateway::default());
    let service = Arc::new(RepricingService::new(gateway.clone()));
    (pricing_router(service), gateway)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_unprocessable(response: &Response) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
