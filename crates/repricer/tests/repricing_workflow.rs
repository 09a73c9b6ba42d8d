//! Integration specifications for the cost-change repricing workflow.
//!
//! Scenarios run end-to-end through the public session, service facade, and
//! HTTP router so the proposal math, hand-edit recompute, change extraction,
//! and gateway handoff are validated without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use repricer::workflows::repricing::{
        ChangeRecord, GatewayError, PriceGateway, PriceTier, RepricingService, TierId,
    };

    pub(super) fn catalog() -> Vec<PriceTier> {
        vec![
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
            },
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
            },
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
            },
        ]
    }

    #[derive(Default, Clone)]
    pub(super) struct RecordingGateway {
        batches: Arc<Mutex<Vec<Vec<ChangeRecord>>>>,
    }

    impl RecordingGateway {
        pub(super) fn batches(&self) -> Vec<Vec<ChangeRecord>> {
            self.batches.lock().expect("gateway mutex poisoned").clone()
        }
    }

    impl PriceGateway for RecordingGateway {
        async fn submit(&self, changes: &[ChangeRecord]) -> Result<(), GatewayError> {
            self.batches
                .lock()
                .expect("gateway mutex poisoned")
                .push(changes.to_vec());
            Ok(())
        }
    }

    pub(super) fn build_service() -> (RepricingService<RecordingGateway>, Arc<RecordingGateway>) {
        let gateway = Arc::new(RecordingGateway::default());
        (RepricingService::new(gateway.clone()), gateway)
    }
}

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use repricer::workflows::repricing::{
    pricing_router, RepriceSession, RepricingService, TierEdit, TierField, TierId,
};

use common::{build_service, catalog, RecordingGateway};

#[tokio::test]
async fn cost_change_with_hand_edit_submits_only_real_changes() {
    let (service, gateway) = build_service();

    let mut session = RepriceSession::new(Some(100.0), Some(120.0), catalog());
    assert_eq!(session.proposals().len(), 3);

    // Operator overrides the wholesale proposal from 170.00 down to 150.00.
    session.set_draft(
        TierId("tier-mayorista".to_string()),
        TierField::Price,
        "150",
    );
    session.commit_draft(&TierId("tier-mayorista".to_string()), TierField::Price);

    let changes = service
        .submit(session.proposals(), "supplier increase")
        .await
        .expect("batch accepted");
    assert_eq!(changes.len(), 3);

    let batches = gateway.batches();
    assert_eq!(batches.len(), 1);
    let wholesale = batches[0]
        .iter()
        .find(|record| record.tier_id == TierId("tier-mayorista".to_string()))
        .expect("wholesale record submitted");
    assert_eq!(wholesale.new_price, 150.0);
    assert_eq!(wholesale.new_margin_percent, 25.0);
}

#[tokio::test]
async fn unchanged_catalog_is_blocked_before_the_gateway() {
    let (service, gateway) = build_service();

    let session = RepriceSession::new(Some(100.0), Some(100.0), catalog());
    let result = service.submit(session.proposals(), "nothing moved").await;

    assert!(result.is_err(), "no-op submission must fail locally");
    assert!(gateway.batches().is_empty());
}

#[tokio::test]
async fn http_round_trip_previews_and_submits() {
    let gateway = Arc::new(RecordingGateway::default());
    let router = pricing_router(Arc::new(RepricingService::new(gateway.clone())));

    let body = json!({
        "old_cost": 100.0,
        "new_cost": 120.0,
        "tiers": catalog(),
        "edits": [TierEdit {
            tier_id: TierId("tier-mayorista".to_string()),
            field: TierField::Price,
            value: 150.0,
        }],
        "reason": "supplier increase",
    });

    let preview = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/pricing/proposals")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("preview executes");
    assert_eq!(preview.status(), StatusCode::OK);

    let submit = router
        .oneshot(
            axum::http::Request::post("/api/v1/pricing/changes")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("submit executes");
    assert_eq!(submit.status(), StatusCode::ACCEPTED);
    assert_eq!(gateway.batches().len(), 1);
}
