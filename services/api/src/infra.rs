use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use repricer::workflows::repricing::{ChangeRecord, GatewayError, PriceGateway, PriceTier, TierId};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Gateway used when no backend URL is configured: accepted batches are kept
/// in memory so dev sessions and tests can inspect them.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPriceGateway {
    batches: Arc<Mutex<Vec<Vec<ChangeRecord>>>>,
}

impl InMemoryPriceGateway {
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn batches(&self) -> Vec<Vec<ChangeRecord>> {
        self.batches.lock().expect("gateway mutex poisoned").clone()
    }
}

impl PriceGateway for InMemoryPriceGateway {
    async fn submit(&self, changes: &[ChangeRecord]) -> Result<(), GatewayError> {
        self.batches
            .lock()
            .expect("gateway mutex poisoned")
            .push(changes.to_vec());
        Ok(())
    }
}

/// Gateway posting accepted batches to the operations backend.
pub(crate) struct HttpPriceGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPriceGateway {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/api/v1/price-tiers/batch",
                base_url.trim_end_matches('/')
            ),
        }
    }
}

impl PriceGateway for HttpPriceGateway {
    async fn submit(&self, changes: &[ChangeRecord]) -> Result<(), GatewayError> {
        let payload = json!({
            "submitted_at": Utc::now(),
            "changes": changes,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        if message.is_empty() {
            Err(GatewayError::Rejected(status.to_string()))
        } else {
            Err(GatewayError::Rejected(format!("{status}: {message}")))
        }
    }
}

/// Built-in catalog for the preview command, matching the shape the
/// operations backend serves per product.
pub(crate) fn sample_catalog() -> Vec<PriceTier> {
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
