use std::future::Future;

use super::domain::ChangeRecord;

/// Persistence boundary for accepted change-sets. The engine submits the
/// whole batch as one logical unit and relays a single pass/fail result; it
/// never retries, splits, or partially commits.
pub trait PriceGateway: Send + Sync {
    fn submit(
        &self,
        changes: &[ChangeRecord],
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}

/// Error enumeration for gateway failures, surfaced verbatim to the caller.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("price update rejected: {0}")]
    Rejected(String),
    #[error("price backend unavailable: {0}")]
    Transport(String),
}
