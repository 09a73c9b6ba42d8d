use std::sync::Arc;

use super::domain::{ChangeRecord, PriceTier, ProposedTier};
use super::gateway::{GatewayError, PriceGateway};
use super::proposals::compute_proposals;

/// Facade composing the proposal calculator, change-set extractor, and the
/// persistence gateway.
pub struct RepricingService<G> {
    gateway: Arc<G>,
}

impl<G> RepricingService<G>
where
    G: PriceGateway + 'static,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Compute display-ready proposals for a pending cost change, sorted by
    /// tier type id. Empty when either cost is absent or the catalog is
    /// empty.
    pub fn preview(
        &self,
        old_cost: Option<f64>,
        new_cost: Option<f64>,
        tiers: &[PriceTier],
    ) -> Vec<ProposedTier> {
        let mut proposals = compute_proposals(old_cost, new_cost, tiers);
        proposals.sort_by_key(|tier| tier.type_id);
        proposals
    }

    /// Extract the change-set and submit it as one batch.
    ///
    /// Fails locally with [`RepricingError::NoChanges`] when nothing moved
    /// past the tolerance, so callers never issue a no-op network call. A
    /// gateway failure is passed through verbatim; the caller's proposal
    /// state is untouched either way, so the user can adjust and retry
    /// without recomputation.
    pub async fn submit(
        &self,
        proposals: &[ProposedTier],
        reason: &str,
    ) -> Result<Vec<ChangeRecord>, RepricingError> {
        let changes = super::changeset::extract_changes(proposals, reason);
        if changes.is_empty() {
            return Err(RepricingError::NoChanges);
        }

        self.gateway.submit(&changes).await?;
        Ok(changes)
    }
}

/// Error raised by the repricing facade.
#[derive(Debug, thiserror::Error)]
pub enum RepricingError {
    #[error("no price changes to submit")]
    NoChanges,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
