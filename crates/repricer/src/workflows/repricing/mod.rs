//! Cost-change repricing: proposal calculation, hand-edits, and change-set
//! extraction for a product's price tiers.
//!
//! The pipeline is catalog -> calculator -> edit session -> extractor ->
//! gateway. Everything up to the gateway is pure and synchronous; the
//! gateway is the single async boundary and the core never retries or
//! splits a submitted batch.

pub mod changeset;
pub mod domain;
pub mod gateway;
pub(crate) mod money;
pub mod proposals;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use changeset::{extract_changes, CHANGE_TOLERANCE};
pub use domain::{
    ChangeRecord, PriceTier, ProposedTier, TierEdit, TierField, TierId, COST_TIER_CODE,
};
pub use gateway::{GatewayError, PriceGateway};
pub use money::round2;
pub use proposals::compute_proposals;
pub use router::pricing_router;
pub use service::{RepricingError, RepricingService};
pub use session::RepriceSession;
