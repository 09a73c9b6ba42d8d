use super::domain::{ChangeRecord, ProposedTier};

/// A tier is only submitted when its proposed price or margin moved past this
/// tolerance (currency units / percentage points respectively).
pub const CHANGE_TOLERANCE: f64 = 0.01;

/// Filter the proposals down to the minimal persistence payload.
///
/// The reason string is shared across the whole batch; an empty reason is
/// accepted here because "reason required" validation belongs to the calling
/// form. An empty result means there is nothing to save and the caller must
/// not issue a no-op network call.
pub fn extract_changes(proposals: &[ProposedTier], reason: &str) -> Vec<ChangeRecord> {
    proposals
        .iter()
        .filter(|tier| {
            (tier.proposed_price - tier.current_price).abs() > CHANGE_TOLERANCE
                || (tier.proposed_margin_percent - tier.current_margin_percent).abs()
                    > CHANGE_TOLERANCE
        })
        .map(|tier| ChangeRecord {
            tier_id: tier.tier_id.clone(),
            new_price: tier.proposed_price,
            new_margin_percent: tier.proposed_margin_percent,
            reason: reason.to_string(),
        })
        .collect()
}
