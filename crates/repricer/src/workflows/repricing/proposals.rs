use super::domain::{PriceTier, ProposedTier};
use super::money::round2;

/// Derive a proposed price and markup-on-cost percentage for every tier of a
/// product in response to a hypothetical cost change.
///
/// Returns an empty list when either cost is absent or there are no tiers, so
/// callers can render a placeholder instead of stale numbers. The cost tier
/// takes the new cost itself with a zero margin; every other tier keeps its
/// stored absolute margin on top of the new cost, plus the cost delta once
/// more. That second delta term double-applies the cost movement and is kept
/// deliberately: it is how prices have been proposed historically, and
/// "correcting" it here would silently move persisted prices.
///
/// Pure and deterministic; output order follows input order.
pub fn compute_proposals(
    old_cost: Option<f64>,
    new_cost: Option<f64>,
    tiers: &[PriceTier],
) -> Vec<ProposedTier> {
    let (Some(old_cost), Some(new_cost)) = (old_cost, new_cost) else {
        return Vec::new();
    };

    let cost_delta = new_cost - old_cost;

    tiers
        .iter()
        .map(|tier| {
            let (proposed_price, proposed_margin_percent) = if tier.is_cost_tier() {
                (round2(new_cost), 0.0)
            } else {
                let raw_new_price = new_cost + tier.current_margin_amount + cost_delta;
                let price = round2(raw_new_price).max(0.0);
                let margin = if new_cost > 0.0 {
                    round2((raw_new_price - new_cost) / new_cost * 100.0)
                } else {
                    0.0
                };
                (price, margin)
            };

            ProposedTier {
                tier_id: tier.id.clone(),
                type_id: tier.type_id,
                type_code: tier.type_code.clone(),
                type_name: tier.type_name.clone(),
                type_color: tier.type_color.clone(),
                is_profit_type: tier.is_profit_type,
                current_price: tier.current_price,
                current_margin_percent: tier.current_margin_percent,
                proposed_price,
                proposed_margin_percent,
            }
        })
        .collect()
}
