use std::collections::BTreeMap;

use super::changeset::extract_changes;
use super::domain::{ChangeRecord, PriceTier, ProposedTier, TierEdit, TierField, TierId};
use super::money::round2;
use super::proposals::compute_proposals;

/// Per-session state for one product and one pending cost change.
///
/// Owns the proposal list and the draft text buffer. A session is constructed
/// fresh when the user opens the recompute-cost form and discarded outright on
/// product switch, cost change, or successful submission; proposals from an
/// earlier cost input are never merged into a new one.
#[derive(Debug, Clone)]
pub struct RepriceSession {
    old_cost: Option<f64>,
    new_cost: Option<f64>,
    tiers: Vec<PriceTier>,
    proposals: Vec<ProposedTier>,
    drafts: BTreeMap<(TierId, TierField), String>,
}

impl RepriceSession {
    pub fn new(old_cost: Option<f64>, new_cost: Option<f64>, tiers: Vec<PriceTier>) -> Self {
        let mut proposals = compute_proposals(old_cost, new_cost, &tiers);
        proposals.sort_by_key(|tier| tier.type_id);

        Self {
            old_cost,
            new_cost,
            tiers,
            proposals,
            drafts: BTreeMap::new(),
        }
    }

    pub fn new_cost(&self) -> Option<f64> {
        self.new_cost
    }

    /// Current proposals, sorted by tier type id for stable display.
    pub fn proposals(&self) -> &[ProposedTier] {
        &self.proposals
    }

    /// Replace the pending cost input. Proposals are recomputed from the
    /// catalog and every draft is dropped; clearing the cost empties the
    /// proposal list immediately so no stale numbers survive.
    pub fn set_new_cost(&mut self, new_cost: Option<f64>) {
        self.new_cost = new_cost;
        self.proposals = compute_proposals(self.old_cost, self.new_cost, &self.tiers);
        self.proposals.sort_by_key(|tier| tier.type_id);
        self.drafts.clear();
    }

    /// Start over for a different product or catalog snapshot.
    pub fn reset(&mut self, old_cost: Option<f64>, new_cost: Option<f64>, tiers: Vec<PriceTier>) {
        *self = Self::new(old_cost, new_cost, tiers);
    }

    /// Apply one committed edit through the single recompute rule.
    ///
    /// A price edit recomputes the margin from the raw entered price; a
    /// margin edit recomputes the price from the cost-plus model
    /// `price = cost * (1 + m/100)`. When the pending cost is not positive
    /// the counterpart field is left untouched. The cost tier's margin stays
    /// pinned at zero: price edits there never move it and margin edits are
    /// ignored. Unknown tier ids are ignored.
    pub fn apply(&mut self, edit: TierEdit) {
        let cost = self.new_cost.unwrap_or(0.0);
        let Some(tier) = self
            .proposals
            .iter_mut()
            .find(|tier| tier.tier_id == edit.tier_id)
        else {
            return;
        };

        match edit.field {
            TierField::Price => {
                tier.proposed_price = round2(edit.value);
                if tier.is_cost_tier() {
                    tier.proposed_margin_percent = 0.0;
                } else if cost > 0.0 {
                    tier.proposed_margin_percent = round2((edit.value - cost) / cost * 100.0);
                }
            }
            TierField::MarginPercent => {
                if tier.is_cost_tier() {
                    return;
                }
                tier.proposed_margin_percent = round2(edit.value);
                if cost > 0.0 {
                    tier.proposed_price = round2(cost + cost * (edit.value / 100.0));
                }
            }
        }
    }

    /// Hold uncommitted text for a field while the user is typing. The
    /// committed proposal is untouched until [`commit_draft`] runs.
    ///
    /// [`commit_draft`]: Self::commit_draft
    pub fn set_draft(&mut self, tier_id: TierId, field: TierField, text: impl Into<String>) {
        self.drafts.insert((tier_id, field), text.into());
    }

    pub fn draft(&self, tier_id: &TierId, field: TierField) -> Option<&str> {
        self.drafts
            .get(&(tier_id.clone(), field))
            .map(String::as_str)
    }

    /// Commit a pending draft on blur/confirm: parse the text (empty or
    /// invalid input counts as zero), dispatch the edit, and clear the entry.
    /// No-op when nothing was typed for that field.
    pub fn commit_draft(&mut self, tier_id: &TierId, field: TierField) {
        let Some(text) = self.drafts.remove(&(tier_id.clone(), field)) else {
            return;
        };

        let value = text.trim().parse::<f64>().unwrap_or(0.0);
        self.apply(TierEdit {
            tier_id: tier_id.clone(),
            field,
            value,
        });
    }

    pub fn clear_drafts(&mut self) {
        self.drafts.clear();
    }

    /// What an input field should display: the draft while one is pending,
    /// otherwise the committed value at two decimals. `None` for unknown
    /// tiers.
    pub fn field_text(&self, tier_id: &TierId, field: TierField) -> Option<String> {
        if let Some(draft) = self.draft(tier_id, field) {
            return Some(draft.to_string());
        }

        let tier = self.proposals.iter().find(|tier| &tier.tier_id == tier_id)?;
        let value = match field {
            TierField::Price => tier.proposed_price,
            TierField::MarginPercent => tier.proposed_margin_percent,
        };
        Some(format!("{value:.2}"))
    }

    /// Extract the minimal change-set for this session's proposals.
    pub fn changes(&self, reason: &str) -> Vec<ChangeRecord> {
        extract_changes(&self.proposals, reason)
    }
}
