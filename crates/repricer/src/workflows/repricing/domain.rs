use serde::{Deserialize, Serialize};

/// Identifier wrapper for a configured price tier instance.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TierId(pub String);

/// Type code marking the distinguished cost tier. The cost tier carries the
/// product's acquisition cost and has no profit margin by definition.
pub const COST_TIER_CODE: &str = "COSTO";

/// One configured price type for one product, as supplied by the catalog.
/// Read-only input to the engine; proposals are derived, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub id: TierId,
    pub type_id: i64,
    pub type_code: String,
    pub type_name: String,
    pub type_color: String,
    pub is_profit_type: bool,
    pub current_price: f64,
    /// `current_price - old_cost` as previously stored; may be stale.
    pub current_margin_amount: f64,
    pub current_margin_percent: f64,
}

impl PriceTier {
    pub fn is_cost_tier(&self) -> bool {
        self.type_code == COST_TIER_CODE
    }
}

/// A derived price/margin pair for one tier, scoped to a single recompute
/// session. Carries the originating current values for later diffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedTier {
    pub tier_id: TierId,
    pub type_id: i64,
    pub type_code: String,
    pub type_name: String,
    pub type_color: String,
    pub is_profit_type: bool,
    pub current_price: f64,
    pub current_margin_percent: f64,
    pub proposed_price: f64,
    pub proposed_margin_percent: f64,
}

impl ProposedTier {
    pub fn is_cost_tier(&self) -> bool {
        self.type_code == COST_TIER_CODE
    }
}

/// One entry in the persistence payload, produced only for tiers whose
/// proposal actually moved past the change tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub tier_id: TierId,
    pub new_price: f64,
    pub new_margin_percent: f64,
    pub reason: String,
}

/// Which side of the bidirectional price/markup model an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierField {
    Price,
    MarginPercent,
}

impl TierField {
    pub const fn label(self) -> &'static str {
        match self {
            TierField::Price => "price",
            TierField::MarginPercent => "margin_percent",
        }
    }
}

/// A committed hand-edit to one tier, dispatched through
/// [`RepriceSession::apply`](super::session::RepriceSession::apply) so the
/// recompute rule stays in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierEdit {
    pub tier_id: TierId,
    pub field: TierField,
    pub value: f64,
}
