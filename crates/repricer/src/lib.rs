//! Cost-driven price propagation engine for the operations console.
//!
//! Given a product's current cost, a proposed new cost, and the product's
//! configured price tiers, the engine derives a proposed price and
//! markup-on-cost percentage for every tier, supports bidirectional
//! hand-edits, and extracts the minimal change-set to persist.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
