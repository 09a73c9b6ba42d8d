use crate::infra::sample_catalog;
use chrono::Local;
use clap::Args;
use repricer::error::AppError;
use repricer::workflows::repricing::{compute_proposals, extract_changes, PriceTier};
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PreviewArgs {
    /// Current acquisition cost of the product
    #[arg(long)]
    pub(crate) old_cost: f64,
    /// Proposed new acquisition cost
    #[arg(long)]
    pub(crate) new_cost: f64,
    /// Path to a JSON file with the product's price tiers. Defaults to a
    /// built-in sample catalog.
    #[arg(long)]
    pub(crate) tiers: Option<PathBuf>,
    /// Reason attached to every record of the resulting change-set
    #[arg(long, default_value = "cost update preview")]
    pub(crate) reason: String,
}

pub(crate) fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let PreviewArgs {
        old_cost,
        new_cost,
        tiers,
        reason,
    } = args;

    let catalog = match tiers {
        Some(path) => load_catalog(&path)?,
        None => sample_catalog(),
    };

    let mut proposals = compute_proposals(Some(old_cost), Some(new_cost), &catalog);
    proposals.sort_by_key(|tier| tier.type_id);

    println!(
        "Reprice preview ({}): cost {:.2} -> {:.2}",
        Local::now().format("%Y-%m-%d %H:%M"),
        old_cost,
        new_cost
    );

    if proposals.is_empty() {
        println!("  no tiers to reprice");
        return Ok(());
    }

    println!(
        "  {:<12} {:>12} {:>12} {:>10}",
        "tier", "current", "proposed", "margin %"
    );
    for tier in &proposals {
        println!(
            "  {:<12} {:>12.2} {:>12.2} {:>10.2}",
            tier.type_name, tier.current_price, tier.proposed_price, tier.proposed_margin_percent
        );
    }

    let changes = extract_changes(&proposals, &reason);
    if changes.is_empty() {
        println!("\nNo price changes to save.");
    } else {
        println!("\n{} tier(s) would be updated (reason: {reason})", changes.len());
    }

    Ok(())
}

fn load_catalog(path: &PathBuf) -> Result<Vec<PriceTier>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog = serde_json::from_str(&raw)
        .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;
    Ok(catalog)
}
