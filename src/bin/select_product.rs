//! Select the optimal structured product for one set of client constraints
//!
//! Prints the selection result as JSON, with an optional payoff curve for
//! the winning product.

use anyhow::bail;
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use structured_products::{
    Catalog, ClientConstraints, CurvePoint, PayoffInfo, ProductSelector, RiskLevel,
};

#[derive(Debug, Parser)]
#[command(about = "Select the optimal structured product for a client")]
struct Args {
    /// Investment duration in months
    #[arg(long)]
    duration: u32,

    /// Target yield as a percentage (e.g. 6.0)
    #[arg(long, default_value_t = 5.0)]
    target_yield: f64,

    /// Client risk tolerance
    #[arg(long, value_enum)]
    risk_level: RiskLevel,

    /// Investment amount
    #[arg(long, default_value_t = 10_000.0)]
    amount: f64,

    /// Include the winner's payoff curve in the output
    #[arg(long)]
    curve: bool,
}

/// Response envelope for one selection
#[derive(Debug, Serialize)]
struct SelectionResponse {
    product: PayoffInfo,
    generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payoff_curve: Option<Vec<CurvePoint>>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let constraints = ClientConstraints {
        duration_months: args.duration,
        target_yield: args.target_yield,
        risk_level: args.risk_level,
        amount: args.amount,
    };

    let selector = ProductSelector::new(Catalog::default_catalog());
    let Some(product) = selector.select_optimal(&constraints)? else {
        bail!(
            "no suitable product for risk={}, duration={} months",
            constraints.risk_level,
            constraints.duration_months
        );
    };

    let payoff_curve = if args.curve {
        let model = selector
            .catalog()
            .build_model(&product.product_type, &constraints)?;
        Some(model.default_payoff_curve())
    } else {
        None
    };

    let response = SelectionResponse {
        product,
        generated_at: Utc::now(),
        payoff_curve,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
