//! Run product selection over a grid of client scenarios
//!
//! Evaluates every combination of duration, target yield, and risk level in
//! parallel and writes a CSV summary of the winners, plus the payoff curve
//! of a spotlight scenario.

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;
use structured_products::{Catalog, ClientConstraints, PayoffInfo, ProductSelector, RiskLevel};

#[derive(Debug, Parser)]
#[command(about = "Batch product selection over a scenario grid")]
struct Args {
    /// Investment amount applied to every scenario
    #[arg(long, default_value_t = 10_000.0)]
    amount: f64,

    /// Output CSV path for the scenario summary
    #[arg(long, default_value = "scenario_results.csv")]
    output: String,

    /// Output CSV path for the spotlight payoff curve
    #[arg(long, default_value = "payoff_curve.csv")]
    curve_output: String,
}

const DURATIONS: [u32; 7] = [6, 12, 18, 24, 36, 48, 60];
const TARGET_YIELDS: [f64; 3] = [4.0, 6.0, 8.0];
const RISK_LEVELS: [RiskLevel; 3] = [
    RiskLevel::Conservative,
    RiskLevel::Moderate,
    RiskLevel::Aggressive,
];

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let selector = ProductSelector::new(Catalog::default_catalog());

    let scenarios: Vec<ClientConstraints> = DURATIONS
        .iter()
        .flat_map(|&duration_months| {
            TARGET_YIELDS.iter().flat_map(move |&target_yield| {
                RISK_LEVELS.iter().map(move |&risk_level| ClientConstraints {
                    duration_months,
                    target_yield,
                    risk_level,
                    amount: args.amount,
                })
            })
        })
        .collect();

    println!("Running {} scenarios...", scenarios.len());

    // The catalog is immutable, so scenarios evaluate independently
    let results: Vec<(ClientConstraints, Option<PayoffInfo>)> = scenarios
        .par_iter()
        .map(|constraints| {
            let outcome = selector
                .select_optimal(constraints)
                .expect("catalog and selector out of sync");
            (constraints.clone(), outcome)
        })
        .collect();

    println!("Selection complete in {:?}", start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output))?;
    writeln!(
        file,
        "Duration,TargetYield,RiskLevel,Winner,ExpectedYield,ExpectedReturn,Score,Delta,Vega,Theta,Gamma"
    )?;

    let mut matched = 0usize;
    for (constraints, outcome) in &results {
        match outcome {
            Some(info) => {
                matched += 1;
                writeln!(
                    file,
                    "{},{:.1},{},{},{:.6},{:.2},{:.2},{:.6},{:.6},{:.6},{:.6}",
                    constraints.duration_months,
                    constraints.target_yield,
                    constraints.risk_level,
                    info.product_type,
                    info.expected_yield,
                    info.expected_return,
                    info.score,
                    info.greeks.delta,
                    info.greeks.vega,
                    info.greeks.theta,
                    info.greeks.gamma,
                )?;
            }
            None => {
                writeln!(
                    file,
                    "{},{:.1},{},none,,,,,,,",
                    constraints.duration_months,
                    constraints.target_yield,
                    constraints.risk_level,
                )?;
            }
        }
    }

    println!("Summary written to {}", args.output);
    println!(
        "  {} of {} scenarios matched a product",
        matched,
        results.len()
    );

    // Spotlight curve: moderate client, 24 months, 6% target
    let spotlight = ClientConstraints {
        duration_months: 24,
        target_yield: 6.0,
        risk_level: RiskLevel::Moderate,
        amount: args.amount,
    };
    if let Some(info) = selector.select_optimal(&spotlight)? {
        let model = selector
            .catalog()
            .build_model(&info.product_type, &spotlight)?;

        let mut curve_file = File::create(&args.curve_output)
            .with_context(|| format!("failed to create {}", args.curve_output))?;
        writeln!(curve_file, "Spot,PayoffPercent")?;
        for point in model.default_payoff_curve() {
            writeln!(curve_file, "{:.4},{:.4}", point.spot, point.payoff)?;
        }
        println!(
            "Payoff curve for {} written to {}",
            info.product_type, args.curve_output
        );
    }

    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
