// File: crates/demo/src/main.rs
// Summary: Demo projects a utility-vs-solar scenario, prints the cost summary, renders a PNG.

use anyhow::{Context, Result};
use solar_core::{format_usd, project, theme, CostChart, ProjectionInput, RenderOptions};
use std::path::PathBuf;

// Defaults mirror the estimator page: $150 bill, $120 payment, 20 years, 2.9% escalator.
const DEFAULT_BILL: &str = "150";
const DEFAULT_SOLAR: &str = "120";
const DEFAULT_YEARS: &str = "20";
const DEFAULT_ESCALATOR_PCT: &str = "2.9";

fn main() -> Result<()> {
    // Positional args: [bill] [solar_payment] [years] [escalator_pct] [out.png] [theme]
    // Missing or malformed numeric args coerce to 0, matching the estimator's
    // lenient input policy.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize| args.get(i).map(String::as_str);

    let input = ProjectionInput::from_raw(
        arg(0).unwrap_or(DEFAULT_BILL),
        arg(1).unwrap_or(DEFAULT_SOLAR),
        arg(2).unwrap_or(DEFAULT_YEARS),
        arg(3).unwrap_or(DEFAULT_ESCALATOR_PCT),
    );
    let out = arg(4)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out/solar_projection.png"));

    println!(
        "Scenario: bill {}/mo, solar {}/mo, {} years, escalator {:.1}%/yr (utility fixed at 9%/yr)",
        format_usd(input.monthly_utility_bill),
        format_usd(input.monthly_solar_payment),
        input.years,
        input.solar_annual_rate * 100.0,
    );

    let result = project(&input);
    println!("Total utility cost: {}", format_usd(result.total_utility));
    println!("Total solar cost:   {}", format_usd(result.total_solar));
    println!("Estimated savings:  {}", format_usd(result.savings()));
    match &result.final_year {
        Some(snapshot) => println!("{}", snapshot.summary_line()),
        None => println!("Select a timeline to view annual costs."),
    }

    let chart = CostChart::from_projection(&result);
    let mut opts = RenderOptions::default();
    if let Some(name) = arg(5) {
        opts.theme = theme::find(name);
    }
    chart
        .render_to_png(&opts, &out)
        .with_context(|| format!("rendering chart to '{}'", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}
