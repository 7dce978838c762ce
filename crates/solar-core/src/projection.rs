// File: crates/solar-core/src/projection.rs
// Summary: Multi-year utility vs. solar cost projection with compounding escalators.

use crate::format::format_usd;

/// Fixed utility annual rate increase (9% per year). Not user-configurable.
pub const UTILITY_RATE: f64 = 0.09;

/// Scenario inputs for a cost projection. Amounts are monthly dollars,
/// `solar_annual_rate` is a fraction (0.03 = 3%/yr).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionInput {
    pub monthly_utility_bill: f64,
    pub monthly_solar_payment: f64,
    pub years: u32,
    pub solar_annual_rate: f64,
}

impl ProjectionInput {
    /// Build an input, clamping negative or non-finite amounts/rates to 0.
    pub fn new(
        monthly_utility_bill: f64,
        monthly_solar_payment: f64,
        years: u32,
        solar_annual_rate: f64,
    ) -> Self {
        Self {
            monthly_utility_bill: sanitize_amount(monthly_utility_bill),
            monthly_solar_payment: sanitize_amount(monthly_solar_payment),
            years,
            solar_annual_rate: sanitize_amount(solar_annual_rate),
        }
    }

    /// Build an input from raw textual fields, as they arrive from a form or
    /// CLI. Policy: anything that fails to parse coerces to 0, never an error.
    /// The escalator arrives as a percentage ("2.9") and is divided by 100.
    pub fn from_raw(bill: &str, solar_payment: &str, years: &str, escalator_pct: &str) -> Self {
        let pct = escalator_pct.trim().parse::<f64>().unwrap_or(0.0) / 100.0;
        Self::new(
            bill.trim().parse::<f64>().unwrap_or(0.0),
            solar_payment.trim().parse::<f64>().unwrap_or(0.0),
            years.trim().parse::<u32>().unwrap_or(0),
            pct,
        )
    }
}

fn sanitize_amount(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// One projected year. Index 0 is the first year ("Year 1").
#[derive(Clone, Debug, PartialEq)]
pub struct YearlyCost {
    pub label: String,
    pub utility_annual: f64,
    pub solar_annual: f64,
}

/// Monthly/annual costs and savings for the last projected year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalYearSnapshot {
    pub year: u32,
    pub utility_monthly: f64,
    pub solar_monthly: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
}

impl FinalYearSnapshot {
    /// One-line summary as shown to the user.
    pub fn summary_line(&self) -> String {
        format!(
            "Year {}: Utility monthly cost {}, Solar monthly cost {}, \
             Monthly savings {}, Annual savings {}",
            self.year,
            format_usd(self.utility_monthly),
            format_usd(self.solar_monthly),
            format_usd(self.monthly_savings),
            format_usd(self.annual_savings),
        )
    }
}

/// Full projection output. Recomputed fresh on every call; holds no state.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionResult {
    pub series: Vec<YearlyCost>,
    pub total_utility: f64,
    pub total_solar: f64,
    /// Present iff `years > 0`.
    pub final_year: Option<FinalYearSnapshot>,
}

impl ProjectionResult {
    /// Lifetime savings of solar over utility (may be negative).
    pub fn savings(&self) -> f64 {
        self.total_utility - self.total_solar
    }

    pub fn labels(&self) -> Vec<String> {
        self.series.iter().map(|y| y.label.clone()).collect()
    }

    pub fn utility_annual(&self) -> Vec<f64> {
        self.series.iter().map(|y| y.utility_annual).collect()
    }

    pub fn solar_annual(&self) -> Vec<f64> {
        self.series.iter().map(|y| y.solar_annual).collect()
    }
}

/// Project annual utility and solar costs over the horizon.
///
/// Year `i` compounds the monthly amounts by the respective escalator:
/// `monthly * (1 + rate)^i`, annual cost is `monthly * 12`. Total over its
/// domain: a zero-year horizon yields an empty series, zero totals, and no
/// final-year snapshot.
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    let mut series = Vec::with_capacity(input.years as usize);
    let mut total_utility = 0.0;
    let mut total_solar = 0.0;

    for year in 0..input.years {
        let utility_monthly = input.monthly_utility_bill * (1.0 + UTILITY_RATE).powi(year as i32);
        let solar_monthly =
            input.monthly_solar_payment * (1.0 + input.solar_annual_rate).powi(year as i32);
        let utility_annual = utility_monthly * 12.0;
        let solar_annual = solar_monthly * 12.0;
        total_utility += utility_annual;
        total_solar += solar_annual;
        series.push(YearlyCost {
            label: format!("Year {}", year + 1),
            utility_annual,
            solar_annual,
        });
    }

    let final_year = series.last().map(|last| {
        let index = (input.years - 1) as i32;
        let utility_monthly = input.monthly_utility_bill * (1.0 + UTILITY_RATE).powi(index);
        let solar_monthly =
            input.monthly_solar_payment * (1.0 + input.solar_annual_rate).powi(index);
        FinalYearSnapshot {
            year: input.years,
            utility_monthly,
            solar_monthly,
            monthly_savings: utility_monthly - solar_monthly,
            annual_savings: last.utility_annual - last.solar_annual,
        }
    });

    ProjectionResult { series, total_utility, total_solar, final_year }
}
