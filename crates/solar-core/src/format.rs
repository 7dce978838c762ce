// File: crates/solar-core/src/format.rs
// Summary: en-US USD currency formatting for summaries and tick labels.

/// Format a dollar amount as en-US USD: `$1,234.56`, negatives as `-$12.00`.
/// Non-finite values format as `$0.00`.
pub fn format_usd(value: f64) -> String {
    let cents = if value.is_finite() { (value * 100.0).round() as i64 } else { 0 };
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Currency label for axis ticks: same as [`format_usd`] but with a trailing
/// `.00` suppressed (`$1,800.00` -> `$1,800`).
pub fn format_usd_tick(value: f64) -> String {
    let s = format_usd(value);
    match s.strip_suffix(".00") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}

fn group_thousands(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
