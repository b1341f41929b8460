//! Presentation helpers for amounts and dates on the shell screens.

use chrono::NaiveDate;

/// Renders `amount` with the configured currency symbol.
///
/// Whole amounts drop the decimals (`$25`), others keep up to two
/// significant decimals (`$12.5`, `$3.75`).
pub fn format_amount(symbol: &str, amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let magnitude = rounded.abs();
    let digits = if magnitude.fract() == 0.0 {
        format!("{:.0}", magnitude)
    } else {
        let fixed = format!("{:.2}", magnitude);
        fixed.trim_end_matches('0').to_string()
    };
    if rounded < 0.0 {
        format!("-{}{}", symbol, digits)
    } else {
        format!("{}{}", symbol, digits)
    }
}

/// Long heading form of a day, e.g. `Fri 01 Mar 2024`.
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%a %d %b %Y").to_string()
}
