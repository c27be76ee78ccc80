//! Formatting utilities for chart axes, percentages and list summaries.

/// Format a dollar value in thousands for axis ticks (e.g. "$12k", "$7.5k").
pub fn currency_thousands(value: f64) -> String {
    let thousands = value / 1000.0;
    if thousands == 0.0 {
        "$0".to_string()
    } else {
        format!("${}k", trim_decimal(thousands))
    }
}

/// Group an integer value with commas (e.g. "45,000").
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format percentage points (e.g. "35%", "12.5%").
pub fn percent(value: f64) -> String {
    format!("{}%", trim_decimal(value))
}

/// Result counter under a filtered table (e.g. "Showing 3 of 8 orders").
pub fn result_summary(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {} of {} {}", shown, total, noun)
}

/// Up to one decimal place, without a trailing ".0".
fn trim_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_thousands() {
        assert_eq!(currency_thousands(0.0), "$0");
        assert_eq!(currency_thousands(12000.0), "$12k");
        assert_eq!(currency_thousands(7500.0), "$7.5k");
        assert_eq!(currency_thousands(30000.0), "$30k");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(45000.0), "45,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-2500.0), "-2,500");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(35.0), "35%");
        assert_eq!(percent(12.5), "12.5%");
        assert_eq!(percent(33.333), "33.3%");
    }

    #[test]
    fn test_result_summary() {
        assert_eq!(result_summary(3, 8, "orders"), "Showing 3 of 8 orders");
    }
}
