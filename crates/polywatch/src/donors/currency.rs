pub const AMOUNT_PLACEHOLDER: &str = "—";

/// Whole Australian dollars with thousands separators, e.g. `$12,345`.
///
/// Rounds half away from zero. `None` and non-finite values render as
/// [`AMOUNT_PLACEHOLDER`].
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(value) = amount.filter(|value| value.is_finite()) else {
        return AMOUNT_PLACEHOLDER.to_string();
    };

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
