/// UI layer: egui rendering over [`crate::state::AppState`].
pub mod charts;
pub mod map;
pub mod panels;
pub mod table;

/// Whole-dollar display, e.g. `$1,250,000`.
pub(crate) fn format_usd(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.0}", value)))
}

/// Dollars-and-cents display, e.g. `$133,333.33`.
pub(crate) fn format_usd_cents(value: f64) -> String {
    let text = format!("{value:.2}");
    match text.split_once('.') {
        Some((whole, cents)) => format!("${}.{cents}", group_thousands(whole)),
        None => format!("${}", group_thousands(&text)),
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(b as char);
    }
    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(950.0), "$950");
        assert_eq!(format_usd(1_250_000.0), "$1,250,000");
        assert_eq!(format_usd(-42_000.0), "$-42,000");
    }

    #[test]
    fn keeps_cents() {
        assert_eq!(format_usd_cents(133_333.333), "$133,333.33");
        assert_eq!(format_usd_cents(80_000.0), "$80,000.00");
    }
}
