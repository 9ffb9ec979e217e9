//! Korean-locale display formatting for amounts carried in the dataset.

/// Formats a KRW amount with compact Korean units (조 / 억 / 만).
pub fn format_krw_compact(amount: f64) -> String {
    if amount >= 1_000_000_000_000.0 {
        format!("{:.1}조", amount / 1_000_000_000_000.0)
    } else if amount >= 100_000_000.0 {
        format!("{:.0}억", amount / 100_000_000.0)
    } else if amount >= 10_000.0 {
        format!("{:.0}만", amount / 10_000.0)
    } else {
        group_thousands(amount)
    }
}

/// One decimal place + `%`, the notation used on disclosure charts.
pub fn format_percent(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Thousands-grouped price with the `원` suffix.
pub fn format_price(price: f64) -> String {
    format!("{}원", group_thousands(price))
}

fn group_thousands(n: f64) -> String {
    let rounded = n.abs().round();
    let digits = format!("{rounded:.0}");
    let offset = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n.round() < 0.0 {
        out.insert(0, '-');
    }
    out
}
