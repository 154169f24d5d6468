//! Presentation helpers for the HTTP boundary. The engine itself only deals
//! in plain numbers; these render them the way the dashboard expects.

/// Formats a whole currency amount with thousands separators, e.g. `$1,234`.
pub fn currency(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a monthly value, e.g. `$1,234/month`.
pub fn monthly_currency(amount: i64) -> String {
    format!("{}/month", currency(amount))
}

pub fn percent(value: i64) -> String {
    format!("{value}%")
}

pub fn tons(value: i64) -> String {
    format!("{value} tons")
}

pub fn annual_growth(percent: i64) -> String {
    format!("{percent}% annually")
}
