//! Display formatting for money, cards and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency symbol for the codes the dashboard knows; other codes are
/// rendered as a `CODE ` prefix.
#[must_use]
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "NGN" => Some("₦"),
        _ => None,
    }
}

/// Format integer minor units, e.g. `123456, "USD"` -> `$1,234.56`.
#[must_use]
pub fn format_money(amount_minor: i64, currency: &str) -> String {
    let negative = amount_minor < 0;
    let abs = amount_minor.unsigned_abs();
    let major = group_thousands(abs / 100);
    let minor = abs % 100;
    let prefix = currency_symbol(currency).map_or_else(|| format!("{} ", currency.to_ascii_uppercase()), str::to_owned);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{prefix}{major}.{minor:02}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `0.9731` -> `97.3%`.
#[must_use]
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// `•••• 4242`.
#[must_use]
pub fn mask_card(last4: &str) -> String {
    format!("•••• {last4}")
}

/// Group card digits in fours while typing, dropping anything else.
#[must_use]
pub fn format_card_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(19).collect();
    digits
        .as_bytes()
        .chunks(4)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize expiry input towards `MM/YY`.
#[must_use]
pub fn format_expiry_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() <= 2 {
        digits
    } else {
        format!("{}/{}", &digits[..2], &digits[2..])
    }
}

/// Date part of an RFC 3339 timestamp (`2026-01-05T10:00:00Z` -> `2026-01-05`).
#[must_use]
pub fn short_date(timestamp: &str) -> &str {
    timestamp.split_once('T').map_or(timestamp, |(date, _)| date)
}

/// Human-readable file size for upload previews.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}
