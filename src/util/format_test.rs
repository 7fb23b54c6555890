use super::*;

// =============================================================
// money
// =============================================================

#[test]
fn format_money_groups_thousands_and_pads_minor_units() {
    assert_eq!(format_money(123_456, "USD"), "$1,234.56");
    assert_eq!(format_money(5, "usd"), "$0.05");
    assert_eq!(format_money(100_000_000, "EUR"), "€1,000,000.00");
}

#[test]
fn format_money_handles_negative_and_unknown_currency() {
    assert_eq!(format_money(-2_500, "GBP"), "-£25.00");
    assert_eq!(format_money(999, "CHF"), "CHF 9.99");
}

#[test]
fn format_percent_one_decimal() {
    assert_eq!(format_percent(0.9731), "97.3%");
    assert_eq!(format_percent(1.0), "100.0%");
}

// =============================================================
// card input
// =============================================================

#[test]
fn card_input_is_grouped_in_fours() {
    assert_eq!(format_card_input("4242424242424242"), "4242 4242 4242 4242");
    assert_eq!(format_card_input("4242-42"), "4242 42");
    assert_eq!(format_card_input(""), "");
}

#[test]
fn expiry_input_inserts_slash() {
    assert_eq!(format_expiry_input("1"), "1");
    assert_eq!(format_expiry_input("122"), "12/2");
    assert_eq!(format_expiry_input("12/299"), "12/29");
}

#[test]
fn mask_card_shows_last_four() {
    assert_eq!(mask_card("4242"), "•••• 4242");
}

// =============================================================
// dates / files
// =============================================================

#[test]
fn short_date_strips_time() {
    assert_eq!(short_date("2026-01-05T10:00:00Z"), "2026-01-05");
    assert_eq!(short_date("2026-01-05"), "2026-01-05");
}

#[test]
fn file_size_units() {
    assert_eq!(file_size(512), "512 B");
    assert_eq!(file_size(2048), "2 KB");
    assert_eq!(file_size(3 * 1024 * 1024 / 2), "1.5 MB");
}
