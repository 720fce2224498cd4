#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    // Japanese characters are multi-byte UTF-8
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_emoji() {
    assert_eq!(truncate("🎉🎊🎈🎁", 3), "🎉🎊…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_mixed_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(1234), "$1,234");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(999), "$999");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(0), "$0");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(-42), "-$42");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(1_234_567), "$1,234,567");
}

#[test]
fn test_format_amount_millions() {
    assert_eq!(format_amount(10_000_000), "$10,000,000");
}

#[test]
fn test_format_amount_negative_large() {
    assert_eq!(format_amount(-99_999), "-$99,999");
}

#[test]
fn test_format_amount_single_digit() {
    assert_eq!(format_amount(5), "$5");
}

// ── format_allowance ──────────────────────────────────────

#[test]
fn test_format_allowance_basic() {
    assert_eq!(format_allowance(dec!(58.33)), "$58.33");
}

#[test]
fn test_format_allowance_pads_two_decimals() {
    assert_eq!(format_allowance(dec!(7.5)), "$7.50");
    assert_eq!(format_allowance(dec!(600)), "$600.00");
}

#[test]
fn test_format_allowance_groups_thousands() {
    assert_eq!(format_allowance(dec!(1250)), "$1,250.00");
}

#[test]
fn test_format_allowance_zero() {
    assert_eq!(format_allowance(dec!(0)), "$0.00");
}

// ── parse_amount ──────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("42"), Some(42));
}

#[test]
fn test_parse_amount_with_separators() {
    assert_eq!(parse_amount("$1,250"), Some(1250));
    assert_eq!(parse_amount(" 300 "), Some(300));
}

#[test]
fn test_parse_amount_rejects_zero_and_negative() {
    assert_eq!(parse_amount("0"), None);
    assert_eq!(parse_amount("-5"), None);
}

#[test]
fn test_parse_amount_rejects_fractions() {
    assert_eq!(parse_amount("4.50"), None);
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(parse_amount("lots"), None);
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("$"), None);
}
