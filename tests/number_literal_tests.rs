//! Tests for integer literal classification: radix suffixes, overflow, and
//! the sign-merge lookback

use std::io;
use toklex::{LexError, Lexer, LexerConfig, Token};

fn scan(input: &str, operators: &[u8]) -> toklex::ScanOutput {
    let config = LexerConfig {
        operators: operators.to_vec(),
        ..LexerConfig::default()
    };
    Lexer::with_sink(input, config, Box::new(io::sink()))
        .expect("config should be valid")
        .run()
}

#[test]
fn test_plain_decimal() {
    let output = scan("0 7 1234567890", b"");
    assert_eq!(
        output.tokens,
        vec![Token::Int(0), Token::Int(7), Token::Int(1234567890)]
    );
    assert!(output.ok);
}

#[test]
fn test_hex_suffix_both_cases() {
    let output = scan("0x1F 0X1f", b"");
    assert_eq!(output.tokens, vec![Token::Int(31), Token::Int(31)]);
}

#[test]
fn test_binary_and_octal_suffixes() {
    let output = scan("0b101 0B11 0o17 0O7", b"");
    assert_eq!(
        output.tokens,
        vec![Token::Int(5), Token::Int(3), Token::Int(15), Token::Int(7)]
    );
}

#[test]
fn test_decimal_prefix_is_discarded_before_reparse() {
    // The digits before the radix letter do not contribute to the value
    let output = scan("7x10", b"");
    assert_eq!(output.tokens, vec![Token::Int(16)]);
}

#[test]
fn test_unknown_suffix_reports_and_skips() {
    let output = scan("12kg 3", b"");
    assert!(!output.ok);
    assert_eq!(output.tokens, vec![Token::Int(3)]);
    assert!(matches!(
        &output.errors[0],
        LexError::UnknownNumericSuffix { suffix, .. } if suffix == "kg"
    ));
}

#[test]
fn test_radix_letter_with_no_digits() {
    let output = scan("0x", b"");
    assert!(!output.ok);
    assert!(matches!(
        &output.errors[0],
        LexError::UnknownNumericSuffix { suffix, .. } if suffix == "x"
    ));
}

#[test]
fn test_radix_digits_out_of_range() {
    let output = scan("0b2", b"");
    assert!(!output.ok);
    assert!(matches!(
        &output.errors[0],
        LexError::UnknownNumericSuffix { suffix, .. } if suffix == "b2"
    ));
}

#[test]
fn test_decimal_overflow() {
    let output = scan("99999999999999999999", b"");
    assert!(!output.ok);
    assert!(output.tokens.is_empty());
    assert!(matches!(output.errors[0], LexError::IntegerOverflow { .. }));
}

#[test]
fn test_hex_overflow() {
    let output = scan("0xFFFFFFFFFFFFFFFFF", b"");
    assert!(!output.ok);
    assert!(matches!(output.errors[0], LexError::IntegerOverflow { .. }));
}

#[test]
fn test_full_width_hex_wraps_into_signed_payload() {
    // The payload slot is 64 bits; the all-ones pattern reads back as -1
    let output = scan("0xFFFFFFFFFFFFFFFF", b"");
    assert_eq!(output.tokens, vec![Token::Int(-1)]);
    assert!(output.ok);
}

#[test]
fn test_sign_merged_between_operators() {
    let output = scan("(-5)", b"-()");
    assert_eq!(
        output.tokens,
        vec![Token::Operator(1), Token::Int(-5), Token::Operator(2)]
    );
}

#[test]
fn test_sign_kept_after_operand() {
    let output = scan("3-5", b"-()");
    assert_eq!(
        output.tokens,
        vec![Token::Int(3), Token::Operator(0), Token::Int(5)]
    );
}

#[test]
fn test_sign_kept_after_identifier() {
    let output = scan("x-1", b"-()");
    assert_eq!(
        output.tokens,
        vec![
            Token::Ident(toklex::fnv1a(b"x")),
            Token::Operator(0),
            Token::Int(1),
        ]
    );
}

#[test]
fn test_leading_minus_without_lookback_stays_operator() {
    // Fewer than two preceding tokens: the '-' is left in the stream
    let output = scan("- 5", b"-");
    assert_eq!(output.tokens, vec![Token::Operator(0), Token::Int(5)]);
}

#[test]
fn test_sign_merge_applies_to_radix_literals() {
    let output = scan("= -0x10", b"=-");
    assert_eq!(output.tokens, vec![Token::Operator(0), Token::Int(-16)]);
}
