//! Tests for tokenization options.

use fxtok::{tokenize, tokenize_with, Token, TokenSubType, TokenType, TokenizeOptions};

#[test]
fn test_default_strips_leading_equals() {
    let tokens = tokenize("=1+2");
    assert_eq!(tokens[0].value, "1");
}

#[test]
fn test_keep_leading_equals_exposes_raw_stream() {
    let options = TokenizeOptions {
        keep_leading_equals: true,
    };
    let tokens = tokenize_with("=1+2", &options);
    assert_eq!(
        tokens[0],
        Token::new("=", TokenType::OperatorInfix, TokenSubType::Logical)
    );
    assert_eq!(&tokens[1..], &tokenize("=1+2")[..]);
}

#[test]
fn test_keep_leading_equals_on_unprefixed_input() {
    // Normalization prepends the `=` before scanning, so the raw stream
    // carries it either way.
    let options = TokenizeOptions {
        keep_leading_equals: true,
    };
    assert_eq!(
        tokenize_with("1+2", &options),
        tokenize_with("=1+2", &options)
    );
}

#[test]
fn test_interior_equals_is_untouched() {
    // Only the position-0 artifact is stripped; a real comparison stays.
    let tokens = tokenize("=A1=B1");
    assert_eq!(
        tokens,
        vec![
            Token::new("A1", TokenType::Operand, TokenSubType::Range),
            Token::new("=", TokenType::OperatorInfix, TokenSubType::Logical),
            Token::new("B1", TokenType::Operand, TokenSubType::Range),
        ]
    );
}

#[test]
fn test_default_options() {
    let options = TokenizeOptions::default();
    assert!(!options.keep_leading_equals);
}
