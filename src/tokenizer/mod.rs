//! Formula tokenizer: a modal scan followed by two resolution walks.
//!
//! [`scan`] produces the raw stream; [`tokenize`] runs the full pipeline:
//! whitespace is resolved to intersection operators or dropped, ambiguous
//! `+`/`-` tokens and empty subtypes are settled, and no-op tokens are
//! compacted away.

pub mod scanner;
pub mod stream;
pub mod tokens;

pub use scanner::scan;
pub use stream::TokenStream;
pub use tokens::{Token, TokenSubType, TokenType};

use crate::error::ValidateError;
use crate::options::TokenizeOptions;

/// Tokenizes a formula into its final, compacted token sequence.
///
/// The input need not start with `=`; one is prepended during
/// normalization. The scanner emits that `=` as an
/// `OperatorInfix`/`Logical` token at position 0, and this entry point
/// removes the artifact; use [`tokenize_with`] and
/// [`TokenizeOptions::keep_leading_equals`] for the raw stream.
pub fn tokenize(formula: &str) -> Vec<Token> {
    tokenize_with(formula, &TokenizeOptions::default())
}

/// Tokenizes a formula with explicit options.
pub fn tokenize_with(formula: &str, options: &TokenizeOptions) -> Vec<Token> {
    let raw = scanner::scan(formula);
    let resolved = resolve_whitespace(raw);
    let classified = disambiguate(resolved);
    let mut tokens = compact(classified);
    if !options.keep_leading_equals {
        strip_leading_equals(&mut tokens);
    }
    tokens
}

/// Inspects a finished stream for anomalies tokenization cannot reject:
/// leftover `Unknown` tokens and unbalanced group brackets.
pub fn validate(tokens: &[Token]) -> Result<(), ValidateError> {
    for (index, token) in tokens.iter().enumerate() {
        if token.token_type == TokenType::Unknown {
            return Err(ValidateError::UnknownToken {
                index,
                value: token.value.clone(),
            });
        }
    }

    let starts = tokens
        .iter()
        .filter(|t| t.subtype == TokenSubType::Start)
        .count();
    let stops = tokens
        .iter()
        .filter(|t| t.subtype == TokenSubType::Stop)
        .count();
    if starts != stops {
        return Err(ValidateError::UnbalancedGroups { starts, stops });
    }

    Ok(())
}

/// Second phase: each whitespace token either disappears or becomes the
/// implicit intersection operator, depending on both neighbors in the raw
/// stream. Boundary whitespace never intersects.
fn resolve_whitespace(mut input: TokenStream) -> TokenStream {
    let mut output = TokenStream::new();
    input.reset();
    while input.move_next() {
        let Some(token) = input.current() else { break };

        if token.token_type != TokenType::Whitespace {
            output.push(token.clone());
            continue;
        }

        if input.bof() || input.eof() {
            continue;
        }
        let Some(prev) = input.previous() else {
            continue;
        };
        if !(prev.token_type == TokenType::Operand || prev.closes_group()) {
            continue;
        }
        let Some(next) = input.peek_next() else {
            continue;
        };
        if !(next.token_type == TokenType::Operand || next.opens_group()) {
            continue;
        }

        output.push(Token::new(
            token.value.clone(),
            TokenType::OperatorInfix,
            TokenSubType::Intersection,
        ));
    }
    output
}

/// Third phase: settle ambiguous `+`/`-`, assign residual infix subtypes,
/// classify operands, and strip a leading `@` from function names.
///
/// The walk appends to a fresh stream and reads predecessors from its tail,
/// so each predecessor test sees the already-rewritten token; the first
/// token has no predecessor.
fn disambiguate(mut input: TokenStream) -> TokenStream {
    let mut output = TokenStream::new();
    input.reset();
    while input.move_next() {
        let Some(token) = input.current() else { break };
        let mut token = token.clone();

        if token.token_type == TokenType::OperatorInfix && token.value == "-" {
            if ends_operand(output.last()) {
                token.subtype = TokenSubType::Math;
            } else {
                token.token_type = TokenType::OperatorPrefix;
            }
            output.push(token);
            continue;
        }

        if token.token_type == TokenType::OperatorInfix && token.value == "+" {
            if ends_operand(output.last()) {
                token.subtype = TokenSubType::Math;
            } else {
                // A unary plus changes nothing; compaction drops it.
                token.token_type = TokenType::Noop;
            }
            output.push(token);
            continue;
        }

        if token.token_type == TokenType::OperatorInfix && token.subtype == TokenSubType::Nothing {
            token.subtype = if token.value.starts_with(['<', '>', '=']) {
                TokenSubType::Logical
            } else if token.value == "&" {
                TokenSubType::Concatenation
            } else {
                TokenSubType::Math
            };
            output.push(token);
            continue;
        }

        if token.token_type == TokenType::Operand && token.subtype == TokenSubType::Nothing {
            token.subtype = classify_operand(&token.value);
            output.push(token);
            continue;
        }

        if token.token_type == TokenType::Function {
            if let Some(rest) = token.value.strip_prefix('@') {
                token.value = rest.to_string();
            }
        }
        output.push(token);
    }
    output
}

/// True when the previous token can end an operand expression, making a
/// following `+`/`-` binary.
fn ends_operand(previous: Option<&Token>) -> bool {
    match previous {
        None => false,
        Some(token) => {
            token.token_type == TokenType::Operand
                || token.token_type == TokenType::OperatorPostfix
                || token.closes_group()
        }
    }
}

fn classify_operand(value: &str) -> TokenSubType {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => TokenSubType::Number,
        _ if value == "TRUE" || value == "FALSE" => TokenSubType::Logical,
        _ => TokenSubType::Range,
    }
}

/// Final phase: drop every no-op token.
fn compact(input: TokenStream) -> Vec<Token> {
    input
        .into_tokens()
        .into_iter()
        .filter(|token| token.token_type != TokenType::Noop)
        .collect()
}

fn strip_leading_equals(tokens: &mut Vec<Token>) {
    let is_leading_equals = tokens.first().is_some_and(|token| {
        token.value == "="
            && token.token_type == TokenType::OperatorInfix
            && token.subtype == TokenSubType::Logical
    });
    if is_leading_equals {
        tokens.remove(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_operand() {
        assert_eq!(classify_operand("42"), TokenSubType::Number);
        assert_eq!(classify_operand("1.5E-3"), TokenSubType::Number);
        assert_eq!(classify_operand("TRUE"), TokenSubType::Logical);
        assert_eq!(classify_operand("FALSE"), TokenSubType::Logical);
        // Case-sensitive: only the exact uppercase forms are logical.
        assert_eq!(classify_operand("true"), TokenSubType::Range);
        assert_eq!(classify_operand("A1"), TokenSubType::Range);
        assert_eq!(classify_operand("Sales"), TokenSubType::Range);
        // Parseable but not finite stays a range.
        assert_eq!(classify_operand("inf"), TokenSubType::Range);
        assert_eq!(classify_operand("NaN"), TokenSubType::Range);
    }

    #[test]
    fn test_ends_operand() {
        assert!(!ends_operand(None));
        assert!(ends_operand(Some(&Token::operand("1"))));
        assert!(ends_operand(Some(&Token::new(
            "%",
            TokenType::OperatorPostfix,
            TokenSubType::Nothing
        ))));
        assert!(ends_operand(Some(&Token::new(
            "",
            TokenType::Subexpression,
            TokenSubType::Stop
        ))));
        assert!(!ends_operand(Some(&Token::new(
            "SUM",
            TokenType::Function,
            TokenSubType::Start
        ))));
        assert!(!ends_operand(Some(&Token::new(
            "+",
            TokenType::OperatorInfix,
            TokenSubType::Math
        ))));
    }

    #[test]
    fn test_double_negation_becomes_two_prefixes() {
        let tokens = tokenize("=--1");
        assert_eq!(
            tokens,
            vec![
                Token::new("-", TokenType::OperatorPrefix, TokenSubType::Nothing),
                Token::new("-", TokenType::OperatorPrefix, TokenSubType::Nothing),
                Token::new("1", TokenType::Operand, TokenSubType::Number),
            ]
        );
    }

    #[test]
    fn test_unary_plus_is_compacted_away() {
        let tokens = tokenize("=+A1");
        assert_eq!(
            tokens,
            vec![Token::new("A1", TokenType::Operand, TokenSubType::Range)]
        );
    }

    #[test]
    fn test_binary_minus_after_close_paren() {
        let tokens = tokenize("=(1)-2");
        assert_eq!(tokens[3].value, "-");
        assert_eq!(tokens[3].token_type, TokenType::OperatorInfix);
        assert_eq!(tokens[3].subtype, TokenSubType::Math);
    }

    #[test]
    fn test_binary_minus_after_postfix() {
        let tokens = tokenize("=3%-2");
        assert_eq!(
            tokens[2],
            Token::new("-", TokenType::OperatorInfix, TokenSubType::Math)
        );
    }
}
