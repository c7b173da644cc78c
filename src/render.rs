//! Consumers over the final token stream: an indented dump and a formula
//! re-renderer.

use crate::tokenizer::{Token, TokenSubType, TokenType};

/// Prints one token per line as `value <Type> <SubType>`, tab-indented by
/// group depth. Depth increases after a start token and decreases before a
/// stop token; malformed streams can momentarily drive the depth negative,
/// which prints at the margin.
pub fn pretty_print(tokens: &[Token]) -> String {
    let mut indent: i32 = 0;
    let mut output = String::new();
    for token in tokens {
        if token.subtype == TokenSubType::Stop {
            indent -= 1;
        }
        for _ in 0..indent.max(0) {
            output.push('\t');
        }
        output.push_str(&token.to_string());
        output.push('\n');
        if token.subtype == TokenSubType::Start {
            indent += 1;
        }
    }
    output
}

/// Reconstructs formula text from a token stream.
///
/// Text operands are re-quoted without re-doubling embedded quotes, and
/// single-quoted sheet prefixes are not restored, so rendering is not a
/// byte-exact inverse of scanning; re-tokenizing the output does yield the
/// same stream for well-formed input.
pub fn render(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        match (token.token_type, token.subtype) {
            (TokenType::Function, TokenSubType::Start) => {
                output.push_str(&token.value);
                output.push('(');
            }
            (TokenType::Function, TokenSubType::Stop)
            | (TokenType::Subexpression, TokenSubType::Stop) => output.push(')'),
            (TokenType::Subexpression, TokenSubType::Start) => output.push('('),
            (TokenType::Operand, TokenSubType::Text) => {
                output.push('"');
                output.push_str(&token.value);
                output.push('"');
            }
            (TokenType::OperatorInfix, TokenSubType::Intersection) => output.push(' '),
            _ => output.push_str(&token.value),
        }
    }
    output
}
