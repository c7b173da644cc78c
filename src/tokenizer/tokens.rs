//! Token types for the formula tokenizer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a formula token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Placeholder left by disambiguation (a dropped unary `+`); removed by
    /// compaction and never present in a returned stream.
    Noop,
    /// A leaf value: text, number, logical, cell range or error literal.
    Operand,
    /// A named call, or the `ARRAY`/`ARRAYROW` pseudo-functions that model
    /// array literals.
    Function,
    /// A parenthesized grouping with no name in front of it.
    Subexpression,
    /// The comma separating function arguments or array-row cells.
    Argument,
    /// Unary operator (`-`, and `+` before it is dropped).
    OperatorPrefix,
    /// Binary operator; the subtype carries its family.
    OperatorInfix,
    /// The percent operator.
    OperatorPostfix,
    /// Raw whitespace from the scan phase; resolved to an intersection
    /// operator or dropped before the stream is returned.
    Whitespace,
    /// Text the scanner could not attribute to any construct.
    Unknown,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Noop => "Noop",
            TokenType::Operand => "Operand",
            TokenType::Function => "Function",
            TokenType::Subexpression => "Subexpression",
            TokenType::Argument => "Argument",
            TokenType::OperatorPrefix => "OperatorPrefix",
            TokenType::OperatorInfix => "OperatorInfix",
            TokenType::OperatorPostfix => "OperatorPostfix",
            TokenType::Whitespace => "Whitespace",
            TokenType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// The subtype of a formula token.
///
/// `Nothing` is the empty subtype; it displays as an empty string. Operands
/// and single-character infix operators leave the scan phase with subtype
/// `Nothing` and receive their final subtype during disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TokenSubType {
    #[default]
    Nothing,
    Start,
    Stop,
    Text,
    Number,
    Logical,
    Error,
    Range,
    Math,
    Concatenation,
    Intersection,
    Union,
}

impl fmt::Display for TokenSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenSubType::Nothing => "",
            TokenSubType::Start => "Start",
            TokenSubType::Stop => "Stop",
            TokenSubType::Text => "Text",
            TokenSubType::Number => "Number",
            TokenSubType::Logical => "Logical",
            TokenSubType::Error => "Error",
            TokenSubType::Range => "Range",
            TokenSubType::Math => "Math",
            TokenSubType::Concatenation => "Concatenation",
            TokenSubType::Intersection => "Intersection",
            TokenSubType::Union => "Union",
        };
        f.write_str(name)
    }
}

/// A classified fragment of a formula.
///
/// Serialization uses the string-triple form `{value, type, subtype}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub subtype: TokenSubType,
}

impl Token {
    /// Creates a token from its parts.
    pub fn new(value: impl Into<String>, token_type: TokenType, subtype: TokenSubType) -> Self {
        Token {
            value: value.into(),
            token_type,
            subtype,
        }
    }

    /// Creates a not-yet-classified operand; disambiguation assigns the
    /// Number/Logical/Range subtype.
    pub fn operand(value: impl Into<String>) -> Self {
        Token::new(value, TokenType::Operand, TokenSubType::Nothing)
    }

    /// True for a `Function` or `Subexpression` token that opens a group.
    pub fn opens_group(&self) -> bool {
        matches!(
            self.token_type,
            TokenType::Function | TokenType::Subexpression
        ) && self.subtype == TokenSubType::Start
    }

    /// True for a `Function` or `Subexpression` token that closes a group.
    pub fn closes_group(&self) -> bool {
        matches!(
            self.token_type,
            TokenType::Function | TokenType::Subexpression
        ) && self.subtype == TokenSubType::Stop
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> <{}>", self.value, self.token_type, self.subtype)
    }
}
