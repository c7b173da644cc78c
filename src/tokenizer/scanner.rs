//! Scan phase: a modal, single-pass character scanner over the formula.
//!
//! The scanner walks the normalized formula one code point at a time,
//! accumulating a pending token and emitting raw tokens into a
//! [`TokenStream`]. Quoted strings, sheet-path quotes, bracketed reference
//! fragments and `#...` error literals each put the scanner into a modal
//! state; array braces and parentheses maintain a grouping stack so that
//! every close emits a stop token of the matching type. Operator and
//! operand subtypes are mostly left empty here and resolved by the later
//! walks.

use regex::Regex;
use std::sync::OnceLock;

use super::stream::{GroupStack, TokenStream};
use super::tokens::{Token, TokenSubType, TokenType};

/// Error literals recognized by the scanner, matched exactly. Anything else
/// beginning with `#` keeps accumulating until end of input.
const ERROR_LITERALS: [&str; 7] = [
    "#NULL!", "#DIV/0!", "#VALUE!", "#REF!", "#NAME?", "#NUM!", "#N/A",
];

/// Single-character infix operators; their subtype is resolved later.
const INFIX_OPERATORS: &str = "+-*/^&=><";

/// Matches an accumulator that is the mantissa-plus-`E` prefix of a
/// scientific-notation number, e.g. `1.5E` in `1.5E-3`.
fn sci_exponent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[1-9](\.[0-9]+)?E$").expect("valid literal pattern"))
}

/// Modal state of the scanner. A single enum keeps the "at most one modal
/// context at a time" rule structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Normal,
    /// Inside a double-quoted text literal; `""` embeds a quote, the
    /// closing quote emits a text operand.
    InString,
    /// Inside a single-quoted workbook/sheet prefix; `''` embeds a quote,
    /// the closing quote does not end the pending token.
    InPath,
    /// Inside a `[...]` reference fragment; brackets are kept verbatim and
    /// the close does not end the pending token.
    InRange,
    /// Accumulating a `#...` error literal until it matches the dictionary.
    InError,
}

/// Runs the scan phase over a formula, producing the raw token stream.
///
/// The input is trimmed and, when non-empty, normalized to start with `=`;
/// the `=` itself is emitted as an ordinary infix operator token.
pub fn scan(formula: &str) -> TokenStream {
    Scanner::new(formula).run()
}

struct Scanner {
    chars: Vec<char>,
    offset: usize,
    token: String,
    mode: ScanMode,
    stack: GroupStack,
    out: TokenStream,
}

impl Scanner {
    fn new(formula: &str) -> Self {
        let trimmed = formula.trim();
        let mut chars: Vec<char> = trimmed.chars().collect();
        if !chars.is_empty() && chars[0] != '=' {
            chars.insert(0, '=');
        }
        Scanner {
            chars,
            offset: 0,
            token: String::new(),
            mode: ScanMode::Normal,
            stack: GroupStack::default(),
            out: TokenStream::new(),
        }
    }

    fn run(mut self) -> TokenStream {
        while self.offset < self.chars.len() {
            match self.mode {
                ScanMode::InString => self.scan_string(),
                ScanMode::InPath => self.scan_path(),
                ScanMode::InRange => self.scan_range(),
                ScanMode::InError => self.scan_error(),
                ScanMode::Normal => self.scan_normal(),
            }
        }

        // Trailing accumulation, including any unterminated modal context,
        // becomes a plain operand.
        self.flush(TokenType::Operand);
        self.out
    }

    fn current(&self) -> char {
        self.chars[self.offset]
    }

    fn next_char(&self) -> Option<char> {
        self.chars.get(self.offset + 1).copied()
    }

    /// The two-character comparator at the cursor, if any.
    fn comparator_pair(&self) -> Option<&'static str> {
        match (self.current(), self.next_char()?) {
            ('>', '=') => Some(">="),
            ('<', '=') => Some("<="),
            ('<', '>') => Some("<>"),
            _ => None,
        }
    }

    /// Emits the pending accumulator, if any, with the given type and an
    /// empty subtype.
    fn flush(&mut self, token_type: TokenType) {
        if !self.token.is_empty() {
            let value = std::mem::take(&mut self.token);
            self.out
                .push(Token::new(value, token_type, TokenSubType::Nothing));
        }
    }

    /// Emits an open-group token and records it on the grouping stack.
    fn open_group(&mut self, token: Token) {
        self.out.push(token.clone());
        self.stack.push(token);
    }

    fn scan_string(&mut self) {
        let c = self.current();
        if c == '"' {
            if self.next_char() == Some('"') {
                self.token.push('"');
                self.offset += 2;
            } else {
                self.mode = ScanMode::Normal;
                let value = std::mem::take(&mut self.token);
                self.out
                    .push(Token::new(value, TokenType::Operand, TokenSubType::Text));
                self.offset += 1;
            }
        } else {
            self.token.push(c);
            self.offset += 1;
        }
    }

    fn scan_path(&mut self) {
        let c = self.current();
        if c == '\'' {
            if self.next_char() == Some('\'') {
                self.token.push('\'');
                self.offset += 2;
            } else {
                // The close quote ends the mode but not the pending token;
                // a trailing sheet reference keeps accumulating.
                self.mode = ScanMode::Normal;
                self.offset += 1;
            }
        } else {
            self.token.push(c);
            self.offset += 1;
        }
    }

    fn scan_range(&mut self) {
        let c = self.current();
        if c == ']' {
            self.mode = ScanMode::Normal;
        }
        self.token.push(c);
        self.offset += 1;
    }

    fn scan_error(&mut self) {
        self.token.push(self.current());
        self.offset += 1;
        if ERROR_LITERALS.contains(&self.token.as_str()) {
            self.mode = ScanMode::Normal;
            let value = std::mem::take(&mut self.token);
            self.out
                .push(Token::new(value, TokenType::Operand, TokenSubType::Error));
        }
    }

    fn scan_normal(&mut self) {
        let c = self.current();

        // A sign directly after a mantissa-and-`E` accumulator belongs to
        // the number: `1.5E-3` stays one operand.
        if (c == '+' || c == '-') && self.token.len() > 1 && sci_exponent_re().is_match(&self.token)
        {
            self.token.push(c);
            self.offset += 1;
            return;
        }

        if c == '"' {
            // A pending token in front of a quote has nothing it can belong to.
            self.flush(TokenType::Unknown);
            self.mode = ScanMode::InString;
            self.offset += 1;
            return;
        }

        if c == '\'' {
            self.flush(TokenType::Unknown);
            self.mode = ScanMode::InPath;
            self.offset += 1;
            return;
        }

        if c == '[' {
            self.mode = ScanMode::InRange;
            self.token.push(c);
            self.offset += 1;
            return;
        }

        if c == '#' {
            self.flush(TokenType::Unknown);
            self.mode = ScanMode::InError;
            self.token.push(c);
            self.offset += 1;
            return;
        }

        // An array literal opens both the array and its first row.
        if c == '{' {
            self.flush(TokenType::Unknown);
            self.open_group(Token::new("ARRAY", TokenType::Function, TokenSubType::Start));
            self.open_group(Token::new(
                "ARRAYROW",
                TokenType::Function,
                TokenSubType::Start,
            ));
            self.offset += 1;
            return;
        }

        // A semicolon closes the current row and opens the next one.
        if c == ';' {
            self.flush(TokenType::Operand);
            let stop = self.stack.pop();
            self.out.push(stop);
            self.out
                .push(Token::new(",", TokenType::Argument, TokenSubType::Nothing));
            self.open_group(Token::new(
                "ARRAYROW",
                TokenType::Function,
                TokenSubType::Start,
            ));
            self.offset += 1;
            return;
        }

        if c == '}' {
            self.flush(TokenType::Operand);
            let row_stop = self.stack.pop();
            self.out.push(row_stop);
            let array_stop = self.stack.pop();
            self.out.push(array_stop);
            self.offset += 1;
            return;
        }

        // One whitespace token per run of spaces.
        if c == ' ' {
            self.flush(TokenType::Operand);
            self.out
                .push(Token::new("", TokenType::Whitespace, TokenSubType::Nothing));
            self.offset += 1;
            while self.offset < self.chars.len() && self.chars[self.offset] == ' ' {
                self.offset += 1;
            }
            return;
        }

        // Two-character comparators bind before single-character operators.
        if let Some(op) = self.comparator_pair() {
            self.flush(TokenType::Operand);
            self.out
                .push(Token::new(op, TokenType::OperatorInfix, TokenSubType::Logical));
            self.offset += 2;
            return;
        }

        if INFIX_OPERATORS.contains(c) {
            self.flush(TokenType::Operand);
            self.out.push(Token::new(
                c.to_string(),
                TokenType::OperatorInfix,
                TokenSubType::Nothing,
            ));
            self.offset += 1;
            return;
        }

        if c == '%' {
            self.flush(TokenType::Operand);
            self.out.push(Token::new(
                "%",
                TokenType::OperatorPostfix,
                TokenSubType::Nothing,
            ));
            self.offset += 1;
            return;
        }

        // An accumulated name in front of `(` makes a function call; a bare
        // `(` opens a subexpression.
        if c == '(' {
            if self.token.is_empty() {
                self.open_group(Token::new(
                    "",
                    TokenType::Subexpression,
                    TokenSubType::Start,
                ));
            } else {
                let name = std::mem::take(&mut self.token);
                self.open_group(Token::new(name, TokenType::Function, TokenSubType::Start));
            }
            self.offset += 1;
            return;
        }

        // A comma separates arguments inside a function group and acts as
        // the union operator everywhere else.
        if c == ',' {
            self.flush(TokenType::Operand);
            let token = if self.stack.top_is(TokenType::Function) {
                Token::new(",", TokenType::Argument, TokenSubType::Nothing)
            } else {
                Token::new(",", TokenType::OperatorInfix, TokenSubType::Union)
            };
            self.out.push(token);
            self.offset += 1;
            return;
        }

        if c == ')' {
            self.flush(TokenType::Operand);
            let stop = self.stack.pop();
            self.out.push(stop);
            self.offset += 1;
            return;
        }

        self.token.push(c);
        self.offset += 1;
    }
}
