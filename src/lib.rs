//! fxtok - Excel-compatible spreadsheet formula tokenizer
//!
//! This crate turns a formula string into a flat, classified token sequence
//! that evaluators, formatters and dependency analyzers can consume without
//! re-scanning characters. Tokenization is a pure function and never fails;
//! syntactic anomalies surface in the stream itself as `Unknown` tokens or
//! catch-all `Range` operands.

pub mod error;
pub mod options;
pub mod render;
pub mod tokenizer;

mod cache;

pub use cache::tokenize_cached;
pub use error::ValidateError;
pub use options::TokenizeOptions;
pub use render::{pretty_print, render};
pub use tokenizer::{
    tokenize, tokenize_with, validate, Token, TokenStream, TokenSubType, TokenType,
};
