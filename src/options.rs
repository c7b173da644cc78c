//! Tokenization options.

/// Options controlling the shape of the returned token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizeOptions {
    /// Keep the leading `=` token.
    ///
    /// Normalization makes every non-empty formula start with `=`, and the
    /// scanner emits it as an `OperatorInfix`/`Logical` token at position 0.
    /// By default that artifact is stripped so the stream begins with the
    /// first meaningful token; set this flag to receive the raw stream.
    pub keep_leading_equals: bool,
}
