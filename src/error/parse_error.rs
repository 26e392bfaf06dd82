#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// The rendered message texts are part of the parser's contract and contain
/// no source position; the `line` fields exist so callers can report where
/// the error was found.
pub enum ParseError {
    /// No expression can start with the token that was found.
    NoPrefixParseFn {
        /// The kind tag of the offending token.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required next, but another one was found.
    UnexpectedToken {
        /// The kind tag that was expected.
        expected: &'static str,
        /// The kind tag that was found instead.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    IntegerLiteralOutOfRange {
        /// The raw digits of the literal.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Returns the source line the error was found on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::NoPrefixParseFn { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::IntegerLiteralOutOfRange { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPrefixParseFn { kind, .. } => {
                write!(f, "no prefix parse function for {kind} found.")
            },
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::IntegerLiteralOutOfRange { literal, .. } => {
                write!(f, "could not parse {literal:?} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
