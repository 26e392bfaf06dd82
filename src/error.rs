/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an abstract syntax tree: unexpected tokens, missing expression starts,
/// and out-of-range integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, unknown operators and identifiers, bad calls and indexing,
/// builtin argument errors, and arithmetic failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
