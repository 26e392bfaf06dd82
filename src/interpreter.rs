/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, evaluates expressions and
/// statements, manages environments and closures, and produces runtime
/// values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals, calls, and indexing.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles integer and string literals, identifiers, and operators.
/// - Folds unrecognized bytes into tokens instead of failing.
pub mod lexer;
/// The object module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation,
/// such as integers, booleans, strings, arrays, hashes, and first-class
/// functions, together with the environments closures capture and the
/// hash-key protocol composite keys rely on.
///
/// # Responsibilities
/// - Defines the `Object` enum and all supported value variants.
/// - Implements kind tags, truthiness, and user-facing display forms.
/// - Provides lexical environments and stable hash keys.
pub mod object;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements, using top-down operator precedence.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Drives parsing by operator precedence, lowest binding power first.
/// - Collects syntax errors with location info instead of stopping early.
pub mod parser;
