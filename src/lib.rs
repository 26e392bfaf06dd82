//! # simia
//!
//! simia is an interpreter for a small dynamically typed expression
//! language written in Rust. It parses source text into an abstract syntax
//! tree and evaluates it with support for integers, booleans, strings,
//! arrays, hashes, first-class functions with closures, and built-in
//! functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::eval_statements,
        lexer::lex,
        object::{core::Object, environment::Environment},
        parser::statement::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that represent
/// the syntactic structure of source code as a tree, together with the
/// pretty-printer that reconstructs a parseable surface form. The AST is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Defines the prefix and infix operator enums.
/// - Prints every node back into a form that parses to the same tree.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. Message wording is part of the language contract;
/// parse errors additionally carry the source line they were found on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Renders the contractual message for each failure.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the runtime
/// object model, and error handling to provide a complete runtime for
/// source code evaluation. It exposes the public API for interpreting and
/// executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, objects.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a source string into a program plus any parse errors.
///
/// The program is usable only when the error list is empty; the evaluator
/// is never invoked on a program that produced parse errors.
///
/// # Examples
/// ```
/// use simia::parse;
///
/// let (program, errors) = parse("let x = 5; x + 1;");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = 5; (x + 1);");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let tokens = lex(source);
    parse_program(&mut tokens.iter().peekable())
}

/// Parses and evaluates a whole program.
///
/// All statements run against a fresh root environment. When `auto_print`
/// is set and the program produced a value other than `null`, the value's
/// display form is printed to standard output.
///
/// # Errors
/// Returns the first parse error when the source does not parse, or the
/// runtime error that aborted evaluation.
///
/// # Examples
/// ```
/// use simia::run_program;
///
/// // Simple program: the result is computed and no error occurs.
/// let res = run_program("let result = 2 + 2", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown identifier).
/// let res = run_program("let y = x + 1", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn run_program(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (program, errors) = parse(source);

    if let Some(error) = errors.into_iter().next() {
        return Err(Box::new(error));
    }

    let env = Environment::new();
    let result = eval_statements(&program, &env)?;

    if auto_print && result != Object::Null {
        println!("{result}");
    }

    Ok(())
}
