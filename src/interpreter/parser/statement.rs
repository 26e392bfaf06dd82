use std::iter::Peekable;

use crate::{
    ast::{Block, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{Precedence, ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a whole program, collecting parse errors instead of stopping at
/// the first one.
///
/// After a failed statement the parser synchronizes to the next statement
/// boundary and continues, so one mistake does not hide the rest. Callers
/// must not evaluate the returned program when the error list is non-empty.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The parsed program together with all collected errors.
///
/// # Example
/// ```
/// use simia::interpreter::{lexer::lex, parser::statement::parse_program};
///
/// let tokens = lex("let x = 5; x + 1;");
/// let (program, errors) = parse_program(&mut tokens.iter().peekable());
///
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> (Program, Vec<ParseError>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut program = Program::default();
    let mut errors = Vec::new();

    while !matches!(tokens.peek(), Some((Token::Eof, _)) | None) {
        match parse_statement(tokens) {
            Ok(statement) => program.statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(tokens);
            },
        }
    }

    (program, errors)
}

/// Parses a single statement.
///
/// A statement is one of:
/// - a `let` binding,
/// - a `return` statement,
/// - an expression used as a statement.
///
/// Each form consumes an optional trailing semicolon.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Let, _)) => parse_let_statement(tokens),
        Some((Token::Return, _)) => parse_return_statement(tokens),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses a `let` statement.
///
/// Grammar: `let := "let" IDENT "=" expression ";"?`
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign)?;
    let value = parse_expression(tokens, Precedence::Lowest)?;
    consume_optional_semicolon(tokens);

    Ok(Statement::Let { name, value })
}

/// Parses a `return` statement.
///
/// Grammar: `return := "return" expression ";"?`
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let value = parse_expression(tokens, Precedence::Lowest)?;
    consume_optional_semicolon(tokens);

    Ok(Statement::Return { value })
}

/// Parses a bare expression in statement position.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let value = parse_expression(tokens, Precedence::Lowest)?;
    consume_optional_semicolon(tokens);

    Ok(Statement::Expression { value })
}

/// Parses statements up to the closing brace of a block.
///
/// The opening brace has already been consumed. An unterminated block ends
/// at end of input.
///
/// Grammar: `block := "{" statement* "}"`
pub(in crate::interpreter::parser) fn parse_block<'a, I>(tokens: &mut Peekable<I>)
                                                         -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::Eof, _)) | None => break,
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(Block { statements })
}

/// Consumes a trailing semicolon when one is present.
fn consume_optional_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Skips ahead to the next statement boundary after a parse error.
///
/// Consumes tokens up to and including the next semicolon, or stops in
/// front of a token that clearly begins a new statement.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::Eof | Token::Let | Token::Return => break,
            Token::Semicolon => {
                tokens.next();
                break;
            },
            _ => {
                tokens.next();
            },
        }
    }
}
