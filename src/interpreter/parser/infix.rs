use std::iter::Peekable;

use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression, token_precedence},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for all tokens that are not one of the eight binary
/// operators; call and index parsing is dispatched separately.
///
/// # Example
/// ```
/// use simia::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::infix::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::Plus), Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Asterisk => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Lt => Some(InfixOperator::Lt),
        Token::Gt => Some(InfixOperator::Gt),
        Token::Eq => Some(InfixOperator::Eq),
        Token::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}

/// Parses an infix operator application.
///
/// The operator token is consumed and the right-hand side is parsed at the
/// operator's own precedence, which makes all eight operators
/// left-associative. If the next token is not an operator after all, the
/// left-hand expression is returned unchanged.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operator.
/// - `left`: The already-parsed left operand.
///
/// # Returns
/// An `Expr::Infix` combining both operands.
pub(in crate::interpreter::parser) fn parse_infix_operation<'a, I>(tokens: &mut Peekable<I>,
                                                                   left: Expr)
                                                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, _)) = tokens.next() else {
        return Ok(left);
    };
    let Some(operator) = token_to_infix_operator(token) else {
        return Ok(left);
    };

    let right = parse_expression(tokens, token_precedence(token))?;

    Ok(Expr::Infix { left: Box::new(left),
                     operator,
                     right: Box::new(right) })
}

/// Parses a call expression.
///
/// The opening parenthesis has already been consumed. Arguments are
/// comma-separated expressions parsed from the lowest precedence, ended by
/// the matching `)`.
///
/// Grammar: `call := expression "(" (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `function`: The already-parsed callee expression.
///
/// # Returns
/// An `Expr::Call` node.
pub(in crate::interpreter::parser) fn parse_call<'a, I>(tokens: &mut Peekable<I>,
                                                        function: Expr)
                                                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, Precedence::Lowest),
                                          &Token::RParen)?;

    Ok(Expr::Call { function: Box::new(function),
                    arguments })
}

/// Parses an index expression.
///
/// The opening bracket has already been consumed. The index itself restarts
/// at the lowest precedence and must be followed by `]`.
///
/// Grammar: `index := expression "[" expression "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `[`.
/// - `left`: The already-parsed indexed expression.
///
/// # Returns
/// An `Expr::Index` node.
pub(in crate::interpreter::parser) fn parse_index<'a, I>(tokens: &mut Peekable<I>,
                                                         left: Expr)
                                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let index = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RBracket)?;

    Ok(Expr::Index { left:  Box::new(left),
                     index: Box::new(index), })
}
