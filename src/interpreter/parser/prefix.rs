use std::iter::Peekable;

use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, end_of_input, parse_expression},
            statement::parse_block,
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses whatever an expression can start with.
///
/// This is the prefix half of the Pratt parser. The current token selects
/// the production: literals and identifiers complete immediately, `!` and
/// `-` recurse at prefix precedence, `(` groups, `if` and `fn` parse their
/// block forms, and `[` and `{` open array and hash literals.
///
/// A token with no prefix production is a parse error naming the token's
/// kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression.
pub(in crate::interpreter::parser) fn parse_prefix<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Ident(name), _)) => Ok(Expr::Identifier { name: name.clone() }),
        Some((Token::Int(literal), line)) => parse_integer_literal(literal, *line),
        Some((Token::Str(value), _)) => Ok(Expr::StringLiteral { value: value.clone() }),
        Some((Token::True, _)) => Ok(Expr::BooleanLiteral { value: true }),
        Some((Token::False, _)) => Ok(Expr::BooleanLiteral { value: false }),
        Some((Token::Bang, _)) => parse_prefix_operation(tokens, PrefixOperator::Not),
        Some((Token::Minus, _)) => parse_prefix_operation(tokens, PrefixOperator::Negate),
        Some((Token::LParen, _)) => parse_grouped(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::Function, _)) => parse_function_literal(tokens),
        Some((Token::LBracket, _)) => parse_array_literal(tokens),
        Some((Token::LBrace, _)) => parse_hash_literal(tokens),
        Some((token, line)) => Err(ParseError::NoPrefixParseFn { kind: token.kind(),
                                                                 line: *line, }),
        None => Err(end_of_input()),
    }
}

/// Converts the digits of an integer token into a literal node.
///
/// The lexer only stores the raw text; a value outside the `i64` range is
/// diagnosed here.
fn parse_integer_literal(literal: &str, line: usize) -> ParseResult<Expr> {
    literal.parse::<i64>()
           .map(|value| Expr::IntegerLiteral { value })
           .map_err(|_| ParseError::IntegerLiteralOutOfRange { literal: literal.to_string(),
                                                               line })
}

/// Parses the operand of a prefix operator at prefix precedence.
fn parse_prefix_operation<'a, I>(tokens: &mut Peekable<I>,
                                 operator: PrefixOperator)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let right = parse_expression(tokens, Precedence::Prefix)?;

    Ok(Expr::Prefix { operator,
                      right: Box::new(right) })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouped := "(" expression ")"`
fn parse_grouped<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expression = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(expression)
}

/// Parses an `if` expression with an optional `else` block.
///
/// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
///
/// # Returns
/// An `Expr::If` node.
///
/// # Errors
/// Returns a `ParseError` if the parentheses or braces are missing or a
/// sub-expression fails to parse.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen)?;

    expect_token(tokens, &Token::LBrace)?;
    let consequence = parse_block(tokens)?;

    let alternative = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        expect_token(tokens, &Token::LBrace)?;
        Some(parse_block(tokens)?)
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative })
}

/// Parses a function literal.
///
/// Grammar: `fn := "fn" "(" (IDENT ("," IDENT)*)? ")" block`
///
/// Parameters are identifiers only; duplicates are not diagnosed.
fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let parameters = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    expect_token(tokens, &Token::LBrace)?;
    let body = parse_block(tokens)?;

    Ok(Expr::FunctionLiteral { parameters, body })
}

/// Parses an array literal.
///
/// Grammar: `array := "[" (expression ("," expression)*)? "]"`
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let elements = parse_comma_separated(tokens,
                                         |tokens| parse_expression(tokens, Precedence::Lowest),
                                         &Token::RBracket)?;

    Ok(Expr::ArrayLiteral { elements })
}

/// Parses a hash literal.
///
/// Grammar: `hash := "{" (expression ":" expression ("," ...)*)? "}"`
///
/// Pair order is preserved in the node so printing is deterministic.
fn parse_hash_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut pairs = Vec::new();

    if let Some((Token::RBrace, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::HashLiteral { pairs });
    }

    loop {
        let key = parse_expression(tokens, Precedence::Lowest)?;
        expect_token(tokens, &Token::Colon)?;
        let value = parse_expression(tokens, Precedence::Lowest)?;
        pairs.push((key, value));

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RBrace, _)) => break,
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { expected: Token::RBrace.kind(),
                                                         found:    token.kind(),
                                                         line:     *line, });
            },
            None => return Err(end_of_input()),
        }
    }

    Ok(Expr::HashLiteral { pairs })
}
