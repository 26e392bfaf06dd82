use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtin,
            function::apply_function,
            index::eval_index,
            infix::eval_infix,
            prefix::eval_prefix,
        },
        object::{
            core::{Function, Object},
            environment::Env,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either an [`Object`] or a
/// [`RuntimeError`] describing the failure; `?` after every sub-evaluation
/// is what stops evaluation at the first error.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program and returns its result value.
///
/// This is the top-level boundary: a `return` surfacing from the statement
/// list is unwrapped to its inner value, and a runtime error becomes an
/// `Object::Error` carrying its message. Neither marker escapes this
/// function.
///
/// # Parameters
/// - `program`: The parsed program. Callers must not pass a program whose
///   parse produced errors.
/// - `env`: The root environment, mutated by top-level `let` statements.
///
/// # Returns
/// The value of the last statement, the returned value, or an error value;
/// `Object::Null` for an empty program.
///
/// # Example
/// ```
/// use simia::interpreter::{
///     evaluator::core::eval_program,
///     lexer::lex,
///     object::{core::Object, environment::Environment},
///     parser::statement::parse_program,
/// };
///
/// let tokens = lex("let x = 2; x * 3");
/// let (program, errors) = parse_program(&mut tokens.iter().peekable());
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// assert_eq!(eval_program(&program, &env), Object::Integer(6));
/// ```
#[must_use]
pub fn eval_program(program: &Program, env: &Env) -> Object {
    match eval_statements(program, env) {
        Ok(object) => object,
        Err(error) => Object::Error(error.to_string()),
    }
}

/// Evaluates the program's statements in order.
///
/// A surfacing `ReturnValue` is unwrapped and ends evaluation immediately;
/// an error ends it through the `Err` channel. Otherwise the value of the
/// last statement is the result.
pub fn eval_statements(program: &Program, env: &Env) -> EvalResult<Object> {
    let mut result = Object::Null;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Object::ReturnValue(value) => return Ok(*value),
            object => result = object,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` evaluates its initializer and binds it in the local scope,
/// yielding the bound value; `return` wraps its value in a `ReturnValue`
/// marker; an expression statement yields the expression's value.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Object> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value.clone());
            Ok(value)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Object::ReturnValue(Box::new(value)))
        },
        Statement::Expression { value } => eval_expression(value, env),
    }
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval_statements`], a `ReturnValue` passes through *without*
/// being unwrapped; only the enclosing function call or program boundary
/// unwraps it. This is what makes a `return` inside nested blocks abort all
/// of them.
///
/// Blocks do not open a new scope.
pub fn eval_block(block: &Block, env: &Env) -> EvalResult<Object> {
    let mut result = Object::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if matches!(result, Object::ReturnValue(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main dispatch of the tree walker: literals produce their
/// object directly, operators evaluate their operands first, `if` picks a
/// branch by truthiness, function literals capture the current environment,
/// and calls, indexing and collection literals evaluate their parts left to
/// right.
pub fn eval_expression(expression: &Expr, env: &Env) -> EvalResult<Object> {
    match expression {
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::IntegerLiteral { value } => Ok(Object::Integer(*value)),
        Expr::StringLiteral { value } => Ok(Object::String(value.clone())),
        Expr::BooleanLiteral { value } => Ok(Object::Boolean(*value)),
        Expr::ArrayLiteral { elements } => {
            let elements = eval_expressions(elements, env)?;
            Ok(Object::Array(Rc::new(elements)))
        },
        Expr::HashLiteral { pairs } => eval_hash_literal(pairs, env),
        Expr::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            eval_prefix(*operator, &right)
        },
        Expr::Infix { left, operator, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix(*operator, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            let condition = eval_expression(condition, env)?;
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Object::Null)
            }
        },
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Object::Function(Rc::new(Function { parameters: parameters.clone(),
                                                   body:       body.clone(),
                                                   env:        Rc::clone(env), })))
        },
        Expr::Call { function, arguments } => {
            let callee = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            apply_function(&callee, &arguments)
        },
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            eval_index(&left, &index)
        },
    }
}

/// Resolves an identifier.
///
/// Lookup checks, in order:
/// 1. The environment chain, innermost scope outward.
/// 2. The builtin table.
///
/// If neither knows the name, an `UnknownIdentifier` error is returned.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Object> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = builtin::lookup(name) {
        return Ok(builtin);
    }
    Err(RuntimeError::UnknownIdentifier { name: name.to_string() })
}

/// Evaluates a list of expressions left to right.
///
/// The first failing expression aborts the whole list; no later element is
/// evaluated. Shared by array literals and call arguments.
pub fn eval_expressions(expressions: &[Expr], env: &Env) -> EvalResult<Vec<Object>> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        values.push(eval_expression(expression, env)?);
    }

    Ok(values)
}

/// Evaluates a hash literal.
///
/// Pairs evaluate in source order; each key must be hashable before its
/// value is evaluated. Later pairs with an equal key overwrite earlier
/// ones.
fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Object> {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env)?;
        let hash = key.hash_key()
                      .ok_or_else(|| RuntimeError::UnusableHashKey { kind: key.kind() })?;
        let value = eval_expression(value_expression, env)?;
        map.insert(hash, (key, value));
    }

    Ok(Object::Hash(Rc::new(map)))
}
