use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::core::Object},
};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// Supported operators:
/// - `!`: negates a boolean, maps any integer to `false`, and everything
///   else to `null`.
/// - `-`: negates an integer; any other operand kind is an unknown-operator
///   error.
///
/// # Parameters
/// - `operator`: The prefix operator.
/// - `right`: The operand value.
///
/// # Returns
/// The computed [`Object`] wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use simia::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::prefix::eval_prefix, object::core::Object},
/// };
///
/// let negated = eval_prefix(PrefixOperator::Negate, &Object::Integer(5)).unwrap();
/// assert_eq!(negated, Object::Integer(-5));
///
/// let truthy = eval_prefix(PrefixOperator::Not, &Object::Boolean(false)).unwrap();
/// assert_eq!(truthy, Object::Boolean(true));
/// ```
pub fn eval_prefix(operator: PrefixOperator, right: &Object) -> EvalResult<Object> {
    match operator {
        PrefixOperator::Not => Ok(eval_not(right)),
        PrefixOperator::Negate => eval_negate(right),
    }
}

fn eval_not(right: &Object) -> Object {
    match right {
        Object::Boolean(value) => Object::Boolean(!value),
        Object::Integer(_) => Object::Boolean(false),
        _ => Object::Null,
    }
}

fn eval_negate(right: &Object) -> EvalResult<Object> {
    match right {
        Object::Integer(value) => value.checked_neg()
                                       .map(Object::Integer)
                                       .ok_or(RuntimeError::IntegerOverflow),
        _ => Err(RuntimeError::UnknownPrefixOperator { operator: PrefixOperator::Negate,
                                                       right:    right.kind(), }),
    }
}
