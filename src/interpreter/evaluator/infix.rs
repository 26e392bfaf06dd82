use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, object::core::Object},
};

/// Evaluates an infix operation on two already-evaluated operands.
///
/// Dispatch is by operand kinds:
/// - two integers support the full operator set,
/// - two booleans support `==` and `!=`,
/// - two strings support `+`,
/// - operands of different kinds are a type mismatch,
/// - anything else is an unknown operator.
///
/// # Parameters
/// - `operator`: The infix operator.
/// - `left`: Left operand value.
/// - `right`: Right operand value.
///
/// # Returns
/// The computed [`Object`] wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use simia::{
///     ast::InfixOperator,
///     interpreter::{evaluator::infix::eval_infix, object::core::Object},
/// };
///
/// let sum = eval_infix(InfixOperator::Add, &Object::Integer(2), &Object::Integer(3)).unwrap();
/// assert_eq!(sum, Object::Integer(5));
///
/// let err = eval_infix(InfixOperator::Add, &Object::Integer(5), &Object::Boolean(true));
/// assert_eq!(err.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn eval_infix(operator: InfixOperator, left: &Object, right: &Object) -> EvalResult<Object> {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::Boolean(l), Object::Boolean(r)) => eval_boolean_infix(operator, *l, *r),
        (Object::String(l), Object::String(r)) => eval_string_infix(operator, l, r),
        _ if left.kind() != right.kind() => {
            Err(RuntimeError::TypeMismatch { left: left.kind(),
                                             operator,
                                             right: right.kind() })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                      operator,
                                                      right: right.kind() }),
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic is checked; overflow and division by zero are runtime
/// errors. Division truncates toward zero.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Object> {
    let object = match operator {
        InfixOperator::Add => {
            Object::Integer(left.checked_add(right).ok_or(RuntimeError::IntegerOverflow)?)
        },
        InfixOperator::Sub => {
            Object::Integer(left.checked_sub(right).ok_or(RuntimeError::IntegerOverflow)?)
        },
        InfixOperator::Mul => {
            Object::Integer(left.checked_mul(right).ok_or(RuntimeError::IntegerOverflow)?)
        },
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Object::Integer(left.checked_div(right).ok_or(RuntimeError::IntegerOverflow)?)
        },
        InfixOperator::Lt => Object::Boolean(left < right),
        InfixOperator::Gt => Object::Boolean(left > right),
        InfixOperator::Eq => Object::Boolean(left == right),
        InfixOperator::NotEq => Object::Boolean(left != right),
    };

    Ok(object)
}

/// Boolean equality.
///
/// There are only two boolean values, so comparing by value is the same as
/// comparing canonical instances by identity.
fn eval_boolean_infix(operator: InfixOperator, left: bool, right: bool) -> EvalResult<Object> {
    match operator {
        InfixOperator::Eq => Ok(Object::Boolean(left == right)),
        InfixOperator::NotEq => Ok(Object::Boolean(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "BOOLEAN",
                                                      operator,
                                                      right: "BOOLEAN" }),
    }
}

/// String concatenation; no other string operator exists.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Object> {
    match operator {
        InfixOperator::Add => Ok(Object::String(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      operator,
                                                      right: "STRING" }),
    }
}
