use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        object::core::{Builtin, Object},
    },
};

/// Names of all built-in functions, in table order.
pub const BUILTIN_FUNCTIONS: &[&str] = &["len", "first", "last", "rest", "push", "puts"];

/// The builtin table. Identifier resolution consults it after the
/// environment chain comes up empty, so a local binding can shadow a
/// builtin.
static BUILTIN_TABLE: &[Builtin] = &[Builtin { name: "len", func: len },
                                     Builtin { name: "first", func: first },
                                     Builtin { name: "last", func: last },
                                     Builtin { name: "rest", func: rest },
                                     Builtin { name: "push", func: push },
                                     Builtin { name: "puts", func: puts }];

/// Looks a builtin up by name.
///
/// # Example
/// ```
/// use simia::interpreter::evaluator::builtin::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("frobnicate").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Object> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .copied()
                 .map(Object::Builtin)
}

/// Checks that the argument list has the expected length.
const fn check_arity(args: &[Object], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               want })
    }
}

/// Returns the length of a string (in bytes) or an array.
fn len(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    match &args[0] {
        Object::String(value) => Ok(Object::Integer(value.len() as i64)),
        Object::Array(elements) => Ok(Object::Integer(elements.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                         kind:    other.kind(), }),
    }
}

/// Returns the first element of an array, or `null` when it is empty.
fn first(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    match &args[0] {
        Object::Array(elements) => Ok(elements.first().cloned().unwrap_or(Object::Null)),
        other => Err(RuntimeError::ArrayArgumentExpected { builtin: "first",
                                                          kind:    other.kind(), }),
    }
}

/// Returns the last element of an array, or `null` when it is empty.
fn last(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    match &args[0] {
        Object::Array(elements) => Ok(elements.last().cloned().unwrap_or(Object::Null)),
        other => Err(RuntimeError::ArrayArgumentExpected { builtin: "last",
                                                          kind:    other.kind(), }),
    }
}

/// Returns a new array holding every element but the first, or `null` when
/// the array is empty. The input array is never modified.
fn rest(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 1)?;

    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                Ok(Object::Null)
            } else {
                Ok(Object::Array(Rc::new(elements[1..].to_vec())))
            }
        },
        other => Err(RuntimeError::ArrayArgumentExpected { builtin: "rest",
                                                          kind:    other.kind(), }),
    }
}

/// Returns a new array with a value appended. The input array is never
/// modified.
fn push(args: &[Object]) -> EvalResult<Object> {
    check_arity(args, 2)?;

    match &args[0] {
        Object::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Ok(Object::Array(Rc::new(extended)))
        },
        other => Err(RuntimeError::ArrayArgumentExpected { builtin: "push",
                                                          kind:    other.kind(), }),
    }
}

/// Prints each argument on its own line and returns `null`.
///
/// Accepts any number of arguments of any kind.
#[allow(clippy::unnecessary_wraps)]
fn puts(args: &[Object]) -> EvalResult<Object> {
    for arg in args {
        println!("{arg}");
    }

    Ok(Object::Null)
}
