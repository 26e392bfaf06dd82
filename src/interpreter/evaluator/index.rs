use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        object::{core::Object, hash_key::HashKey},
    },
};

/// Evaluates an index operation on two already-evaluated operands.
///
/// Arrays accept integer indexes and yield `null` for anything out of
/// range, including negative positions. Hashes accept any hashable key and
/// yield `null` for absent keys. Every other combination is an error naming
/// the indexed value's kind.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use simia::interpreter::{evaluator::index::eval_index, object::core::Object};
///
/// let array = Object::Array(Rc::new(vec![Object::Integer(1), Object::Integer(2)]));
///
/// assert_eq!(eval_index(&array, &Object::Integer(1)).unwrap(), Object::Integer(2));
/// assert_eq!(eval_index(&array, &Object::Integer(5)).unwrap(), Object::Null);
/// ```
pub fn eval_index(left: &Object, index: &Object) -> EvalResult<Object> {
    match (left, index) {
        (Object::Array(elements), Object::Integer(position)) => {
            Ok(eval_array_index(elements, *position))
        },
        (Object::Hash(pairs), _) => eval_hash_index(pairs, index),
        _ => Err(RuntimeError::IndexNotSupported { kind: left.kind() }),
    }
}

fn eval_array_index(elements: &[Object], position: i64) -> Object {
    usize::try_from(position).ok()
                             .and_then(|position| elements.get(position).cloned())
                             .unwrap_or(Object::Null)
}

fn eval_hash_index(pairs: &HashMap<HashKey, (Object, Object)>, key: &Object) -> EvalResult<Object> {
    let hash = key.hash_key()
                  .ok_or(RuntimeError::UnusableHashKey { kind: key.kind() })?;

    Ok(pairs.get(&hash).map_or(Object::Null, |(_, value)| value.clone()))
}
