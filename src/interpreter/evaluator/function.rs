use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_block},
        object::{
            core::{Function, Object},
            environment::{Env, Environment},
        },
    },
};

/// Applies a callable to already-evaluated arguments.
///
/// A user-defined function runs its body in a fresh environment enclosed by
/// the environment it captured at its definition site; parameters bind
/// positionally. A `return` from the body is unwrapped here, so it never
/// travels past the call. Builtins are invoked directly with the argument
/// slice. Anything else in callee position is an error.
///
/// Arity mismatches on user functions are not diagnosed: extra arguments
/// are ignored and missing parameters stay unbound.
///
/// # Parameters
/// - `callee`: The value in call position.
/// - `arguments`: Evaluated arguments in call order.
///
/// # Returns
/// The call's result value.
pub fn apply_function(callee: &Object, arguments: &[Object]) -> EvalResult<Object> {
    match callee {
        Object::Function(function) => {
            let env = extend_function_env(function, arguments);
            let result = eval_block(&function.body, &env)?;
            Ok(unwrap_return_value(result))
        },
        Object::Builtin(builtin) => (builtin.func)(arguments),
        _ => Err(RuntimeError::NotAFunction { kind: callee.kind() }),
    }
}

/// Creates the call environment: a child of the captured environment with
/// the parameters bound to their arguments.
fn extend_function_env(function: &Function, arguments: &[Object]) -> Env {
    let env = Environment::extend(&function.env);

    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.borrow_mut().set(parameter.clone(), argument.clone());
    }

    env
}

fn unwrap_return_value(object: Object) -> Object {
    match object {
        Object::ReturnValue(value) => *value,
        object => object,
    }
}
