use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors surface to the user as error values whose message is the
/// `Display` output below; the exact wording is part of the evaluator's
/// contract.
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different kinds.
    TypeMismatch {
        /// Kind tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Kind tag of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an operand it is not defined for.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Kind tag of the operand.
        right:    &'static str,
    },
    /// An infix operator was applied to same-kind operands it is not defined
    /// for.
    UnknownInfixOperator {
        /// Kind tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Kind tag of the right operand.
        right:    &'static str,
    },
    /// A name is bound neither in scope nor in the builtin table.
    UnknownIdentifier {
        /// The unresolved name.
        name: String,
    },
    /// A call was made on a value that is not callable.
    NotAFunction {
        /// Kind tag of the value in callee position.
        kind: &'static str,
    },
    /// The index operator was applied to a value that cannot be indexed.
    IndexNotSupported {
        /// Kind tag of the indexed value.
        kind: &'static str,
    },
    /// A value without a hash key was used as a hash key.
    UnusableHashKey {
        /// Kind tag of the offending key.
        kind: &'static str,
    },
    /// A builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// Number of arguments received.
        got:  usize,
        /// Number of arguments required.
        want: usize,
    },
    /// A builtin received an argument kind it does not handle.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Kind tag of the argument.
        kind:    &'static str,
    },
    /// A builtin that only works on arrays received something else.
    ArrayArgumentExpected {
        /// Name of the builtin.
        builtin: &'static str,
        /// Kind tag of the argument.
        kind:    &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    IntegerOverflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownIdentifier { name } => write!(f, "unknown identifier: {name}"),
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::UnusableHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedArgument { builtin, kind } => {
                write!(f, "argument to `{builtin}` not supported, got {kind}")
            },
            Self::ArrayArgumentExpected { builtin, kind } => {
                write!(f, "argument to `{builtin}` must be ARRAY, got {kind}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}
