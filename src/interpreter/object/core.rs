use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{
        evaluator::core::EvalResult,
        object::{
            environment::Env,
            hash_key::{HashKey, fnv1a},
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value that can appear during evaluation. The
/// `ReturnValue` and `Error` variants are control-flow markers: they travel
/// through block boundaries but never escape a finished top-level
/// evaluation.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value, `true` or `false`.
    ///
    /// Booleans and `Null` compare by value, so every evaluation site that
    /// yields `true` yields a value equal to every other `true`.
    Boolean(bool),
    /// An immutable string of bytes.
    String(String),
    /// The null value.
    Null,
    /// Wraps the value of a `return` statement while it unwinds to the
    /// nearest function call or program boundary.
    ReturnValue(Box<Object>),
    /// A runtime error carrying its rendered message. Produced only at the
    /// top-level evaluation boundary.
    Error(String),
    /// A first-class function together with its captured environment.
    Function(Rc<Function>),
    /// A built-in function.
    Builtin(Builtin),
    /// An array of values.
    Array(Rc<Vec<Object>>),
    /// A hash, keyed by the [`HashKey`] projection of its keys. Each entry
    /// keeps the original key object for printing.
    Hash(Rc<HashMap<HashKey, (Object, Object)>>),
}

/// A user-defined function value.
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The environment captured at the definition site.
    pub env:        Env,
}

impl fmt::Debug for Function {
    // The captured environment is skipped: at top level it usually contains
    // the function itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// A built-in function exposed to programs by name.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name programs call it by.
    pub name: &'static str,
    /// The handler invoked with the evaluated arguments.
    pub func: fn(&[Object]) -> EvalResult<Object>,
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::ReturnValue(a), Self::ReturnValue(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            // Functions are equal only when they are the same value; their
            // captured environment can contain the function itself, so a
            // structural comparison would not terminate.
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            _ => false,
        }
    }
}

impl Object {
    /// Returns the stable tag naming this object's kind.
    ///
    /// The tags appear verbatim in runtime error messages.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::object::core::Object;
    ///
    /// assert_eq!(Object::Integer(5).kind(), "INTEGER");
    /// assert_eq!(Object::Null.kind(), "NULL");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Null => "NULL",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }

    /// Tests the value under the conditional truthiness rule.
    ///
    /// Only `Null` and `false` are falsy; every other value, including `0`
    /// and the empty string, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Returns the hashable projection of this value, if it has one.
    ///
    /// Integers reinterpret their bits as unsigned, booleans map to 0 and 1,
    /// and strings hash with FNV-1a. All other kinds return `None`.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::object::core::Object;
    ///
    /// let a = Object::String("name".to_string()).hash_key();
    /// let b = Object::String("name".to_string()).hash_key();
    ///
    /// assert!(a.is_some());
    /// assert_eq!(a, b);
    /// assert_eq!(Object::Null.hash_key(), None);
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        let value = match self {
            Self::Integer(i) => *i as u64,
            Self::Boolean(b) => u64::from(*b),
            Self::String(s) => fnv1a(s),
            _ => return None,
        };

        Some(HashKey { kind: self.kind(),
                       value })
    }
}

impl fmt::Display for Object {
    /// Formats the value the way the language shows it to users.
    ///
    /// Strings print their raw contents without quotes; functions print a
    /// reconstruction of their source form; hashes print their pairs in a
    /// stable order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::ReturnValue(inner) => write!(f, "{inner}"),
            Self::Error(message) => write!(f, "{message}"),
            Self::Function(function) => {
                write!(f, "fn({}) {{\n", function.parameters.join(", "))?;
                for (index, statement) in function.body.statements.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{statement}")?;
                }
                write!(f, "\n}}")
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                let mut entries: Vec<(&HashKey, &(Object, Object))> = pairs.iter().collect();
                entries.sort_by_key(|(hash, _)| *hash);

                write!(f, "{{")?;
                for (index, (_, (key, value))) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
