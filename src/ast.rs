use std::fmt;

/// The root of the abstract syntax tree: an ordered sequence of statements.
///
/// Its `Display` implementation reconstructs a parseable surface form of the
/// program, which the test suite relies on: parsing the printed form of a
/// program and printing it again yields the same text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
///
/// Statements bind names, return from functions, or wrap an expression
/// evaluated for its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `let` binding, such as `let x = 5;`.
    Let {
        /// The bound name. Binding targets are syntactically identifiers,
        /// so the name is stored directly.
        name:  String,
        /// The initializer expression.
        value: Expr,
    },
    /// A `return` statement, such as `return x + 1;`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A bare expression evaluated for its value, such as `x + y;`.
    Expression {
        /// The wrapped expression.
        value: Expr,
    },
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as `if` branches and function bodies. They do not open a
/// new scope; scoping is per function call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing an expression.
///
/// Expressions cover literals, identifiers, operator applications, control
/// flow, function literals, calls, and indexing. Every variant produces a
/// value when evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The parsed value.
        value: i64,
    },
    /// A string literal. Stored without the surrounding quotes.
    StringLiteral {
        /// The string contents.
        value: String,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// Array literal expression, such as `[1, 2 * 2, "three"]`.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Expr>,
    },
    /// Hash literal expression, such as `{"one": 1, "two": 2}`.
    ///
    /// Pairs keep their source order so printing is deterministic.
    HashLiteral {
        /// Key-value pairs in source order.
        pairs: Vec<(Expr, Expr)>,
    },
    /// A prefix operator application, such as `!ok` or `-x`.
    Prefix {
        /// The prefix operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Expr>,
    },
    /// An infix operator application, such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Expr>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Expr>,
    },
    /// Conditional expression with an optional alternative.
    If {
        /// The condition.
        condition:   Box<Expr>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
    },
    /// A function literal, such as `fn(x, y) { x + y }`.
    FunctionLiteral {
        /// Parameter names. Parameters are syntactically identifiers only.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// A call expression. The callee is an arbitrary expression.
    Call {
        /// The expression evaluating to the callee.
        function:  Box<Expr>,
        /// Argument expressions in call order.
        arguments: Vec<Expr>,
    },
    /// An index expression, such as `array[0]` or `hash["key"]`.
    Index {
        /// The indexed expression.
        left:  Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`); also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes statements separated by single spaces.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (index, statement) in statements.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{statement}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            // The semicolon keeps adjacent statements apart when a program
            // is printed and re-parsed; without it, a following `(` or `[`
            // would read as a call or index on the previous statement.
            Self::Expression { value } => write!(f, "{value};"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        write_statements(f, &self.statements)?;
        write!(f, " }}")
    }
}

impl fmt::Display for Expr {
    /// Pretty-prints the expression in a fully parenthesized surface form.
    ///
    /// Operator applications are wrapped in parentheses, so `-a * b` prints
    /// as `((-a) * b)`. The printed form of any expression parses back to
    /// the same tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "\"{value}\""),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::HashLiteral { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                write!(f, "}}")
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}
