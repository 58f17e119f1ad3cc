/*!
Expressions, as a tree in which each node owns its children.

An expression is a [negation](Expression::Negation), a [binary expression](Expression::BinaryOp), an application of some [custom](CustomApplication) definition, or a [variable](Expression::Variable).

The constructors help keep the boxes out of sight:

```rust
# use adequacy::structures::expression::Expression;
let p_and_q = Expression::and(Expression::variable("p"), Expression::variable("q"));
let e = Expression::negation(Expression::apply("nand", vec![p_and_q, Expression::formula("f")]));
assert_eq!(e.to_string(), "!nand((p & q), @f)");
```
*/

use super::connective::BinaryOperator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// The negation of an expression.
    Negation(Box<Expression>),

    /// Some binary connective applied to a pair of expressions.
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// A reference to a formula, or the application of a custom operator.
    Custom(CustomApplication),

    /// A reference to a variable.
    Variable(String),
}

/// Either a reference to a declared formula, or a declared operator applied to some expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomApplication {
    Formula(String),

    Operator {
        name: String,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn negation(expression: Expression) -> Self {
        Self::Negation(Box::new(expression))
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::And, left, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Or, left, right)
    }

    pub fn implies(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Implies, left, right)
    }

    pub fn iff(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Iff, left, right)
    }

    /// A reference to the formula `name`.
    pub fn formula(name: impl Into<String>) -> Self {
        Self::Custom(CustomApplication::Formula(name.into()))
    }

    /// The operator `name` applied to `arguments`.
    pub fn apply(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self::Custom(CustomApplication::Operator {
            name: name.into(),
            arguments,
        })
    }

    /// The count of nodes in the expression.
    pub fn size(&self) -> usize {
        match self {
            Self::Negation(e) => 1 + e.size(),
            Self::BinaryOp { left, right, .. } => 1 + left.size() + right.size(),
            Self::Custom(CustomApplication::Formula(_)) | Self::Variable(_) => 1,
            Self::Custom(CustomApplication::Operator { arguments, .. }) => {
                1 + arguments.iter().map(Expression::size).sum::<usize>()
            }
        }
    }

    /// The count of nodes on a longest path from the root of the expression to a leaf.
    ///
    /// A formula reference is a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Negation(e) => 1 + e.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Custom(CustomApplication::Formula(_)) | Self::Variable(_) => 1,
            Self::Custom(CustomApplication::Operator { arguments, .. }) => {
                1 + arguments.iter().map(Expression::depth).max().unwrap_or(0)
            }
        }
    }
}

/// A declared formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    pub expression: Expression,

    /// The depth of the expression with each formula reference expanded.
    pub depth: usize,
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negation(e) => write!(f, "!{e}"),

            Self::BinaryOp {
                operator,
                left,
                right,
            } => write!(f, "({left} {} {right})", operator.symbol()),

            Self::Custom(CustomApplication::Formula(name)) => write!(f, "@{name}"),

            Self::Custom(CustomApplication::Operator { name, arguments }) => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            }

            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}
