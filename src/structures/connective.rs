/*!
The two-valued truth-value algebra and its built-in connectives.

Truth values are represented by [bool], and there are five built-in connectives, of which four are binary.

```rust
# use adequacy::structures::connective::{BinaryOperator, Connective};
assert!(!BinaryOperator::Implies.apply(true, false));
assert_eq!(Connective::Not.apply(&[true]), Some(false));
assert_eq!(Connective::from_name("then"), Some(Connective::Implies));
```
*/

use serde::Serialize;

/// A truth value.
pub type TruthValue = bool;

/// The binary connectives which may be written infix in an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinaryOperator {
    And,
    Or,
    Implies,
    Iff,
}

impl BinaryOperator {
    /// The value of the connective applied to `left` and `right`.
    pub fn apply(self, left: TruthValue, right: TruthValue) -> TruthValue {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Iff => left == right,
        }
    }

    /// The infix symbol of the connective.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
            Self::Iff => "<->",
        }
    }
}

/// The built-in connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Connective {
    /// Each built-in connective, in a fixed order.
    pub const ALL: [Connective; 5] = [
        Connective::Not,
        Connective::And,
        Connective::Or,
        Connective::Implies,
        Connective::Iff,
    ];

    pub fn arity(self) -> usize {
        match self {
            Self::Not => 1,
            Self::And | Self::Or | Self::Implies | Self::Iff => 2,
        }
    }

    /// The value of the connective on `input`, or nothing if the length of `input` differs from the arity of the connective.
    pub fn apply(self, input: &[TruthValue]) -> Option<TruthValue> {
        match (self, input) {
            (Self::Not, [value]) => Some(!value),
            (Self::And, [l, r]) => Some(BinaryOperator::And.apply(*l, *r)),
            (Self::Or, [l, r]) => Some(BinaryOperator::Or.apply(*l, *r)),
            (Self::Implies, [l, r]) => Some(BinaryOperator::Implies.apply(*l, *r)),
            (Self::Iff, [l, r]) => Some(BinaryOperator::Iff.apply(*l, *r)),
            _ => None,
        }
    }

    /// The canonical (upper case) name of the connective.
    pub fn name(self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Implies => "IMPLIES",
            Self::Iff => "IFF",
        }
    }

    /// The connective with the given name, ignoring case.
    ///
    /// `THEN` is read as an alternative name for `IMPLIES`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "NOT" => Some(Self::Not),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "IMPLIES" | "THEN" => Some(Self::Implies),
            "IFF" => Some(Self::Iff),
            _ => None,
        }
    }
}

impl From<BinaryOperator> for Connective {
    fn from(value: BinaryOperator) -> Self {
        match value {
            BinaryOperator::And => Self::And,
            BinaryOperator::Or => Self::Or,
            BinaryOperator::Implies => Self::Implies,
            BinaryOperator::Iff => Self::Iff,
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Connective::from(*self).name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_tables() {
        assert!(BinaryOperator::And.apply(true, true));
        assert!(!BinaryOperator::And.apply(true, false));
        assert!(!BinaryOperator::Or.apply(false, false));
        assert!(!BinaryOperator::Implies.apply(true, false));
        assert!(BinaryOperator::Implies.apply(false, true));
        assert!(BinaryOperator::Iff.apply(true, true));
        assert!(!BinaryOperator::Iff.apply(true, false));
    }

    #[test]
    fn arity_guard() {
        assert_eq!(Connective::Not.apply(&[true]), Some(false));
        assert_eq!(Connective::Not.apply(&[true, true]), None);
        assert_eq!(Connective::And.apply(&[true]), None);
    }

    #[test]
    fn names() {
        for connective in Connective::ALL {
            assert_eq!(Connective::from_name(connective.name()), Some(connective));
        }
        assert_eq!(Connective::from_name("iff"), Some(Connective::Iff));
        assert_eq!(Connective::from_name("nand"), None);
    }
}
