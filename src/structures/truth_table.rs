/*!
Truth tables of custom operators.

A truth table is an ordered sequence of entries, and order matters: when determining the value of some input the first matching entry is used.
So, for example, an entry with wildcards may follow more specific entries to act as a fallback for those entries.

- A [pattern entry](TruthTableEntry::Pattern) is a sequence of [PatternValue]s, aligned with the parameters of the operator, together with a value.
- An [otherwise entry](TruthTableEntry::Otherwise) is a value which applies to any input.

For details on matching, see [matcher](crate::procedures::matcher).
*/

use super::connective::TruthValue;

/// A cell of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternValue {
    True,
    False,
    Wildcard,
}

impl PatternValue {
    /// Whether the cell matches `value`.
    pub fn matches(self, value: TruthValue) -> bool {
        match self {
            Self::True => value,
            Self::False => !value,
            Self::Wildcard => true,
        }
    }
}

impl From<TruthValue> for PatternValue {
    fn from(value: TruthValue) -> Self {
        match value {
            true => Self::True,
            false => Self::False,
        }
    }
}

impl std::fmt::Display for PatternValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "1"),
            Self::False => write!(f, "0"),
            Self::Wildcard => write!(f, "_"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TruthTableEntry {
    /// A pattern, mapped to a value.
    Pattern {
        pattern: Vec<PatternValue>,
        value: TruthValue,
    },

    /// A default value.
    Otherwise(TruthValue),
}

impl TruthTableEntry {
    /// A pattern entry with no wildcards.
    pub fn row(input: &[TruthValue], value: TruthValue) -> Self {
        Self::Pattern {
            pattern: input.iter().map(|v| PatternValue::from(*v)).collect(),
            value,
        }
    }

    /// The value of the entry.
    pub fn value(&self) -> TruthValue {
        match self {
            Self::Pattern { value, .. } => *value,
            Self::Otherwise(value) => *value,
        }
    }
}

/// An ordered sequence of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TruthTable {
    entries: Vec<TruthTableEntry>,
}

impl TruthTable {
    pub fn new(entries: Vec<TruthTableEntry>) -> Self {
        Self { entries }
    }

    /// The entries of the table, in declaration order.
    pub fn entries(&self) -> &[TruthTableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether some entry of the table is an otherwise entry.
    pub fn has_otherwise(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, TruthTableEntry::Otherwise(_)))
    }
}
