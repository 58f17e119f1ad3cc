/*!
Valuations --- named, (partial) assignments of truth values to variables.

Assignments are kept in declaration order, and a variable appears at most once.
This is checked when a valuation is [declared](crate::procedures::declare), rather than on construction.

```rust
# use adequacy::structures::valuation::Valuation;
let v = Valuation::new("v", vec![("p".to_string(), true), ("q".to_string(), false)]);
assert_eq!(v.value_of("q"), Some(false));
assert_eq!(v.value_of("r"), None);
```
*/

use super::connective::TruthValue;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    pub name: String,
    assignments: Vec<(String, TruthValue)>,
}

impl Valuation {
    pub fn new(name: impl Into<String>, assignments: Vec<(String, TruthValue)>) -> Self {
        Self {
            name: name.into(),
            assignments,
        }
    }

    /// The value of `variable`, if `variable` is assigned some value.
    pub fn value_of(&self, variable: &str) -> Option<TruthValue> {
        self.assignments
            .iter()
            .find(|(name, _)| name == variable)
            .map(|(_, value)| *value)
    }

    /// The (variable, value) pairs of the valuation, in declaration order.
    pub fn assignments(&self) -> &[(String, TruthValue)] {
        &self.assignments
    }

    /// The variables assigned a value.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|(name, _)| name.as_str())
    }
}
