/*!
Symbol tables.

Each kind of declaration has its own namespace, and so, for example, a variable and a formula may share a name.
Within a namespace a name may be declared at most once, and a declaration is never revised or removed.

Definitions are stored in a [SlotMap], and accessed either by name or through the [SymbolKey] returned on declaration.

- [SymbolDB] is a table for a single namespace.
- [SymbolTables](symbols::SymbolTables) bundles a table for each namespace.

```rust
# use adequacy::db::{Namespace, SymbolDB};
# use adequacy::types::err::ErrorKind;
let mut formulas = SymbolDB::new(Namespace::Formula);
assert!(formulas.declare("f", 1).is_ok());
assert!(matches!(formulas.declare("f", 2), Err(ErrorKind::DuplicateDeclaration { .. })));
assert_eq!(formulas.resolve("f"), Ok(&1));
assert!(matches!(formulas.resolve("F"), Err(ErrorKind::UnknownIdentifier { .. })));
```
*/

pub mod symbols;

use std::collections::HashMap;

use serde::Serialize;
use slotmap::{new_key_type, SlotMap};

use crate::{misc::log::targets, types::err::ErrorKind};

new_key_type! {
    /// A key to some definition of a [SymbolDB].
    pub struct SymbolKey;
}

/// The namespaces of a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Variable,
    Formula,
    Valuation,
    Operator,
    Opset,

    /// The parameters of a custom operator, local to the definition of the operator.
    Parameter,
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable => write!(f, "variable"),
            Self::Formula => write!(f, "formula"),
            Self::Valuation => write!(f, "valuation"),
            Self::Operator => write!(f, "operator"),
            Self::Opset => write!(f, "opset"),
            Self::Parameter => write!(f, "parameter"),
        }
    }
}

/// A table of definitions for a single namespace.
pub struct SymbolDB<T> {
    namespace: Namespace,

    definitions: SlotMap<SymbolKey, T>,

    /// Names mapped to keys.
    names: HashMap<String, SymbolKey>,

    /// Names and keys, in order of declaration.
    order: Vec<(String, SymbolKey)>,
}

impl<T> SymbolDB<T> {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            definitions: SlotMap::with_key(),
            names: HashMap::default(),
            order: Vec::default(),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Declares `name` with `definition`, or returns a [DuplicateDeclaration](ErrorKind::DuplicateDeclaration) error if `name` has already been declared.
    pub fn declare(&mut self, name: &str, definition: T) -> Result<SymbolKey, ErrorKind> {
        if self.names.contains_key(name) {
            log::debug!(target: targets::SYMBOLS, "Duplicate {} '{name}'", self.namespace);
            return Err(ErrorKind::DuplicateDeclaration {
                namespace: self.namespace,
                name: name.to_string(),
            });
        }

        let key = self.definitions.insert(definition);
        self.names.insert(name.to_string(), key);
        self.order.push((name.to_string(), key));
        log::trace!(target: targets::SYMBOLS, "Declared {} '{name}'", self.namespace);

        Ok(key)
    }

    /// The definition of `name`, or an [UnknownIdentifier](ErrorKind::UnknownIdentifier) error.
    pub fn resolve(&self, name: &str) -> Result<&T, ErrorKind> {
        self.names
            .get(name)
            .and_then(|key| self.definitions.get(*key))
            .ok_or_else(|| ErrorKind::UnknownIdentifier {
                namespace: self.namespace,
                name: name.to_string(),
            })
    }

    pub fn get(&self, key: SymbolKey) -> Option<&T> {
        self.definitions.get(key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// An iterator over (name, definition) pairs, in order of declaration.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order.iter().filter_map(|(name, key)| {
            self.definitions
                .get(*key)
                .map(|definition| (name.as_str(), definition))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order() {
        let mut db = SymbolDB::new(Namespace::Variable);
        for name in ["r", "p", "q"] {
            assert!(db.declare(name, ()).is_ok());
        }
        let names = db.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, vec!["r", "p", "q"]);
    }

    #[test]
    fn duplicate_leaves_first() {
        let mut db = SymbolDB::new(Namespace::Valuation);
        let key = db.declare("v", 'a').unwrap();
        assert_eq!(
            db.declare("v", 'b'),
            Err(ErrorKind::DuplicateDeclaration {
                namespace: Namespace::Valuation,
                name: "v".to_string()
            })
        );
        assert_eq!(db.get(key), Some(&'a'));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn case_sensitive() {
        let mut db = SymbolDB::new(Namespace::Opset);
        assert!(db.declare("s", ()).is_ok());
        assert!(db.declare("S", ()).is_ok());
        assert_eq!(
            db.resolve("t"),
            Err(ErrorKind::UnknownIdentifier {
                namespace: Namespace::Opset,
                name: "t".to_string()
            })
        );
    }
}
