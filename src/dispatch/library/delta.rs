//! Changes to the symbol tables.

use crate::db::Namespace;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delta {
    /// A name was declared in some namespace, by the statement at some index.
    Declared {
        index: usize,
        namespace: Namespace,
        name: String,
    },
}
