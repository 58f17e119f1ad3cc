/*!
Adequacy (functional completeness) of operator sets.

A set of operators is adequate if every boolean function, of any arity, may be expressed by composing operators from the set.

Rather than enumerating functions, adequacy is determined by Post's criterion: a set is adequate if and only if the set is not contained within any of the five maximal clones of boolean functions.
Each clone is given by a [property](PostProperty) of functions:

- [T0](PostProperty::PreservesFalse): f(0, …, 0) = 0.
- [T1](PostProperty::PreservesTrue): f(1, …, 1) = 1.
- [Monotone](PostProperty::Monotone): if each argument of *a* is at most the corresponding argument of *b*, then f(*a*) ≤ f(*b*).
- [Self-dual](PostProperty::SelfDual): f(¬x₁, …, ¬xₙ) = ¬f(x₁, …, xₙ).
- [Affine](PostProperty::Affine): f is an exclusive or of some arguments, perhaps negated.

So, a set is adequate if and only if, for each property, some operator of the set fails to have the property.

The function of each operator is taken over the complete input domain, either through the fixed table of a built-in connective or by [matching](crate::procedures::matcher) each input against the truth table of a custom operator.
As such, a custom operator whose table is not total cannot be checked, and a [NoMatchingEntry](ErrorKind::NoMatchingEntry) error is returned.

```rust
# use adequacy::procedures::adequacy::{retained_properties, PostProperty};
# use adequacy::structures::{boolean_function::BooleanFunction, connective::Connective};
let and = BooleanFunction::from_connective(Connective::And);
let or = BooleanFunction::from_connective(Connective::Or);
let not = BooleanFunction::from_connective(Connective::Not);

assert_eq!(
    retained_properties(&[and.clone(), or]),
    vec![PostProperty::PreservesFalse, PostProperty::PreservesTrue, PostProperty::Monotone]
);
assert!(retained_properties(&[and, not]).is_empty());
```
*/

use serde::Serialize;

use crate::{
    db::symbols::SymbolTables,
    generic::mobius,
    misc::log::targets,
    procedures::matcher,
    structures::{
        boolean_function::BooleanFunction,
        operator::{OperatorRef, OperatorSet},
    },
    types::err::ErrorKind,
};

/// The properties defining the five maximal clones of boolean functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostProperty {
    /// T0, preservation of falsity.
    PreservesFalse,

    /// T1, preservation of truth.
    PreservesTrue,

    Monotone,

    SelfDual,

    Affine,
}

impl PostProperty {
    /// Each property, in a fixed order.
    pub const ALL: [PostProperty; 5] = [
        PostProperty::PreservesFalse,
        PostProperty::PreservesTrue,
        PostProperty::Monotone,
        PostProperty::SelfDual,
        PostProperty::Affine,
    ];

    /// Whether `function` has the property.
    pub fn holds_for(self, function: &BooleanFunction) -> bool {
        match self {
            Self::PreservesFalse => function.value(0) == Some(false),

            Self::PreservesTrue => function.value(function.rows() - 1) == Some(true),

            // It is enough to check each pair of inputs which differ in a single argument.
            Self::Monotone => (0..function.rows()).all(|row| {
                (0..function.arity())
                    .filter(|k| row & (1_usize << k) == 0)
                    .all(|k| {
                        !(function.value(row) == Some(true)
                            && function.value(row | (1_usize << k)) == Some(false))
                    })
            }),

            Self::SelfDual => (0..function.rows()).all(|row| {
                match (function.value(row), function.value(function.complement_row(row))) {
                    (Some(value), Some(dual)) => value != dual,
                    _ => false,
                }
            }),

            Self::Affine => mobius::degree(&mobius::algebraic_normal_form(function.outputs()))
                .map_or(true, |degree| degree <= 1),
        }
    }
}

impl std::fmt::Display for PostProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreservesFalse => write!(f, "T0"),
            Self::PreservesTrue => write!(f, "T1"),
            Self::Monotone => write!(f, "monotone"),
            Self::SelfDual => write!(f, "self-dual"),
            Self::Affine => write!(f, "affine"),
        }
    }
}

/// Which of the five properties some function has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PostProfile {
    pub preserves_false: bool,
    pub preserves_true: bool,
    pub monotone: bool,
    pub self_dual: bool,
    pub affine: bool,
}

impl PostProfile {
    pub fn of(function: &BooleanFunction) -> Self {
        Self {
            preserves_false: PostProperty::PreservesFalse.holds_for(function),
            preserves_true: PostProperty::PreservesTrue.holds_for(function),
            monotone: PostProperty::Monotone.holds_for(function),
            self_dual: PostProperty::SelfDual.holds_for(function),
            affine: PostProperty::Affine.holds_for(function),
        }
    }

    pub fn holds(&self, property: PostProperty) -> bool {
        match property {
            PostProperty::PreservesFalse => self.preserves_false,
            PostProperty::PreservesTrue => self.preserves_true,
            PostProperty::Monotone => self.monotone,
            PostProperty::SelfDual => self.self_dual,
            PostProperty::Affine => self.affine,
        }
    }

    /// The properties of the profile, in the order of [PostProperty::ALL].
    pub fn properties(&self) -> Vec<PostProperty> {
        PostProperty::ALL
            .into_iter()
            .filter(|property| self.holds(*property))
            .collect()
    }

    /// Whether the function has none of the properties, and so is adequate by itself.
    pub fn is_sheffer(&self) -> bool {
        self.properties().is_empty()
    }
}

/// The profile of an operator from some operator set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OperatorProfile {
    pub operator: OperatorRef,
    pub arity: usize,
    pub profile: PostProfile,
}

/// The result of checking the adequacy of an operator set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdequacyReport {
    /// The name of the operator set.
    pub opset: String,

    pub adequate: bool,

    /// The properties shared by every operator of the set.
    ///
    /// The set is adequate if and only if this is empty, and otherwise each property noted witnesses the set is not adequate.
    pub retained: Vec<PostProperty>,

    /// The profile of each operator, in the order of the set.
    pub operators: Vec<OperatorProfile>,
}

/// The properties which every function of `functions` has.
///
/// If `functions` is empty, every property is retained.
pub fn retained_properties(functions: &[BooleanFunction]) -> Vec<PostProperty> {
    let profiles = functions.iter().map(PostProfile::of).collect::<Vec<_>>();
    retained_by_profiles(&profiles)
}

fn retained_by_profiles(profiles: &[PostProfile]) -> Vec<PostProperty> {
    PostProperty::ALL
        .into_iter()
        .filter(|property| profiles.iter().all(|profile| profile.holds(*property)))
        .collect()
}

/// The function of an operator, with custom operators resolved through `symbols`.
pub fn function_of_operator(
    operator: &OperatorRef,
    symbols: &SymbolTables,
) -> Result<BooleanFunction, ErrorKind> {
    match operator {
        OperatorRef::Builtin(connective) => Ok(BooleanFunction::from_connective(*connective)),

        OperatorRef::Custom(name) => {
            let custom = symbols.operators.resolve(name)?;
            matcher::function_of(&custom.table, custom.arity()).map_err(|e| e.for_operator(name))
        }
    }
}

/// Checks the adequacy of `opset`.
pub fn check_adequacy(
    opset: &OperatorSet,
    symbols: &SymbolTables,
) -> Result<AdequacyReport, ErrorKind> {
    let mut operators = Vec::with_capacity(opset.operators.len());

    for operator in &opset.operators {
        let function = function_of_operator(operator, symbols)?;
        let profile = PostProfile::of(&function);

        log::debug!(target: targets::ADEQUACY, "{operator}: {:?}", profile.properties());

        operators.push(OperatorProfile {
            operator: operator.clone(),
            arity: function.arity(),
            profile,
        });
    }

    let profiles = operators.iter().map(|o| o.profile).collect::<Vec<_>>();
    let retained = retained_by_profiles(&profiles);
    let adequate = retained.is_empty();

    log::info!(target: targets::ADEQUACY, "Opset '{}' adequate: {adequate}", opset.name);

    Ok(AdequacyReport {
        opset: opset.name.clone(),
        adequate,
        retained,
        operators,
    })
}
