/*!
The binary Möbius transform.

Given the outputs of a boolean function, in the row order of a [BooleanFunction](crate::structures::boolean_function::BooleanFunction), the transform gives the coefficients of the algebraic normal form of the function.
That is, the function as an exclusive or of conjunctions of arguments, where the coefficient at index *i* is for the conjunction of each argument *k* such that bit *k* of *i* is set.

For example, the algebraic normal form of 'p iff q' is 1 ⊕ p ⊕ q:

```rust
# use adequacy::generic::mobius::algebraic_normal_form;
assert_eq!(
    algebraic_normal_form(&[true, false, false, true]),
    vec![true, true, true, false]
);
```

The transform is computed in place with one pass over each bit of the index, and so takes *n*2^*n* steps for a function of arity *n*.
*/

/// The coefficients of the algebraic normal form of the function with the given outputs.
///
/// The length of `outputs` is expected to be a power of two.
pub fn algebraic_normal_form(outputs: &[bool]) -> Vec<bool> {
    let mut coefficients = outputs.to_vec();
    let length = coefficients.len();

    let mut bit = 1;
    while bit < length {
        for index in 0..length {
            if index & bit != 0 {
                coefficients[index] ^= coefficients[index ^ bit];
            }
        }
        bit <<= 1;
    }

    coefficients
}

/// The degree of the algebraic normal form with the given coefficients, or nothing if each coefficient is zero.
pub fn degree(coefficients: &[bool]) -> Option<u32> {
    coefficients
        .iter()
        .enumerate()
        .filter(|(_, coefficient)| **coefficient)
        .map(|(index, _)| index.count_ones())
        .max()
}
