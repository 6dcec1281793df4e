//! Pedersen vector commitment
//!
//! A multi-base commitment maps scalars and matching generators to a
//! single group element, the weighted sum `Σ scalars[i]·generators[i]`.
//! Extension terms - a blinding pair `α·B` or an inner-product term
//! `⟨a,b⟩·Q` - are added to the result by plain group addition.

use crate::error::IpaError;
use crate::primitives::arithmetic::{Field, Group, IpaRoutines};

/// Commit to `scalars` under `generators`.
///
/// Returns `Σ scalars[i]·generators[i]`; empty inputs commit to the
/// identity. The commitment is binding as long as the generators have no
/// known discrete-log relations.
pub fn vector_commit<G: Group, M: IpaRoutines<G>>(
    generators: &[G],
    scalars: &[G::Scalar],
) -> Result<G, IpaError> {
    if generators.len() != scalars.len() {
        return Err(IpaError::LengthMismatch {
            expected: generators.len(),
            actual: scalars.len(),
        });
    }

    Ok(M::msm(generators, scalars))
}

/// Inner product `⟨a, b⟩` over the scalar field.
pub fn inner_product<F: Field>(a: &[F], b: &[F]) -> Result<F, IpaError> {
    if a.len() != b.len() {
        return Err(IpaError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b.iter())
        .fold(F::zero(), |acc, (x, y)| acc + *x * *y))
}
