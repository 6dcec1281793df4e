//! Folding engine
//!
//! One round of the reduction halves a vector by combining adjacent
//! even/odd pairs with a challenge and its inverse. Witness scalars and
//! generators fold with *opposite* exponent assignment - the prover and
//! verifier both invoke [`fold_points`] with the inverse challenge - which
//! is what makes the commitment homomorphism telescope across rounds.
//!
//! Folding is iterative; no recursion, no reliance on call-stack depth.

use crate::error::IpaError;
use crate::primitives::arithmetic::{Field, Group};

/// Fold a scalar vector with challenge `u`.
///
/// Output element `i` is `v[2i]·u + v[2i+1]·u⁻¹`. Fails with
/// [`IpaError::OddLength`] when the length cannot be halved and
/// [`IpaError::ZeroChallenge`] when `u` has no inverse.
pub fn fold_scalars<F: Field>(v: &[F], u: &F) -> Result<Vec<F>, IpaError> {
    if v.len() % 2 != 0 {
        return Err(IpaError::OddLength { len: v.len() });
    }

    let u_inv = u.inv().ok_or(IpaError::ZeroChallenge)?;

    Ok(v.chunks_exact(2)
        .map(|pair| pair[0] * *u + pair[1] * u_inv)
        .collect())
}

/// Fold a generator vector with scalar `x`.
///
/// Output element `i` is `points[2i]·x + points[2i+1]·x⁻¹`, the same
/// pairing rule as [`fold_scalars`]. The protocol always passes
/// `x = u⁻¹`, so generators fold as `G[2i]·u⁻¹ + G[2i+1]·u` - exponents
/// swapped relative to the scalar fold.
pub fn fold_points<G: Group>(points: &[G], x: &G::Scalar) -> Result<Vec<G>, IpaError> {
    if points.len() % 2 != 0 {
        return Err(IpaError::OddLength { len: points.len() });
    }

    let x_inv = x.inv().ok_or(IpaError::ZeroChallenge)?;

    Ok(points
        .chunks_exact(2)
        .map(|pair| pair[0].scale(x) + pair[1].scale(&x_inv))
        .collect())
}
