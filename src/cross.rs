//! Cross-term computation
//!
//! For a round over vectors of even length `n`, the fold
//! `a'[i] = a[2i]·u + a[2i+1]·u⁻¹` against `G'[i] = G[2i]·u⁻¹ + G[2i+1]·u`
//! preserves the diagonal terms of the commitment and surfaces two
//! off-diagonal aggregates, scaled by `u²` and `u⁻²`. Those aggregates
//! are exactly `L` and `R` below; publishing them before the challenge is
//! sampled lets the verifier reconstruct the effect of the fold without
//! learning the vectors.

use crate::mode::Mode;
use crate::primitives::arithmetic::{Group, IpaRoutines};
use rand_core::RngCore;

/// The off-diagonal aggregates for one round, plus their blinds.
///
/// Blinds are zero in transparent mode.
#[derive(Clone, Debug)]
pub struct CrossTerms<G: Group> {
    /// L - pairs each odd-indexed generator with the preceding scalar
    pub l: G,
    /// R - pairs each even-indexed generator with the following scalar
    pub r: G,
    /// Fresh blind added to L as `rho_l·B`
    pub rho_l: G::Scalar,
    /// Fresh blind added to R as `rho_r·B`
    pub rho_r: G::Scalar,
}

/// Compute `(L, R)` for the current vectors.
///
/// `L = Σ_{i odd} a[i-1]·G[i]` and `R = Σ_{i even} a[i+1]·G[i]`, extended
/// over `(b, H)` in the two-vector protocol. In hiding mode both sums are
/// masked with fresh blinds on `blinding_base`.
///
/// Must be called before the round challenge exists: the challenge may
/// not be influenced by anything it determines.
pub fn compute_cross_terms<G, Rt, M, R>(
    g_vec: &[G],
    h_vec: Option<&[G]>,
    a: &[G::Scalar],
    b: Option<&[G::Scalar]>,
    blinding_base: &G,
    rng: &mut R,
) -> CrossTerms<G>
where
    G: Group,
    Rt: IpaRoutines<G>,
    M: Mode,
    R: RngCore,
{
    debug_assert_eq!(g_vec.len(), a.len(), "generators and scalars must have equal length");
    debug_assert_eq!(g_vec.len() % 2, 0, "cross terms require an even length");

    let odd_g: Vec<G> = g_vec.iter().skip(1).step_by(2).copied().collect();
    let even_a: Vec<G::Scalar> = a.iter().step_by(2).copied().collect();
    let mut l = Rt::msm(&odd_g, &even_a);

    let even_g: Vec<G> = g_vec.iter().step_by(2).copied().collect();
    let odd_a: Vec<G::Scalar> = a.iter().skip(1).step_by(2).copied().collect();
    let mut r = Rt::msm(&even_g, &odd_a);

    if let (Some(h_vec), Some(b)) = (h_vec, b) {
        debug_assert_eq!(h_vec.len(), b.len(), "generators and scalars must have equal length");

        let odd_h: Vec<G> = h_vec.iter().skip(1).step_by(2).copied().collect();
        let even_b: Vec<G::Scalar> = b.iter().step_by(2).copied().collect();
        l = l + Rt::msm(&odd_h, &even_b);

        let even_h: Vec<G> = h_vec.iter().step_by(2).copied().collect();
        let odd_b: Vec<G::Scalar> = b.iter().skip(1).step_by(2).copied().collect();
        r = r + Rt::msm(&even_h, &odd_b);
    }

    let rho_l = M::sample(rng);
    let rho_r = M::sample(rng);

    CrossTerms {
        l: M::mask(l, blinding_base, &rho_l),
        r: M::mask(r, blinding_base, &rho_r),
        rho_l,
        rho_r,
    }
}
