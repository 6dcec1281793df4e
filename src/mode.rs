//! Mode trait for transparent vs hiding proofs
//!
//! This module provides a mode abstraction that allows the same protocol
//! implementation to work for both transparent (non-hiding) and hiding
//! proofs.
//!
//! - [`Transparent`]: Default mode with no blinding. `sample` returns zero, `mask` is identity.
//! - [`Hiding`]: Samples blinds from the injected RNG for hiding proofs.

use crate::primitives::arithmetic::{Field, Group};

/// Mode marker trait for transparent vs hiding proofs.
///
/// Determines whether blinds are sampled (hiding) or zero (transparent).
pub trait Mode: 'static {
    /// Sample a blinding factor.
    ///
    /// - Transparent: returns `F::zero()` without using the RNG
    /// - Hiding: returns a random scalar from the RNG
    ///
    /// Blinds are private to the prover; they never travel to the
    /// verifier except folded into the accumulated blinding scalar.
    fn sample<F: Field, R: rand_core::RngCore>(rng: &mut R) -> F;

    /// Mask a group element with a blinding factor.
    ///
    /// - Transparent: returns `value` unchanged
    /// - Hiding: returns `value + base·blind`
    fn mask<G: Group>(value: G, base: &G, blind: &G::Scalar) -> G;
}

/// Transparent mode - no blinding.
///
/// All samples return zero, all masks return the value unchanged.
/// This is the default mode and produces non-hiding proofs.
pub struct Transparent;

impl Mode for Transparent {
    fn sample<F: Field, R: rand_core::RngCore>(_rng: &mut R) -> F {
        F::zero()
    }

    fn mask<G: Group>(value: G, _base: &G, _blind: &G::Scalar) -> G {
        value
    }
}

/// Hiding mode - samples blinds from the RNG.
///
/// Produces hiding proofs by masking the cross terms with fresh random
/// blinds scaled by the blinding base, so `(L, R)` leak nothing about the
/// witness vectors.
pub struct Hiding;

impl Mode for Hiding {
    fn sample<F: Field, R: rand_core::RngCore>(rng: &mut R) -> F {
        F::random(rng)
    }

    fn mask<G: Group>(value: G, base: &G, blind: &G::Scalar) -> G {
        value + base.scale(blind)
    }
}
