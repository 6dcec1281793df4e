//! Field and group traits
//!
//! The protocol logic is generic over these abstractions; concrete curve
//! arithmetic lives in a backend. Points stay opaque behind [`Group`], so
//! no coordinate representation leaks into the core.

use rand_core::RngCore;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Element of the scalar field `Z_p` of the group's prime order `p`.
///
/// All arithmetic is modular; the backend is responsible for keeping
/// values reduced.
pub trait Field:
    Copy
    + Clone
    + Debug
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Embed a small integer into the field
    fn from_u64(value: u64) -> Self;

    /// Sample a uniformly random field element
    fn random<R: RngCore>(rng: &mut R) -> Self;

    /// Multiplicative inverse; `None` for zero
    fn inv(&self) -> Option<Self>;
}

/// Element of a prime-order group, opaque beyond these operations.
///
/// `identity` is the additive zero; equality is group equality.
pub trait Group:
    Copy
    + Clone
    + Debug
    + PartialEq
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
{
    /// Scalar field of the group order
    type Scalar: Field;

    /// The group identity element
    fn identity() -> Self;

    /// Group addition
    fn add(&self, rhs: &Self) -> Self;

    /// Group negation
    fn neg(&self) -> Self;

    /// Scalar multiplication
    fn scale(&self, k: &Self::Scalar) -> Self;

    /// Sample a random group element (a generator with unknown discrete log)
    fn random<R: RngCore>(rng: &mut R) -> Self;
}

/// Vector routines a backend may accelerate.
pub trait IpaRoutines<G: Group> {
    /// Multi-scalar multiplication: `Σ scalars[i]·bases[i]`.
    ///
    /// Requires equal-length inputs; empty inputs yield the identity.
    fn msm(bases: &[G], scalars: &[G::Scalar]) -> G;
}
