//! Scalar field implementation for BN254 (Fr)

use crate::primitives::arithmetic::Field;
use ark_bn254::Fr;
use ark_ff::{Field as ArkField, One, UniformRand, Zero as ArkZero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::ops::{Add, Mul, Neg, Sub};
use rand_core::RngCore;

/// Scalar field element of BN254, kept reduced by arkworks
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct ArkFr(pub Fr);

impl Field for ArkFr {
    fn zero() -> Self {
        ArkFr(Fr::zero())
    }

    fn one() -> Self {
        ArkFr(Fr::one())
    }

    fn from_u64(value: u64) -> Self {
        ArkFr(Fr::from(value))
    }

    fn random<R: RngCore>(rng: &mut R) -> Self {
        ArkFr(Fr::rand(rng))
    }

    fn inv(&self) -> Option<Self> {
        self.0.inverse().map(ArkFr)
    }
}

impl Add for ArkFr {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        ArkFr(self.0 + rhs.0)
    }
}

impl Sub for ArkFr {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        ArkFr(self.0 - rhs.0)
    }
}

impl Mul for ArkFr {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        ArkFr(self.0 * rhs.0)
    }
}

impl Neg for ArkFr {
    type Output = Self;
    fn neg(self) -> Self {
        ArkFr(-self.0)
    }
}
