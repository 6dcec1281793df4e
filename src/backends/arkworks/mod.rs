//! Arkworks backend implementation for the BN254 curve
//!
//! BN254's G1 is the same prime-order group the protocol's reference
//! parameters were originally published for (py_ecc's `bn128`).

mod ark_field;
mod ark_group;

pub use ark_field::ArkFr;
pub use ark_group::{ArkG1, G1Routines};
