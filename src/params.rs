//! Shared protocol parameters
//!
//! Prover and verifier agree on the generator vectors and auxiliary bases
//! out of band, before any proof session starts. The parameters are
//! immutable after setup and are held by reference by both roles; the
//! state machines fold local copies and never touch the originals.

use crate::primitives::arithmetic::Group;
use rand_core::RngCore;

/// Protocol parameters for the inner-product argument
///
/// Holds the commitment bases for vectors up to length `2^max_log_n`.
/// The setup is transparent: every base is sampled from public randomness,
/// so no base has a known discrete-log relation to any other.
#[derive(Clone)]
pub struct ProtocolParams<G: Group> {
    /// G - commitment bases for the `a` vector
    pub g_vec: Vec<G>,

    /// H - commitment bases for the `b` vector (two-vector protocol)
    pub h_vec: Vec<G>,

    /// Q - base binding a published inner product into a commitment
    pub q: G,

    /// B - blinding base for the hiding variant
    pub b: G,
}

impl<G: Group> ProtocolParams<G> {
    /// Generate parameters supporting vectors up to length `2^max_log_n`
    pub fn new<R: RngCore>(rng: &mut R, max_log_n: usize) -> Self {
        let n = 1 << max_log_n;

        let g_vec: Vec<G> = (0..n).map(|_| G::random(rng)).collect();
        let h_vec: Vec<G> = (0..n).map(|_| G::random(rng)).collect();
        let q = G::random(rng);
        let b = G::random(rng);

        Self { g_vec, h_vec, q, b }
    }

    /// Maximum witness-vector length these parameters support
    #[inline]
    pub fn max_len(&self) -> usize {
        self.g_vec.len()
    }

    /// Log₂ of the maximum witness-vector length
    #[inline]
    pub fn max_log_n(&self) -> usize {
        self.g_vec.len().trailing_zeros() as usize
    }
}
