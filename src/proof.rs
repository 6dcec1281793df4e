//! Proof structure
//!
//! A proof consists of:
//! - `log2(n)` round records, one per folding round, in production order
//! - One terminal opening (`final_a`, optionally `final_b`, and the
//!   accumulated blinding scalar)
//!
//! The proof is immutable once produced and is consumed whole by the
//! verifier together with the challenge sequence.

use crate::messages::{FinalMessage, RoundMessage};
use crate::primitives::arithmetic::Group;

/// A complete inner-product argument
///
/// Demonstrates that the committed witness vector(s) open to the terminal
/// scalars under the recursively folded generators. The shape of
/// [`FinalMessage::b`] records whether the proof covers one witness
/// vector or two.
#[derive(Clone, Debug)]
pub struct IpaProof<G: Group> {
    /// Round records in production order; verification replays them in
    /// the same order
    pub rounds: Vec<RoundMessage<G>>,

    /// Terminal scalars opening the length-1 vectors
    pub final_message: FinalMessage<G::Scalar>,
}

impl<G: Group> IpaProof<G> {
    /// Number of folding rounds the proof covers
    #[inline]
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Witness-vector length the proof started from
    #[inline]
    pub fn initial_len(&self) -> usize {
        1 << self.rounds.len()
    }

    /// Whether the proof covers a pair of witness vectors
    #[inline]
    pub fn is_two_vector(&self) -> bool {
        self.final_message.b.is_some()
    }
}
