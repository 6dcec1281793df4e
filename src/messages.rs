//! Protocol messages exchanged between prover and verifier
//!
//! One [`RoundMessage`] is produced per folding round; the terminal
//! [`FinalMessage`] opens the length-1 vectors. Round order is
//! significant: verification consumes the records in exactly the order
//! they were produced.

/// Cross-term pair for one folding round
///
/// Fixed before the round's challenge is sampled; appended to the proof
/// transcript in production order.
#[derive(Clone, Debug)]
pub struct RoundMessage<G> {
    /// L - aggregate of the odd-generator / preceding-scalar pairings
    pub l: G,
    /// R - aggregate of the even-generator / following-scalar pairings
    pub r: G,
}

/// Terminal opening emitted once the vectors reach length 1
#[derive(Clone, Debug)]
pub struct FinalMessage<F> {
    /// Surviving element of `a`
    pub a: F,
    /// Surviving element of `b` (two-vector protocol only)
    pub b: Option<F>,
    /// Accumulated blinding scalar (zero for transparent proofs)
    pub blinding: F,
}
