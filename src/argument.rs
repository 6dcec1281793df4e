//! Interactive argument orchestration
//!
//! Drives the full reduction: the prover fixes each round's cross terms,
//! obtains a challenge from the randomness oracle, folds, and repeats
//! until the vectors reach length 1. The verifier replays the round
//! records against the same challenge sequence.
//!
//! The challenge oracle stands in for an interactive verifier. In a real
//! interactive deployment the per-round challenge is a message from the
//! remote party; in a non-interactive one it must be re-derived from a
//! transcript hash, which this crate does not implement.

use crate::error::IpaError;
use crate::mode::Mode;
use crate::params::ProtocolParams;
use crate::primitives::arithmetic::{Field, Group, IpaRoutines};
use crate::proof::IpaProof;
use crate::reduce_and_fold::{IpaProverState, IpaVerifierState};
use rand_core::RngCore;

/// Run the full reduction over `a` (and optionally `b`).
///
/// Returns the public commitment `A₀`, the challenge sequence in round
/// order, and the proof. The challenges are public-coin values the
/// verifier needs verbatim; [`verify`] consumes them in the same order.
///
/// A zero challenge is resampled and the round retried - the only
/// retryable condition, available here because this deployment controls
/// challenge sampling.
///
/// # Errors
/// [`IpaError::NotPowerOfTwo`] / [`IpaError::LengthMismatch`] for
/// malformed inputs; nothing is folded in that case.
#[tracing::instrument(skip_all, name = "prove", fields(len = a.len()))]
pub fn prove<G, Rt, M, R>(
    params: &ProtocolParams<G>,
    a: Vec<G::Scalar>,
    b: Option<Vec<G::Scalar>>,
    rng: &mut R,
) -> Result<(G, Vec<G::Scalar>, IpaProof<G>), IpaError>
where
    G: Group,
    Rt: IpaRoutines<G>,
    M: Mode,
    R: RngCore,
{
    let mut state = IpaProverState::<G, M>::new::<Rt, R>(params, a, b, rng)?;
    let commitment = state.commitment();
    let mut challenges = Vec::with_capacity(state.rounds_remaining());

    while !state.is_done() {
        let (message, blinds) = state.compute_round_message::<Rt, R>(rng)?;

        // the challenge is sampled only after (L, R) are fixed
        let u = loop {
            let u = G::Scalar::random(rng);
            match state.apply_challenge(message.clone(), blinds, &u) {
                Ok(()) => break u,
                Err(IpaError::ZeroChallenge) => continue,
                Err(e) => return Err(e),
            }
        };
        challenges.push(u);
    }

    let proof = state.finalize()?;
    Ok((commitment, challenges, proof))
}

/// Verify a proof against the commitment and the challenge sequence.
///
/// Replays the round records in order, then checks the terminal opening
/// against generators folded through the same challenges.
///
/// # Errors
/// - [`IpaError::RoundMismatch`] if the challenge count does not match
///   the proof's round count
/// - [`IpaError::LengthMismatch`] if the proof exceeds the parameters
/// - [`IpaError::InvalidProof`] if the final equality fails - an invalid
///   or forged proof, reported as a plain reject
#[tracing::instrument(skip_all, name = "verify", fields(rounds = proof.num_rounds()))]
pub fn verify<G: Group>(
    params: &ProtocolParams<G>,
    commitment: G,
    challenges: &[G::Scalar],
    proof: &IpaProof<G>,
) -> Result<(), IpaError> {
    if challenges.len() != proof.num_rounds() {
        return Err(IpaError::RoundMismatch {
            expected: proof.num_rounds(),
            actual: challenges.len(),
        });
    }

    let mut state = IpaVerifierState::new(
        params,
        commitment,
        proof.initial_len(),
        proof.is_two_vector(),
    )?;

    for (message, u) in proof.rounds.iter().zip(challenges.iter()) {
        state.process_round(message, u)?;
    }

    state.verify_final(&proof.final_message)
}
