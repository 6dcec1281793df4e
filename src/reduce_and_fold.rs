//! Reduction protocol - prover and verifier state management
//!
//! This module contains the state machines for the interactive folding
//! protocol. The prover owns the witness and generator vectors and folds
//! them round by round; the verifier accumulates the expected commitment
//! from the round records and independently re-folds its own copy of the
//! generators - a second computation of the same recursive fold, and the
//! primary cross-check of protocol correctness.
//!
//! Both machines iterate over owned, round-indexed state; the recursion
//! depth of the underlying argument never shows up as call-stack depth.

use crate::commitment::vector_commit;
use crate::cross::{compute_cross_terms, CrossTerms};
use crate::error::IpaError;
use crate::fold::{fold_points, fold_scalars};
use crate::messages::{FinalMessage, RoundMessage};
use crate::mode::{Mode, Transparent};
use crate::params::ProtocolParams;
use crate::primitives::arithmetic::{Field, Group, IpaRoutines};
use crate::proof::IpaProof;
use rand_core::RngCore;
use std::marker::PhantomData;

/// Prover state for the folding protocol
///
/// Holds the current (folded) witness and generator vectors, the running
/// commitment, and the accumulated blinding scalar. Each round shrinks
/// every vector to half its length until a single element remains.
///
/// The `M` parameter controls whether the proof is transparent or hiding:
/// - [`Transparent`] (default): no blinding, zero blinds throughout
/// - [`Hiding`](crate::mode::Hiding): fresh blinds on every round's cross terms
pub struct IpaProverState<'a, G: Group, M: Mode = Transparent> {
    /// Current a vector
    a: Vec<G::Scalar>,

    /// Current b vector (two-vector protocol only)
    b: Option<Vec<G::Scalar>>,

    /// Folded local copy of the G generators
    g_vec: Vec<G>,

    /// Folded local copy of the H generators (two-vector protocol only)
    h_vec: Option<Vec<G>>,

    /// Accumulated blinding scalar (zero in transparent mode)
    alpha: G::Scalar,

    /// Running commitment A
    commitment: G,

    /// Round records emitted so far, in production order
    rounds: Vec<RoundMessage<G>>,

    /// Reference to the shared protocol parameters
    params: &'a ProtocolParams<G>,

    /// Phantom data for mode marker
    _mode: PhantomData<M>,
}

/// Verifier state for the folding protocol
///
/// Accumulates the expected commitment from the round records and folds
/// its own copies of the generator vectors through the same challenges.
pub struct IpaVerifierState<'a, G: Group> {
    /// Accumulated expected commitment
    commitment: G,

    /// Independently folded copy of the G generators
    g_vec: Vec<G>,

    /// Independently folded copy of the H generators (two-vector proofs)
    h_vec: Option<Vec<G>>,

    /// Reference to the shared protocol parameters
    params: &'a ProtocolParams<G>,
}

impl<'a, G: Group, M: Mode> IpaProverState<'a, G, M> {
    /// Create prover state and bind the initial commitment
    ///
    /// Computes `A = ⟨a, G⟩ [+ ⟨b, H⟩] [+ α·B]`, where the blinding scalar
    /// `α` is sampled in hiding mode and zero otherwise.
    ///
    /// # Errors
    /// - [`IpaError::NotPowerOfTwo`] if `a` is empty or its length is not a power of two
    /// - [`IpaError::LengthMismatch`] if `b` differs in length from `a`,
    ///   or the parameters cannot cover the vectors
    pub fn new<Rt: IpaRoutines<G>, R: RngCore>(
        params: &'a ProtocolParams<G>,
        a: Vec<G::Scalar>,
        b: Option<Vec<G::Scalar>>,
        rng: &mut R,
    ) -> Result<Self, IpaError> {
        if !a.len().is_power_of_two() {
            return Err(IpaError::NotPowerOfTwo { len: a.len() });
        }
        if a.len() > params.max_len() {
            return Err(IpaError::LengthMismatch {
                expected: params.max_len(),
                actual: a.len(),
            });
        }
        if let Some(b) = b.as_ref() {
            if b.len() != a.len() {
                return Err(IpaError::LengthMismatch {
                    expected: a.len(),
                    actual: b.len(),
                });
            }
        }

        let g_vec = params.g_vec[..a.len()].to_vec();
        let h_vec = b.as_ref().map(|_| params.h_vec[..a.len()].to_vec());

        let alpha = M::sample(rng);
        let mut commitment = vector_commit::<G, Rt>(&g_vec, &a)?;
        if let (Some(h_vec), Some(b)) = (h_vec.as_ref(), b.as_ref()) {
            commitment = commitment + vector_commit::<G, Rt>(h_vec, b)?;
        }
        let commitment = M::mask(commitment, &params.b, &alpha);

        Ok(Self {
            a,
            b,
            g_vec,
            h_vec,
            alpha,
            commitment,
            rounds: Vec::new(),
            params,
            _mode: PhantomData,
        })
    }

    /// Current witness-vector length
    #[inline]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Whether the reduction has reached its terminal state
    #[inline]
    pub fn is_done(&self) -> bool {
        self.a.len() == 1
    }

    /// Folding rounds left until the terminal state
    #[inline]
    pub fn rounds_remaining(&self) -> usize {
        self.a.len().trailing_zeros() as usize
    }

    /// The running commitment; before any round this is the public `A₀`
    #[inline]
    pub fn commitment(&self) -> G {
        self.commitment
    }

    /// Compute this round's cross terms.
    ///
    /// Must be called before the round challenge is sampled; the returned
    /// blinds feed [`apply_challenge`](Self::apply_challenge).
    ///
    /// # Errors
    /// [`IpaError::OddLength`] if the current length cannot be halved
    /// (including the terminal length 1).
    #[tracing::instrument(skip_all, name = "IpaProverState::compute_round_message", fields(len = self.a.len()))]
    pub fn compute_round_message<Rt: IpaRoutines<G>, R: RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(RoundMessage<G>, [G::Scalar; 2]), IpaError> {
        if self.a.len() % 2 != 0 {
            return Err(IpaError::OddLength { len: self.a.len() });
        }

        let CrossTerms { l, r, rho_l, rho_r } = compute_cross_terms::<G, Rt, M, R>(
            &self.g_vec,
            self.h_vec.as_deref(),
            &self.a,
            self.b.as_deref(),
            &self.params.b,
            rng,
        );

        Ok((RoundMessage { l, r }, [rho_l, rho_r]))
    }

    /// Fold all vectors with challenge `u` and absorb the round record.
    ///
    /// Witness vectors fold with `u`; generator vectors fold with `u⁻¹`,
    /// keeping the scalar and point conventions matched. The blinding
    /// accumulator becomes `α + u²·ρL + u⁻²·ρR` and the running
    /// commitment `u²·L + A + u⁻²·R`.
    ///
    /// `u⁻¹` is computed before any state is touched, so
    /// [`IpaError::ZeroChallenge`] leaves the round replayable with a
    /// fresh challenge.
    #[tracing::instrument(skip_all, name = "IpaProverState::apply_challenge")]
    pub fn apply_challenge(
        &mut self,
        message: RoundMessage<G>,
        blinds: [G::Scalar; 2],
        u: &G::Scalar,
    ) -> Result<(), IpaError> {
        let u_inv = u.inv().ok_or(IpaError::ZeroChallenge)?;
        let u_sq = *u * *u;
        let u_inv_sq = u_inv * u_inv;

        self.a = fold_scalars(&self.a, u)?;
        if let Some(b) = self.b.as_mut() {
            let folded = fold_scalars(b, u)?;
            *b = folded;
        }

        self.g_vec = fold_points(&self.g_vec, &u_inv)?;
        if let Some(h_vec) = self.h_vec.as_mut() {
            let folded = fold_points(h_vec, &u_inv)?;
            *h_vec = folded;
        }

        self.alpha = self.alpha + u_sq * blinds[0] + u_inv_sq * blinds[1];
        self.commitment = message.l.scale(&u_sq) + self.commitment + message.r.scale(&u_inv_sq);
        self.rounds.push(message);

        Ok(())
    }

    /// Emit the proof from the terminal state.
    ///
    /// # Errors
    /// [`IpaError::LengthMismatch`] if the vectors have not been folded
    /// down to length 1.
    pub fn finalize(self) -> Result<IpaProof<G>, IpaError> {
        if self.a.len() != 1 {
            return Err(IpaError::LengthMismatch {
                expected: 1,
                actual: self.a.len(),
            });
        }

        Ok(IpaProof {
            rounds: self.rounds,
            final_message: FinalMessage {
                a: self.a[0],
                b: self.b.map(|b| b[0]),
                blinding: self.alpha,
            },
        })
    }
}

impl<'a, G: Group> IpaVerifierState<'a, G> {
    /// Create verifier state for a claimed commitment over `n` elements
    ///
    /// Takes local copies of the generator prefixes; the shared
    /// parameters are never mutated.
    pub fn new(
        params: &'a ProtocolParams<G>,
        commitment: G,
        n: usize,
        two_vector: bool,
    ) -> Result<Self, IpaError> {
        if !n.is_power_of_two() {
            return Err(IpaError::NotPowerOfTwo { len: n });
        }
        if n > params.max_len() {
            return Err(IpaError::LengthMismatch {
                expected: params.max_len(),
                actual: n,
            });
        }

        Ok(Self {
            commitment,
            g_vec: params.g_vec[..n].to_vec(),
            h_vec: two_vector.then(|| params.h_vec[..n].to_vec()),
            params,
        })
    }

    /// Absorb one round record with its challenge.
    ///
    /// Updates the accumulator `A ← u²·L + A + u⁻²·R` and folds the local
    /// generator copies with `u⁻¹` - the same point-folding rule the
    /// prover applied.
    #[tracing::instrument(skip_all, name = "IpaVerifierState::process_round")]
    pub fn process_round(&mut self, message: &RoundMessage<G>, u: &G::Scalar) -> Result<(), IpaError> {
        let u_inv = u.inv().ok_or(IpaError::ZeroChallenge)?;
        let u_sq = *u * *u;
        let u_inv_sq = u_inv * u_inv;

        self.commitment = message.l.scale(&u_sq) + self.commitment + message.r.scale(&u_inv_sq);

        self.g_vec = fold_points(&self.g_vec, &u_inv)?;
        if let Some(h_vec) = self.h_vec.as_mut() {
            let folded = fold_points(h_vec, &u_inv)?;
            *h_vec = folded;
        }

        Ok(())
    }

    /// Check the terminal opening against the accumulated commitment.
    ///
    /// Computes `final_a·G_final [+ final_b·H_final] + blinding·B` and
    /// accepts iff it equals the accumulator under group equality.
    ///
    /// # Errors
    /// - [`IpaError::LengthMismatch`] if rounds remain unprocessed
    /// - [`IpaError::InvalidProof`] on any mismatch - the plain reject
    #[tracing::instrument(skip_all, name = "IpaVerifierState::verify_final")]
    pub fn verify_final(&self, message: &FinalMessage<G::Scalar>) -> Result<(), IpaError> {
        if self.g_vec.len() != 1 {
            return Err(IpaError::LengthMismatch {
                expected: 1,
                actual: self.g_vec.len(),
            });
        }

        let mut expected = self.g_vec[0].scale(&message.a);
        match (self.h_vec.as_ref(), message.b.as_ref()) {
            (Some(h_vec), Some(b)) => expected = expected + h_vec[0].scale(b),
            (None, None) => {}
            // one-vector commitment opened as two-vector, or vice versa
            _ => return Err(IpaError::InvalidProof),
        }
        let expected = expected + self.params.b.scale(&message.blinding);

        if self.commitment == expected {
            Ok(())
        } else {
            Err(IpaError::InvalidProof)
        }
    }
}
