//! # ipa-fold
//!
//! A logarithmic-size inner-product argument over a prime-order
//! elliptic-curve group.
//!
//! A prover convinces a verifier that a publicly committed vector (or pair
//! of vectors) opens to claimed terminal scalars, using O(log n)
//! communication instead of O(n). Each round halves the witness and
//! generator vectors with a challenge and its inverse, publishing the two
//! cross-term aggregates `(L, R)` that capture what the fold would
//! otherwise lose; the verifier replays the rounds against the running
//! commitment and checks a single O(1) equation at the end
//! (Bulletproofs-style folding).
//!
//! The protocol is *interactive*: round challenges come from an injected
//! randomness oracle and are handed to the verifier alongside the proof.
//! No Fiat-Shamir transcript is implemented; a non-interactive deployment
//! must derive challenges from a transcript hash over all prior messages
//! before reusing this crate.
//!
//! ## Structure
//!
//! ### Core Modules
//! - [`primitives`] - Core traits and abstractions
//!   - [`primitives::arithmetic`] - Field, group, and MSM traits
//! - [`params`] - Shared protocol parameters (generator vectors and bases)
//! - [`commitment`] - Pedersen vector commitment
//! - [`fold`] - Scalar and generator folding
//! - [`cross`] - Per-round cross-term computation
//! - [`mode`] - Transparent vs hiding mode selection
//! - [`reduce_and_fold`] - Prover and verifier state machines
//! - [`argument`] - Interactive prove/verify orchestration
//! - [`messages`] - Protocol message structures (round records, terminal opening)
//! - [`proof`] - Complete proof data structure
//! - [`error`] - Error types
//!
//! ### Backend Implementations
//! - [`backends`] - Concrete backend implementations (available with feature flags)
//!   - [`backends::arkworks`] - Arkworks backend with the BN254 curve (requires `arkworks` feature)
//!
//! ## Usage
//!
//! ```ignore
//! use ipa_fold::backends::arkworks::{ArkG1, G1Routines};
//! use ipa_fold::{prove, verify, Hiding, ProtocolParams};
//!
//! // 1. Fix protocol parameters (shared, immutable after setup)
//! let params = ProtocolParams::<ArkG1>::new(&mut rng, max_log_n);
//!
//! // 2. Commit and reduce
//! let (commitment, challenges, proof) =
//!     prove::<_, G1Routines, Hiding, _>(&params, a, Some(b), &mut rng)?;
//!
//! // 3. Verify
//! verify(&params, commitment, &challenges, &proof)?;
//! ```

pub mod argument;
pub mod commitment;
pub mod cross;
pub mod error;
pub mod fold;
pub mod messages;
pub mod mode;
pub mod params;
pub mod primitives;
pub mod proof;
pub mod reduce_and_fold;

#[cfg(feature = "arkworks")]
pub mod backends;

pub use argument::{prove, verify};
pub use error::IpaError;
pub use messages::{FinalMessage, RoundMessage};
pub use mode::{Hiding, Mode, Transparent};
pub use params::ProtocolParams;
pub use proof::IpaProof;
pub use reduce_and_fold::{IpaProverState, IpaVerifierState};
