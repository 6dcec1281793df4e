/// Errors that can occur in inner-product argument operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IpaError {
    /// The final commitment equality failed; the proof is rejected
    #[error("Invalid proof")]
    InvalidProof,

    /// Initial vector length is not a power of two
    #[error("Invalid vector length {len}: must be a power of two")]
    NotPowerOfTwo { len: usize },

    /// Mismatched vector lengths
    #[error("Invalid vector length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A vector of odd length cannot be halved
    #[error("Cannot fold vector of odd length {len}")]
    OddLength { len: usize },

    /// A zero challenge has no modular inverse; resample and retry the round
    #[error("Challenge scalar is zero")]
    ZeroChallenge,

    /// Challenge count does not match the proof's round count
    #[error("Invalid challenge count: proof has {expected} rounds, got {actual} challenges")]
    RoundMismatch { expected: usize, actual: usize },
}
