//! Soundness tests: every tampered proof component must reject

use super::*;
use ipa_fold::commitment::vector_commit;
use ipa_fold::primitives::arithmetic::{Field, Group};
use ipa_fold::{prove, verify, Hiding, IpaProof, ProtocolParams, Transparent};
use rand::thread_rng;
use std::mem::swap;

#[allow(clippy::type_complexity)]
fn create_valid_proof(n: usize) -> (ProtocolParams<ArkG1>, ArkG1, Vec<ArkFr>, IpaProof<ArkG1>) {
    let mut rng = thread_rng();
    let params = test_params(3);

    let (commitment, challenges, proof) = prove::<_, Routines, Hiding, _>(
        &params,
        random_scalars(n),
        Some(random_scalars(n)),
        &mut rng,
    )
    .unwrap();

    (params, commitment, challenges, proof)
}

fn random_point() -> ArkG1 {
    let mut rng = thread_rng();
    ArkG1::random(&mut rng)
}

fn random_scalar() -> ArkFr {
    let mut rng = thread_rng();
    ArkFr::random(&mut rng)
}

#[test]
fn test_soundness_tamper_final_a() {
    let (params, commitment, challenges, mut proof) = create_valid_proof(8);

    proof.final_message.a = random_scalar();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with tampered final a");
}

#[test]
fn test_soundness_tamper_final_b() {
    let (params, commitment, challenges, mut proof) = create_valid_proof(8);

    proof.final_message.b = Some(random_scalar());

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with tampered final b");
}

#[test]
fn test_soundness_tamper_final_blinding() {
    let (params, commitment, challenges, mut proof) = create_valid_proof(8);

    proof.final_message.blinding = random_scalar();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with tampered final blinding");
}

#[test]
fn test_soundness_tamper_round_l() {
    let (params, commitment, challenges, mut proof) = create_valid_proof(8);

    proof.rounds[0].l = random_point();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with tampered L");
}

#[test]
fn test_soundness_tamper_round_r() {
    let (params, commitment, challenges, mut proof) = create_valid_proof(8);

    proof.rounds[0].r = random_point();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with tampered R");
}

#[test]
fn test_soundness_tamper_last_round() {
    let (params, commitment, challenges, mut proof) = create_valid_proof(8);

    let last = proof.rounds.len() - 1;
    proof.rounds[last].r = random_point();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with last round tampering");
}

#[test]
fn test_soundness_swap_l_and_r() {
    let (params, commitment, challenges, mut proof) = create_valid_proof(8);

    let message = &mut proof.rounds[0];
    swap(&mut message.l, &mut message.r);

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with swapped L and R");
}

#[test]
fn test_soundness_tamper_challenge() {
    let (params, commitment, mut challenges, proof) = create_valid_proof(8);

    challenges[1] = random_scalar();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with tampered challenge");
}

#[test]
fn test_soundness_wrong_commitment() {
    let (params, _, challenges, proof) = create_valid_proof(8);

    let result = verify(&params, random_point(), &challenges, &proof);
    assert!(result.is_err(), "Should fail with wrong commitment");
}

#[test]
fn test_soundness_strip_second_vector() {
    let (params, commitment, challenges, mut proof) = create_valid_proof(8);

    proof.final_message.b = None;

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with stripped b opening");
}

#[test]
fn test_soundness_truncated_proof() {
    let (params, commitment, mut challenges, mut proof) = create_valid_proof(8);

    proof.rounds.pop();
    challenges.pop();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with truncated proof");
}

#[test]
fn test_soundness_flipped_witness_element() {
    // prove against a witness with one flipped element; the proof must not
    // open the commitment to the original vectors
    let mut rng = thread_rng();
    let params = test_params(2);
    let a = scalar_vec(&[808, 140, 166, 209]);
    let b = scalar_vec(&[88, 242, 404, 602]);

    let commitment = vector_commit::<ArkG1, Routines>(&params.g_vec, &a).unwrap()
        + vector_commit::<ArkG1, Routines>(&params.h_vec, &b).unwrap();

    let mut a_flipped = a;
    a_flipped[2] = a_flipped[2] + ArkFr::one();

    let (_, challenges, proof) =
        prove::<_, Routines, Transparent, _>(&params, a_flipped, Some(b), &mut rng).unwrap();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with flipped witness element");
}

#[test]
fn test_soundness_flipped_witness_element_b() {
    let mut rng = thread_rng();
    let params = test_params(1);
    let a = scalar_vec(&[433, 651]);
    let b = scalar_vec(&[282, 521]);

    let commitment = vector_commit::<ArkG1, Routines>(&params.g_vec, &a).unwrap()
        + vector_commit::<ArkG1, Routines>(&params.h_vec, &b).unwrap();

    let mut b_flipped = b;
    b_flipped[0] = b_flipped[0] + ArkFr::one();

    let (_, challenges, proof) =
        prove::<_, Routines, Transparent, _>(&params, a, Some(b_flipped), &mut rng).unwrap();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with flipped witness element");
}

#[test]
fn test_soundness_zero_round_tampering() {
    let mut rng = thread_rng();
    let params = test_params(2);

    let (commitment, challenges, mut proof) =
        prove::<_, Routines, Hiding, _>(&params, scalar_vec(&[222]), Some(scalar_vec(&[313])), &mut rng)
            .unwrap();

    proof.final_message.a = random_scalar();

    let result = verify(&params, commitment, &challenges, &proof);
    assert!(result.is_err(), "Should fail with tampered zero-round proof");
}
