//! Folding engine tests

use super::*;
use ipa_fold::fold::{fold_points, fold_scalars};
use ipa_fold::primitives::arithmetic::{Field, Group};
use ipa_fold::IpaError;

#[test]
fn test_fold_halves_length() {
    let v = random_scalars(8);
    let u = nonzero_challenge();

    let folded = fold_scalars(&v, &u).unwrap();
    assert_eq!(folded.len(), 4);
}

#[test]
fn test_fold_points_halves_length() {
    let params = test_params(3);
    let u = nonzero_challenge();

    let folded = fold_points(&params.g_vec, &u).unwrap();
    assert_eq!(folded.len(), 4);
}

#[test]
fn test_fold_terminates_after_k_rounds() {
    let mut v = random_scalars(16);

    for expected_len in [8, 4, 2, 1] {
        v = fold_scalars(&v, &nonzero_challenge()).unwrap();
        assert_eq!(v.len(), expected_len);
    }

    // length 1 is terminal; a further fold is a protocol violation
    let result = fold_scalars(&v, &nonzero_challenge());
    assert_eq!(result, Err(IpaError::OddLength { len: 1 }));
}

#[test]
fn test_fold_odd_length_rejected() {
    let v = random_scalars(3);
    let result = fold_scalars(&v, &nonzero_challenge());

    assert_eq!(result, Err(IpaError::OddLength { len: 3 }));
}

#[test]
fn test_fold_non_power_of_two_fails_mid_recursion() {
    // 6 is even, so one fold succeeds; the half of length 3 cannot fold
    let v = random_scalars(6);
    let folded = fold_scalars(&v, &nonzero_challenge()).unwrap();
    assert_eq!(folded.len(), 3);

    let result = fold_scalars(&folded, &nonzero_challenge());
    assert_eq!(result, Err(IpaError::OddLength { len: 3 }));
}

#[test]
fn test_fold_zero_challenge_rejected() {
    let v = random_scalars(4);
    let result = fold_scalars(&v, &ArkFr::zero());

    assert_eq!(result, Err(IpaError::ZeroChallenge));

    let params = test_params(2);
    let result = fold_points(&params.g_vec, &ArkFr::zero());
    assert_eq!(result, Err(IpaError::ZeroChallenge));
}

#[test]
fn test_fold_scalar_rule() {
    let v = scalar_vec(&[3, 5, 7, 11]);
    let u = ArkFr::from_u64(2);
    let u_inv = u.inv().unwrap();

    let folded = fold_scalars(&v, &u).unwrap();

    assert_eq!(folded[0], v[0] * u + v[1] * u_inv);
    assert_eq!(folded[1], v[2] * u + v[3] * u_inv);
}

#[test]
fn test_fold_points_rule() {
    let params = test_params(1);
    let g = &params.g_vec;
    let u = nonzero_challenge();
    let u_inv = u.inv().unwrap();

    let folded = fold_points(g, &u).unwrap();

    assert_eq!(folded[0], g[0].scale(&u) + g[1].scale(&u_inv));
}

#[test]
fn test_single_round_homomorphism() {
    // One round over n = 2: with L = a[0]·G[1] and R = a[1]·G[0],
    // ⟨a', G'⟩ == u²·L + ⟨a, G⟩ + u⁻²·R when generators fold with u⁻¹.
    let params = test_params(1);
    let g = params.g_vec.clone();
    let a = random_scalars(2);
    let u = nonzero_challenge();
    let u_inv = u.inv().unwrap();

    let p = g[0].scale(&a[0]) + g[1].scale(&a[1]);
    let l = g[1].scale(&a[0]);
    let r = g[0].scale(&a[1]);

    let a_folded = fold_scalars(&a, &u).unwrap();
    let g_folded = fold_points(&g, &u_inv).unwrap();

    let lhs = g_folded[0].scale(&a_folded[0]);
    let rhs = l.scale(&(u * u)) + p + r.scale(&(u_inv * u_inv));
    assert_eq!(lhs, rhs);
}
