//! Signature-level quorum behavior, exercised through the reward vote (the
//! simplest quorum-gated action).

mod support;

use cosmwasm_std::Uint128;
use cw_multi_test::Executor;

use bridge::msg::{ExecuteMsg, QueryMsg};
use bridge::state::Config;
use support::{setup, sign_all, Validator};

fn reward_msg(value: u128, nonce: &str, signatures: Vec<cosmwasm_std::Binary>) -> ExecuteMsg {
    ExecuteMsg::SetValidatorReward {
        value: Uint128::new(value),
        nonce: nonce.to_string(),
        signatures,
    }
}

#[test]
fn test_single_validator_is_its_own_quorum() {
    let mut t = setup(1, 0);
    let digest = common::reward_vote_message(5, "n1");
    let sigs = vec![t.validators[0].sign(&digest)];

    t.app
        .execute_contract(
            t.validators[0].addr.clone(),
            t.contract.clone(),
            &reward_msg(5, "n1", sigs),
            &[],
        )
        .unwrap();

    let config: Config = t
        .app
        .wrap()
        .query_wasm_smart(&t.contract, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.validator_fee, Uint128::new(5));
}

#[test]
fn test_minority_of_three_is_rejected() {
    let mut t = setup(3, 0);
    let digest = common::reward_vote_message(5, "n1");
    let sigs = vec![t.validators[0].sign(&digest)];

    let res = t.app.execute_contract(
        t.validators[0].addr.clone(),
        t.contract.clone(),
        &reward_msg(5, "n1", sigs),
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("Invalid signatures"),
        "Expected quorum failure, got: {}",
        err_str
    );
}

#[test]
fn test_two_of_three_is_a_quorum() {
    let mut t = setup(3, 0);
    let digest = common::reward_vote_message(7, "n1");
    let sigs = vec![t.validators[0].sign(&digest), t.validators[2].sign(&digest)];

    t.app
        .execute_contract(
            t.validators[1].addr.clone(),
            t.contract.clone(),
            &reward_msg(7, "n1", sigs),
            &[],
        )
        .unwrap();
}

#[test]
fn test_duplicate_signatures_count_once() {
    let mut t = setup(3, 0);
    let digest = common::reward_vote_message(5, "n1");
    let sig = t.validators[0].sign(&digest);
    let sigs = vec![sig.clone(), sig];

    let res = t.app.execute_contract(
        t.validators[0].addr.clone(),
        t.contract.clone(),
        &reward_msg(5, "n1", sigs),
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid signatures"), "got: {}", err_str);
}

#[test]
fn test_unregistered_signer_is_rejected() {
    let mut t = setup(2, 0);
    let stranger = Validator::new(99);
    let digest = common::reward_vote_message(5, "n1");
    let sigs = vec![t.validators[0].sign(&digest), stranger.sign(&digest)];

    let res = t.app.execute_contract(
        t.validators[0].addr.clone(),
        t.contract.clone(),
        &reward_msg(5, "n1", sigs),
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid signatures"), "got: {}", err_str);
}

#[test]
fn test_signatures_over_wrong_digest_are_rejected() {
    let mut t = setup(3, 0);
    // Signed for a different value than the one submitted.
    let digest = common::reward_vote_message(999, "n1");
    let sigs = sign_all(&t.validators, &digest);

    let res = t.app.execute_contract(
        t.validators[0].addr.clone(),
        t.contract.clone(),
        &reward_msg(5, "n1", sigs),
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid signatures"), "got: {}", err_str);
}

#[test]
fn test_caller_must_be_a_validator() {
    let mut t = setup(3, 0);
    let digest = common::reward_vote_message(5, "n1");
    let sigs = sign_all(&t.validators, &digest);

    let res = t.app.execute_contract(
        t.user.clone(),
        t.contract.clone(),
        &reward_msg(5, "n1", sigs),
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Not a validator"), "got: {}", err_str);
}

#[test]
fn test_raw_recovery_byte_is_accepted() {
    let mut t = setup(3, 0);
    let digest = common::reward_vote_message(5, "n1");
    let sigs = vec![
        t.validators[0].sign_raw(&digest),
        t.validators[1].sign(&digest),
    ];

    t.app
        .execute_contract(
            t.validators[0].addr.clone(),
            t.contract.clone(),
            &reward_msg(5, "n1", sigs),
            &[],
        )
        .unwrap();
}

#[test]
fn test_malformed_signature_is_rejected() {
    let mut t = setup(1, 0);
    let sigs = vec![cosmwasm_std::Binary::from(vec![0u8; 10])];

    let res = t.app.execute_contract(
        t.validators[0].addr.clone(),
        t.contract.clone(),
        &reward_msg(5, "n1", sigs),
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid signatures"), "got: {}", err_str);
}

#[test]
fn test_digest_query_matches_offline_builder() {
    let t = setup(1, 0);
    let queried: cosmwasm_std::Binary = t
        .app
        .wrap()
        .query_wasm_smart(
            &t.contract,
            &QueryMsg::RewardVoteMessage {
                value: Uint128::new(5),
                nonce: "n1".to_string(),
            },
        )
        .unwrap();
    assert_eq!(queried.as_slice(), &common::reward_vote_message(5, "n1"));
}
