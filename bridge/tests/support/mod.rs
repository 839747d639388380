#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Binary, Empty, Uint128};
use cw_multi_test::{App, AppBuilder, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use bridge::contract;
use bridge::msg::{ExecuteMsg, InstantiateMsg, ValidatorSpec};

pub const CHAIN_ID: &str = "terra";
pub const OTHER_CHAIN: &str = "bsc";
pub const NATIVE_DENOM: &str = "uluna";

pub const OWNER: &str = "terra1owner";
pub const USER: &str = "terra1user";

/// A test validator: a bech32-style account address paired with a secp256k1
/// key it signs digests with off ledger.
pub struct Validator {
    pub addr: Addr,
    key: SigningKey,
}

impl Validator {
    /// Deterministic key from a non-zero seed byte.
    pub fn new(seed: u8) -> Self {
        assert_ne!(seed, 0);
        let key = SigningKey::from_bytes(&[seed; 32].into()).unwrap();
        Self {
            addr: Addr::unchecked(format!("terra1validator{}", seed)),
            key,
        }
    }

    /// Uncompressed SEC1 public key, as registered on the contract.
    pub fn pubkey(&self) -> Binary {
        Binary::from(self.key.verifying_key().to_encoded_point(false).as_bytes())
    }

    /// 65-byte `r || s || v` signature with the 27/28 recovery convention.
    pub fn sign(&self, digest: &[u8; 32]) -> Binary {
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(digest).unwrap();
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recovery_id.to_byte() + 27);
        Binary::from(bytes)
    }

    /// Same signature with a raw 0/1 recovery byte.
    pub fn sign_raw(&self, digest: &[u8; 32]) -> Binary {
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(digest).unwrap();
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recovery_id.to_byte());
        Binary::from(bytes)
    }
}

pub fn sign_all(validators: &[Validator], digest: &[u8; 32]) -> Vec<Binary> {
    validators.iter().map(|v| v.sign(digest)).collect()
}

pub fn bridge_contract() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(contract::execute, contract::instantiate, contract::query)
            .with_migrate(contract::migrate),
    )
}

pub fn cw20_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

pub struct TestBridge {
    pub app: App,
    pub contract: Addr,
    pub code_id: u64,
    pub validators: Vec<Validator>,
    pub owner: Addr,
    pub user: Addr,
}

/// Spin up an app with `n` validators and the given per-transfer reward.
/// The owner account is the wasm admin and holds a large native balance,
/// as does the user account.
pub fn setup(n: u8, validator_fee: u128) -> TestBridge {
    let owner = Addr::unchecked(OWNER);
    let user = Addr::unchecked(USER);
    let validators: Vec<Validator> = (1..=n).map(Validator::new).collect();

    let mut app = AppBuilder::new().build(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &owner, coins(1_000_000_000, NATIVE_DENOM))
            .unwrap();
        router
            .bank
            .init_balance(
                storage,
                &user,
                vec![
                    cosmwasm_std::coin(1_000_000_000, NATIVE_DENOM),
                    cosmwasm_std::coin(1_000_000_000, "ukrw"),
                ],
            )
            .unwrap();
    });

    let code_id = app.store_code(bridge_contract());
    let contract = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                chain_id: CHAIN_ID.to_string(),
                native_denom: NATIVE_DENOM.to_string(),
                validator_fee: Uint128::new(validator_fee),
                validators: validators
                    .iter()
                    .map(|v| ValidatorSpec {
                        address: v.addr.to_string(),
                        pubkey: v.pubkey(),
                    })
                    .collect(),
            },
            &[],
            "quorum-bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    TestBridge {
        app,
        contract,
        code_id,
        validators,
        owner,
        user,
    }
}

impl TestBridge {
    /// Instantiate a cw20 token with `balance` held by the user and this
    /// bridge contract as minter.
    pub fn instantiate_cw20(&mut self, balance: u128) -> Addr {
        let code_id = self.app.store_code(cw20_contract());
        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &cw20_base::msg::InstantiateMsg {
                    name: "Test Token".to_string(),
                    symbol: "TEST".to_string(),
                    decimals: 6,
                    initial_balances: vec![cw20::Cw20Coin {
                        address: self.user.to_string(),
                        amount: Uint128::new(balance),
                    }],
                    mint: Some(cw20::MinterResponse {
                        minter: self.contract.to_string(),
                        cap: None,
                    }),
                    marketing: None,
                },
                &[],
                "test-token",
                None,
            )
            .unwrap()
    }

    pub fn cw20_balance(&self, token: &Addr, addr: &Addr) -> u128 {
        let res: cw20::BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &cw20::Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn cw20_total_supply(&self, token: &Addr) -> u128 {
        let res: cw20::TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(token, &cw20::Cw20QueryMsg::TokenInfo {})
            .unwrap();
        res.total_supply.u128()
    }

    pub fn grant_allowance(&mut self, token: &Addr, amount: u128) {
        let user = self.user.clone();
        let spender = self.contract.to_string();
        self.app
            .execute_contract(
                user,
                token.clone(),
                &cw20::Cw20ExecuteMsg::IncreaseAllowance {
                    spender,
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn native_balance(&self, addr: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, NATIVE_DENOM)
            .unwrap()
            .amount
            .u128()
    }

    /// Whitelist a corridor with a full quorum.
    #[allow(clippy::too_many_arguments)]
    pub fn set_corridor(
        &mut self,
        source_chain: &str,
        destination_chain: &str,
        asset_in: &str,
        asset_out: &str,
        max_amount: u128,
        nonce: &str,
    ) {
        let digest = common::allowed_transfer_message(
            source_chain,
            destination_chain,
            asset_in,
            asset_out,
            true,
            max_amount,
            nonce,
        );
        let signatures = sign_all(&self.validators, &digest);
        let sender = self.validators[0].addr.clone();
        self.app
            .execute_contract(
                sender,
                self.contract.clone(),
                &ExecuteMsg::SetAllowedTransfer {
                    source_chain: source_chain.to_string(),
                    destination_chain: destination_chain.to_string(),
                    asset_in: asset_in.to_string(),
                    asset_out: asset_out.to_string(),
                    active: true,
                    max_amount: Uint128::new(max_amount),
                    nonce: nonce.to_string(),
                    signatures,
                },
                &[],
            )
            .unwrap();
    }

    /// Mark an asset mintable with a full quorum.
    pub fn set_mintable(&mut self, asset: &str, mintable: bool, nonce: &str) {
        let digest = common::mintable_asset_message(asset, mintable, nonce);
        let signatures = sign_all(&self.validators, &digest);
        let sender = self.validators[0].addr.clone();
        self.app
            .execute_contract(
                sender,
                self.contract.clone(),
                &ExecuteMsg::SetMintable {
                    asset: asset.to_string(),
                    mintable,
                    nonce: nonce.to_string(),
                    signatures,
                },
                &[],
            )
            .unwrap();
    }
}
