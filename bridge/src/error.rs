use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Not a validator")]
    NotAValidator {},

    #[error("Invalid signatures")]
    InvalidSignatures {},

    #[error("Already voted")]
    AlreadyVoted {},

    #[error("Vote already cast")]
    VoteAlreadyCast {},

    #[error("Transfer vote already cast")]
    TransferVoteAlreadyCast {},

    #[error("Transfer already completed")]
    TransferAlreadyCompleted {},

    #[error("Transfer already blocked")]
    TransferAlreadyBlocked {},

    #[error("Recipient cannot be zero address")]
    ZeroRecipient {},

    #[error("Amount cannot be zero")]
    ZeroAmount {},

    #[error("Invalid source chain")]
    InvalidSourceChain {},

    #[error("Invalid destination chain")]
    InvalidDestinationChain {},

    #[error("Invalid vote")]
    InvalidVote {},

    #[error("Validator already exists")]
    ValidatorAlreadyExists {},

    #[error("Cannot remove last validator")]
    CannotRemoveLastValidator {},

    #[error("Insufficient funds or allowance provided")]
    InsufficientFundsOrAllowance {},

    #[error("Transfer not allowed or amount exceeds maximum allowed")]
    TransferNotAllowed {},

    #[error("Bridge is locked")]
    BridgeLocked {},

    #[error("Recipient is not a validator")]
    RecipientNotAValidator {},

    #[error("Upgrade not authorized")]
    UpgradeNotAuthorized {},

    #[error("Initializer already executed")]
    AlreadyInitialized {},

    #[error("Invalid public key length")]
    InvalidPubkeyLength {},

    #[error("Unsupported denom provided")]
    UnsupportedDenom {},
}
