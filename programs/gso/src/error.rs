use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Lockup end cannot be before subscription period end")]
    InvalidPeriodOrdering,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Stake or unstake amount is zero")]
    ZeroAmount,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Subscription period has ended")]
    SubscriptionClosed,
    #[msg("Attempted to unstake before the lockup period ended")]
    StillLocked,
    #[msg("Not enough claim tokens to cover the burn")]
    InsufficientClaimBalance,
    #[msg("Signer is not the project authority")]
    Unauthorized,
    #[msg("Vault is empty")]
    NothingToWithdraw,
    #[msg("Timestamps must be non-negative")]
    InvalidTimestamp,
    #[msg("Project name must be 1 to 32 bytes")]
    InvalidProjectName,
    #[msg("Previous round still holds tokens in the vault")]
    PriorRoundActive,
    #[msg("Subscription period is still open")]
    SubscriptionStillOpen,
    #[msg("Amount does not convert to a whole number of claim tokens")]
    InexactAmount,
    #[msg("Vault balance is lower than the requested amount")]
    InsufficientVaultBalance,
    #[msg("Token account mint does not match the project")]
    MintMismatch,
    #[msg("Token account is not owned by the signer")]
    InvalidTokenAccountOwner,
    #[msg("Claim tokens from the previous round are still outstanding")]
    ClaimsOutstanding,
}
