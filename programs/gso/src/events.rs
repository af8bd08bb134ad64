use anchor_lang::prelude::*;

#[event]
pub struct ProjectConfigured {
    pub project: Pubkey,
    pub authority: Pubkey,
    pub schema_version: u8,
    pub period_num: u64,
    /// True when an earlier, fully drained round at this address was replaced.
    pub reconfigured: bool,
    pub deposited: u64,
    pub subscription_period_end: i64,
    pub lockup_period_end: i64,
}

#[event]
pub struct Staked {
    pub project: Pubkey,
    pub staker: Pubkey,
    pub amount: u64,
    pub claim_minted: u64,
    pub timestamp: i64,
}

#[event]
pub struct Unstaked {
    pub project: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub claim_burned: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultWithdrawn {
    pub project: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
