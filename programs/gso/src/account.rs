use anchor_lang::prelude::*;
use solana_program::clock::UnixTimestamp;
use crate::constants::MAX_PROJECT_NAME_LEN;
use crate::error::ErrorCode;

/// Layout-specific part of a project. Everything stake, unstake and withdraw
/// read lives on `ProjectConfig` itself, so both versions share that logic.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSchema {
    V1,
    V2 {
        period_num: u64,
        // Linked by address only, option terms live in that account.
        staking_options_state: Pubkey,
    },
}

impl ConfigSchema {
    pub const SPACE: usize = 1 + 8 + 32;
}

#[account]
#[derive(Debug)]
pub struct ProjectConfig {
    pub project_name: String,
    pub authority: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub vault: Pubkey,
    pub claim_mint: Pubkey,
    pub lockup_ratio_per_million_lots: u64,
    pub lot_size: u64,
    pub subscription_period_end: UnixTimestamp,
    pub lockup_period_end: UnixTimestamp,
    pub option_expiration: UnixTimestamp,
    pub strike_price_per_lot: u64,
    pub num_tokens_capacity: u64,
    pub bump: u8,
    pub authority_bump: u8,
    pub vault_bump: u8,
    pub claim_mint_bump: u8,
    pub schema: ConfigSchema,
}

impl ProjectConfig {
    pub const SPACE: usize = (4 + MAX_PROJECT_NAME_LEN) + 32 * 5 + 8 * 2 + 8 * 3 + 8 * 2 + 4
        + ConfigSchema::SPACE;

    pub fn schema_version(&self) -> u8 {
        match self.schema {
            ConfigSchema::V1 => 1,
            ConfigSchema::V2 { .. } => 2,
        }
    }

    pub fn period_num(&self) -> u64 {
        match self.schema {
            ConfigSchema::V1 => 0,
            ConfigSchema::V2 { period_num, .. } => period_num,
        }
    }

    pub fn staking_options_state(&self) -> Option<Pubkey> {
        match self.schema {
            ConfigSchema::V1 => None,
            ConfigSchema::V2 { staking_options_state, .. } => Some(staking_options_state),
        }
    }

    /// A freshly allocated account is all zeroes, so an unset authority means
    /// no round has been recorded here yet.
    pub fn is_configured(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Checks that `caller` may start a round at this address and reports
    /// whether it replaces an earlier one. The vault and claim mint carry
    /// over between rounds, so both must be empty first.
    pub fn begin_round(
        &self,
        caller: &Pubkey,
        vault_balance: u64,
        claim_supply: u64,
    ) -> Result<bool> {
        if !self.is_configured() {
            return Ok(false);
        }
        require_keys_eq!(self.authority, *caller, ErrorCode::Unauthorized);
        require!(vault_balance == 0, ErrorCode::PriorRoundActive);
        require!(claim_supply == 0, ErrorCode::ClaimsOutstanding);
        Ok(true)
    }

    /// Validates `params` and records a new round. Returns true when an
    /// earlier round at this address was replaced.
    pub fn open_round(
        &mut self,
        params: &ConfigureParams,
        keys: &ProjectKeys,
        bumps: &ProjectBumps,
        schema: ConfigSchema,
        vault_balance: u64,
        claim_supply: u64,
    ) -> Result<bool> {
        params.validate()?;
        let reconfigured = self.begin_round(&keys.authority, vault_balance, claim_supply)?;
        self.record(params, keys, bumps, schema);
        Ok(reconfigured)
    }

    pub fn record(
        &mut self,
        params: &ConfigureParams,
        keys: &ProjectKeys,
        bumps: &ProjectBumps,
        schema: ConfigSchema,
    ) {
        self.project_name = params.project_name.clone();
        self.authority = keys.authority;
        self.base_mint = keys.base_mint;
        self.quote_mint = keys.quote_mint;
        self.vault = keys.vault;
        self.claim_mint = keys.claim_mint;
        self.lockup_ratio_per_million_lots = params.lockup_ratio_per_million_lots;
        self.lot_size = params.lot_size;
        self.subscription_period_end = params.subscription_period_end;
        self.lockup_period_end = params.lockup_period_end;
        self.option_expiration = params.option_expiration;
        self.strike_price_per_lot = params.strike_price_per_lot;
        self.num_tokens_capacity = params.num_tokens_capacity;
        self.bump = bumps.project;
        self.authority_bump = bumps.authority;
        self.vault_bump = bumps.vault;
        self.claim_mint_bump = bumps.claim_mint;
        self.schema = schema;
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ConfigureParams {
    pub project_name: String,
    pub lockup_ratio_per_million_lots: u64,
    pub lot_size: u64,
    pub subscription_period_end: UnixTimestamp,
    pub lockup_period_end: UnixTimestamp,
    pub option_expiration: UnixTimestamp,
    pub strike_price_per_lot: u64,
    /// Collateral the authority deposits into the vault at configure time.
    pub num_tokens_capacity: u64,
}

impl ConfigureParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.project_name.is_empty() && self.project_name.len() <= MAX_PROJECT_NAME_LEN,
            ErrorCode::InvalidProjectName
        );
        require!(
            self.subscription_period_end >= 0
                && self.lockup_period_end >= 0
                && self.option_expiration >= 0,
            ErrorCode::InvalidTimestamp
        );
        // Equal ends are legal, the locked phase then has zero width.
        require!(
            self.subscription_period_end <= self.lockup_period_end,
            ErrorCode::InvalidPeriodOrdering
        );
        require!(self.lot_size > 0, ErrorCode::InvalidAmount);
        // A zero ratio mints nothing, so staked collateral could never be unstaked.
        require!(self.lockup_ratio_per_million_lots > 0, ErrorCode::InvalidAmount);
        require!(self.num_tokens_capacity > 0, ErrorCode::InvalidAmount);
        Ok(())
    }
}

pub struct ProjectKeys {
    pub authority: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub vault: Pubkey,
    pub claim_mint: Pubkey,
}

pub struct ProjectBumps {
    pub project: u8,
    pub authority: u8,
    pub vault: u8,
    pub claim_mint: u8,
}
