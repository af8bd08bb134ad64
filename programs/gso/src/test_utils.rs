use anchor_lang::prelude::*;
use crate::account::*;
use crate::error::ErrorCode;

pub fn code_of(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        other => panic!("expected a program error, got {:?}", other),
    }
}

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(code_of(err), u32::from(expected), "expected {:?}", expected),
    }
}

pub fn clock_at(now: i64) -> Clock {
    Clock { unix_timestamp: now, ..Clock::default() }
}

pub fn params(subscription_period_end: i64, lockup_period_end: i64) -> ConfigureParams {
    ConfigureParams {
        project_name: "TEST".to_string(),
        lockup_ratio_per_million_lots: 200_000,
        lot_size: 1,
        subscription_period_end,
        lockup_period_end,
        option_expiration: lockup_period_end,
        strike_price_per_lot: 50_000,
        num_tokens_capacity: 1_000_000,
    }
}

pub fn keys() -> ProjectKeys {
    ProjectKeys {
        authority: Pubkey::new_unique(),
        base_mint: Pubkey::new_unique(),
        quote_mint: Pubkey::new_unique(),
        vault: Pubkey::new_unique(),
        claim_mint: Pubkey::new_unique(),
    }
}

pub fn unconfigured_project() -> ProjectConfig {
    ProjectConfig {
        project_name: String::new(),
        authority: Pubkey::default(),
        base_mint: Pubkey::default(),
        quote_mint: Pubkey::default(),
        vault: Pubkey::default(),
        claim_mint: Pubkey::default(),
        lockup_ratio_per_million_lots: 0,
        lot_size: 0,
        subscription_period_end: 0,
        lockup_period_end: 0,
        option_expiration: 0,
        strike_price_per_lot: 0,
        num_tokens_capacity: 0,
        bump: 0,
        authority_bump: 0,
        vault_bump: 0,
        claim_mint_bump: 0,
        schema: ConfigSchema::V1,
    }
}

/// A V1 project with 200_000 claims per million lots and a lot size of 1.
pub fn project(subscription_period_end: i64, lockup_period_end: i64) -> ProjectConfig {
    let mut project = unconfigured_project();
    project.record(
        &params(subscription_period_end, lockup_period_end),
        &keys(),
        &ProjectBumps { project: 255, authority: 255, vault: 255, claim_mint: 255 },
        ConfigSchema::V1,
    );
    project
}
