#![allow(unexpected_cfgs)]

mod account; pub use account::*;
mod error; pub use error::ErrorCode;
mod access_control; pub use access_control::*;
mod constants; pub use constants::*;
mod events; pub use events::*;
mod ledger; pub use ledger::*;
mod math; pub use math::*;
mod custody; use custody::*;
#[cfg(test)]
mod test_utils;

use {
    anchor_lang::prelude::*,
    anchor_spl::token::{Mint, Token, TokenAccount},
};

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "GSO",
    project_url: "http://dual.finance",
    contacts: "email:dual-labs@dual.finance",
    policy: "https://github.com/Dual-Finance/gso/blob/master/SECURITY.md",

    preferred_languages: "en",
    source_code: "https://github.com/Dual-Finance/gso",
    auditors: "None"
}

declare_id!("9nA5LYkJPVhyTqDVUBssnhB14yAskoBWXwsEpSiNUYg1");

#[program]
pub mod gso {
    use super::*;

    pub fn config(ctx: Context<Configure>, params: ConfigureParams) -> Result<()> {
        msg!("GSO Config {}", params.project_name);

        let keys = ProjectKeys {
            authority: ctx.accounts.authority.key(),
            base_mint: ctx.accounts.base_mint.key(),
            quote_mint: ctx.accounts.quote_mint.key(),
            vault: ctx.accounts.vault.key(),
            claim_mint: ctx.accounts.claim_mint.key(),
        };
        let bumps = ProjectBumps {
            project: ctx.bumps.project,
            authority: ctx.bumps.gso_authority,
            vault: ctx.bumps.vault,
            claim_mint: ctx.bumps.claim_mint,
        };
        let vault_balance = ctx.accounts.vault.amount;
        let claim_supply = ctx.accounts.claim_mint.supply;
        let reconfigured = ctx.accounts.project.open_round(
            &params,
            &keys,
            &bumps,
            ConfigSchema::V1,
            vault_balance,
            claim_supply,
        )?;
        if reconfigured {
            msg!("Reconfigured, previous round was fully unwound");
        }

        msg!("Deposit {} into vault", params.num_tokens_capacity);
        deposit(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.authority_base_account.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.authority.to_account_info(),
            params.num_tokens_capacity,
        )?;

        emit!(ProjectConfigured {
            project: ctx.accounts.project.key(),
            authority: keys.authority,
            schema_version: ctx.accounts.project.schema_version(),
            period_num: ctx.accounts.project.period_num(),
            reconfigured,
            deposited: params.num_tokens_capacity,
            subscription_period_end: params.subscription_period_end,
            lockup_period_end: params.lockup_period_end,
        });

        Ok(())
    }

    // Same effects as config. The round number is part of the address, and the
    // option terms are linked through the staking options state account.
    pub fn config_v2(
        ctx: Context<ConfigureV2>,
        period_num: u64,
        params: ConfigureParams,
    ) -> Result<()> {
        msg!("GSO ConfigV2 {} period {}", params.project_name, period_num);

        let keys = ProjectKeys {
            authority: ctx.accounts.authority.key(),
            base_mint: ctx.accounts.base_mint.key(),
            quote_mint: ctx.accounts.quote_mint.key(),
            vault: ctx.accounts.vault.key(),
            claim_mint: ctx.accounts.claim_mint.key(),
        };
        let bumps = ProjectBumps {
            project: ctx.bumps.project,
            authority: ctx.bumps.gso_authority,
            vault: ctx.bumps.vault,
            claim_mint: ctx.bumps.claim_mint,
        };
        let schema = ConfigSchema::V2 {
            period_num,
            staking_options_state: ctx.accounts.staking_options_state.key(),
        };
        let vault_balance = ctx.accounts.vault.amount;
        let claim_supply = ctx.accounts.claim_mint.supply;
        let reconfigured = ctx.accounts.project.open_round(
            &params,
            &keys,
            &bumps,
            schema,
            vault_balance,
            claim_supply,
        )?;
        if reconfigured {
            msg!("Reconfigured, previous round was fully unwound");
        }

        msg!("Deposit {} into vault", params.num_tokens_capacity);
        deposit(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.authority_base_account.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.authority.to_account_info(),
            params.num_tokens_capacity,
        )?;

        emit!(ProjectConfigured {
            project: ctx.accounts.project.key(),
            authority: keys.authority,
            schema_version: ctx.accounts.project.schema_version(),
            period_num,
            reconfigured,
            deposited: params.num_tokens_capacity,
            subscription_period_end: params.subscription_period_end,
            lockup_period_end: params.lockup_period_end,
        });

        Ok(())
    }

    /// Locks `amount` base tokens and mints the proportional claim tokens.
    /// Returns the number of claim tokens minted.
    #[access_control(subscription_open(&ctx.accounts.project, &ctx.accounts.clock))]
    pub fn stake(ctx: Context<StakeTokens>, amount: u64) -> Result<u64> {
        msg!("GSO Stake {}", amount);
        let project = &ctx.accounts.project;
        let receipt = project.quote_stake(amount)?;
        let project_key = project.key();

        msg!("Lockup tokens");
        deposit(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.staker_base_account.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.staker.to_account_info(),
            receipt.deposited,
        )?;

        msg!("Mint {} claim tokens", receipt.claim_minted);
        mint_claim(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.claim_mint.to_account_info(),
            ctx.accounts.staker_claim_account.to_account_info(),
            ctx.accounts.gso_authority.to_account_info(),
            &project_key,
            project.authority_bump,
            receipt.claim_minted,
        )?;

        emit!(Staked {
            project: project_key,
            staker: ctx.accounts.staker.key(),
            amount,
            claim_minted: receipt.claim_minted,
            timestamp: ctx.accounts.clock.unix_timestamp,
        });

        Ok(receipt.claim_minted)
    }

    /// Burns the claim tokens backing `amount` and returns the collateral.
    /// Staking is liquid, so any holder of the claim tokens may unstake.
    #[access_control(lockup_ended(&ctx.accounts.project, &ctx.accounts.clock))]
    pub fn unstake(ctx: Context<UnstakeTokens>, amount: u64) -> Result<()> {
        msg!("GSO Unstake {}", amount);
        let project = &ctx.accounts.project;
        let receipt = project.quote_unstake(
            amount,
            ctx.accounts.holder_claim_account.amount,
            ctx.accounts.vault.amount,
        )?;
        let project_key = project.key();

        msg!("Burn {} claim tokens", receipt.claim_burned);
        burn_claim(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.claim_mint.to_account_info(),
            ctx.accounts.holder_claim_account.to_account_info(),
            ctx.accounts.holder.to_account_info(),
            receipt.claim_burned,
        )?;

        msg!("Return tokens");
        release(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.holder_base_account.to_account_info(),
            ctx.accounts.gso_authority.to_account_info(),
            &project_key,
            project.authority_bump,
            receipt.released,
        )?;

        emit!(Unstaked {
            project: project_key,
            holder: ctx.accounts.holder.key(),
            amount,
            claim_burned: receipt.claim_burned,
            timestamp: ctx.accounts.clock.unix_timestamp,
        });

        Ok(())
    }

    /// Sends the whole vault balance back to the project authority once
    /// staking has closed. Returns the amount withdrawn.
    #[access_control(subscription_closed(&ctx.accounts.project, &ctx.accounts.clock))]
    pub fn withdraw(ctx: Context<WithdrawVault>) -> Result<u64> {
        msg!("GSO Withdraw");
        let project = &ctx.accounts.project;
        let amount = project.quote_withdraw(&ctx.accounts.authority.key(), ctx.accounts.vault.amount)?;
        let project_key = project.key();

        release(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.authority_base_account.to_account_info(),
            ctx.accounts.gso_authority.to_account_info(),
            &project_key,
            project.authority_bump,
            amount,
        )?;

        emit!(VaultWithdrawn {
            project: project_key,
            authority: ctx.accounts.authority.key(),
            amount,
            timestamp: ctx.accounts.clock.unix_timestamp,
        });

        Ok(amount)
    }
}

#[derive(Accounts)]
#[instruction(params: ConfigureParams)]
pub struct Configure<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + ProjectConfig::SPACE,
        seeds = [PROJECT_SEED, params.project_name.as_bytes()],
        bump,
    )]
    pub project: Box<Account<'info, ProjectConfig>>,
    /// CHECK: PDA signer over the vault and claim mint, holds no data.
    #[account(
        seeds = [GSO_AUTHORITY_SEED, project.key().as_ref()],
        bump,
    )]
    pub gso_authority: UncheckedAccount<'info>,
    pub base_mint: Box<Account<'info, Mint>>,
    pub quote_mint: Box<Account<'info, Mint>>,
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [VAULT_SEED, project.key().as_ref()],
        bump,
        token::mint = base_mint,
        token::authority = gso_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [CLAIM_MINT_SEED, project.key().as_ref()],
        bump,
        mint::decimals = base_mint.decimals,
        mint::authority = gso_authority,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        constraint = authority_base_account.mint == base_mint.key()
        @ ErrorCode::MintMismatch,
        constraint = authority_base_account.owner == authority.key()
        @ ErrorCode::InvalidTokenAccountOwner,
    )]
    pub authority_base_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
#[instruction(period_num: u64, params: ConfigureParams)]
pub struct ConfigureV2<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + ProjectConfig::SPACE,
        seeds = [PROJECT_V2_SEED, &period_num.to_be_bytes(), params.project_name.as_bytes()],
        bump,
    )]
    pub project: Box<Account<'info, ProjectConfig>>,
    /// CHECK: PDA signer over the vault and claim mint, holds no data.
    #[account(
        seeds = [GSO_AUTHORITY_SEED, project.key().as_ref()],
        bump,
    )]
    pub gso_authority: UncheckedAccount<'info>,
    /// CHECK: Owned by the staking options program, only its address is recorded.
    pub staking_options_state: UncheckedAccount<'info>,
    pub base_mint: Box<Account<'info, Mint>>,
    pub quote_mint: Box<Account<'info, Mint>>,
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [VAULT_SEED, project.key().as_ref()],
        bump,
        token::mint = base_mint,
        token::authority = gso_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [CLAIM_MINT_SEED, project.key().as_ref()],
        bump,
        mint::decimals = base_mint.decimals,
        mint::authority = gso_authority,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        constraint = authority_base_account.mint == base_mint.key()
        @ ErrorCode::MintMismatch,
        constraint = authority_base_account.owner == authority.key()
        @ ErrorCode::InvalidTokenAccountOwner,
    )]
    pub authority_base_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct StakeTokens<'info> {
    pub staker: Signer<'info>,
    pub project: Box<Account<'info, ProjectConfig>>,
    /// CHECK: PDA signer, only used for its signature.
    #[account(
        seeds = [GSO_AUTHORITY_SEED, project.key().as_ref()],
        bump = project.authority_bump,
    )]
    pub gso_authority: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [VAULT_SEED, project.key().as_ref()],
        bump = project.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        seeds = [CLAIM_MINT_SEED, project.key().as_ref()],
        bump = project.claim_mint_bump,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        constraint = staker_base_account.mint == project.base_mint
        @ ErrorCode::MintMismatch,
        constraint = staker_base_account.owner == staker.key()
        @ ErrorCode::InvalidTokenAccountOwner,
    )]
    pub staker_base_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = staker_claim_account.mint == claim_mint.key()
        @ ErrorCode::MintMismatch,
    )]
    pub staker_claim_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub clock: Sysvar<'info, Clock>,
}

#[derive(Accounts)]
pub struct UnstakeTokens<'info> {
    pub holder: Signer<'info>,
    pub project: Box<Account<'info, ProjectConfig>>,
    /// CHECK: PDA signer, only used for its signature.
    #[account(
        seeds = [GSO_AUTHORITY_SEED, project.key().as_ref()],
        bump = project.authority_bump,
    )]
    pub gso_authority: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [VAULT_SEED, project.key().as_ref()],
        bump = project.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        seeds = [CLAIM_MINT_SEED, project.key().as_ref()],
        bump = project.claim_mint_bump,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        constraint = holder_base_account.mint == project.base_mint
        @ ErrorCode::MintMismatch,
    )]
    pub holder_base_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = holder_claim_account.mint == claim_mint.key()
        @ ErrorCode::MintMismatch,
        constraint = holder_claim_account.owner == holder.key()
        @ ErrorCode::InvalidTokenAccountOwner,
    )]
    pub holder_claim_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub clock: Sysvar<'info, Clock>,
}

#[derive(Accounts)]
pub struct WithdrawVault<'info> {
    pub authority: Signer<'info>,
    #[account(
        constraint = project.authority == authority.key()
        @ ErrorCode::Unauthorized,
    )]
    pub project: Box<Account<'info, ProjectConfig>>,
    /// CHECK: PDA signer, only used for its signature.
    #[account(
        seeds = [GSO_AUTHORITY_SEED, project.key().as_ref()],
        bump = project.authority_bump,
    )]
    pub gso_authority: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [VAULT_SEED, project.key().as_ref()],
        bump = project.vault_bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = authority_base_account.mint == project.base_mint
        @ ErrorCode::MintMismatch,
    )]
    pub authority_base_account: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub clock: Sysvar<'info, Clock>,
}
