use anchor_lang::prelude::*;
use crate::account::*;
use crate::error::ErrorCode;
use crate::math::to_exact_claim_amount;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakeReceipt {
    pub deposited: u64,
    pub claim_minted: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnstakeReceipt {
    pub claim_burned: u64,
    pub released: u64,
}

/// Balance checks for stake, unstake and withdraw. Phase checks happen in
/// the access-control guards; everything here runs before the first CPI.
///
/// Stake and unstake only accept amounts with no rounding remainder, so the
/// claim supply is always exactly `staked_lots * ratio / 1_000_000` and no
/// sequence of unstakes releases more collateral than its claims were minted for.
impl ProjectConfig {
    pub fn claim_amount(&self, amount: u64) -> Result<u64> {
        to_exact_claim_amount(amount, self.lot_size, self.lockup_ratio_per_million_lots)
    }

    pub fn quote_stake(&self, amount: u64) -> Result<StakeReceipt> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        let claim_minted = self.claim_amount(amount)?;

        Ok(StakeReceipt { deposited: amount, claim_minted })
    }

    pub fn quote_unstake(
        &self,
        amount: u64,
        claim_balance: u64,
        vault_balance: u64,
    ) -> Result<UnstakeReceipt> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        let claim_burned = self.claim_amount(amount)?;
        require!(claim_balance >= claim_burned, ErrorCode::InsufficientClaimBalance);
        require!(vault_balance >= amount, ErrorCode::InsufficientVaultBalance);

        Ok(UnstakeReceipt { claim_burned, released: amount })
    }

    pub fn quote_withdraw(&self, caller: &Pubkey, vault_balance: u64) -> Result<u64> {
        require_keys_eq!(*caller, self.authority, ErrorCode::Unauthorized);
        require!(vault_balance > 0, ErrorCode::NothingToWithdraw);
        Ok(vault_balance)
    }
}
