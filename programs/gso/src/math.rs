use anchor_lang::prelude::*;
use crate::constants::RATIO_DENOMINATOR;
use crate::error::ErrorCode;

/// Claim tokens owed for `stake_amount` base atoms.
///
/// `floor(floor(stake_amount / lot_size) * ratio / 1_000_000)`, evaluated in
/// u128 so tokens that use every bit of a u64 supply do not lose precision.
/// Stake and unstake both go through here, in this exact order of rounding.
pub fn to_claim_amount(stake_amount: u64, lot_size: u64, ratio: u64) -> Result<u64> {
    if lot_size == 0 {
        return err!(ErrorCode::InvalidAmount);
    }

    let lots = (stake_amount / lot_size) as u128;
    let claim = lots
        .checked_mul(ratio as u128)
        .ok_or(ErrorCode::ArithmeticOverflow)?
        .checked_div(RATIO_DENOMINATOR)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    u64::try_from(claim).map_err(|_| error!(ErrorCode::ArithmeticOverflow))
}

/// Like [`to_claim_amount`], but fails with `InexactAmount` unless both
/// divisions are exact. Every claim token then stands for the same number of
/// base atoms, so splitting an amount can neither gain nor lose collateral.
pub fn to_exact_claim_amount(amount: u64, lot_size: u64, ratio: u64) -> Result<u64> {
    let claim = to_claim_amount(amount, lot_size, ratio)?;
    let scaled = ((amount / lot_size) as u128) * (ratio as u128);
    require!(
        amount % lot_size == 0 && scaled % RATIO_DENOMINATOR == 0,
        ErrorCode::InexactAmount
    );
    Ok(claim)
}
