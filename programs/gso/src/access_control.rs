use anchor_lang::prelude::*;
use solana_program::clock::UnixTimestamp;
use crate::account::*;
use crate::error::ErrorCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Subscription window, stakes accepted.
    Open,
    /// Subscription closed, lockup running. Nothing moves in or out.
    Locked,
    /// Lockup over, claim holders may unstake.
    Unlocked,
}

pub fn phase(now: UnixTimestamp, project: &ProjectConfig) -> Phase {
    if now < project.subscription_period_end {
        Phase::Open
    } else if now < project.lockup_period_end {
        Phase::Locked
    } else {
        Phase::Unlocked
    }
}

pub fn subscription_open(project: &ProjectConfig, clock: &Clock) -> Result<()> {
    if phase(clock.unix_timestamp, project) != Phase::Open {
        return err!(ErrorCode::SubscriptionClosed);
    }
    Ok(())
}

pub fn lockup_ended(project: &ProjectConfig, clock: &Clock) -> Result<()> {
    let now = clock.unix_timestamp;
    if phase(now, project) != Phase::Unlocked {
        msg!("Now {} Lockup end {}", now, project.lockup_period_end);
        return err!(ErrorCode::StillLocked);
    }
    Ok(())
}

pub fn subscription_closed(project: &ProjectConfig, clock: &Clock) -> Result<()> {
    if phase(clock.unix_timestamp, project) == Phase::Open {
        return err!(ErrorCode::SubscriptionStillOpen);
    }
    Ok(())
}
