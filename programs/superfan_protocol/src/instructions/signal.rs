use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::SuperfanError;
use crate::events::SignalCommitted;
use crate::instructions::market::require_owned_by;
use crate::state::{Market, SignalCommitment, Sponsor};
use crate::SubmitSignalCommitment;

pub fn submit_signal_commitment(
    ctx: Context<SubmitSignalCommitment>,
    commitment_root: [u8; 32],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let market_key = ctx.accounts.market.key();

    record_signal(
        &mut ctx.accounts.signal_commit,
        &ctx.accounts.market,
        market_key,
        &ctx.accounts.sponsor,
        ctx.accounts.sponsor.key(),
        ctx.accounts.authority.key(),
        commitment_root,
        ctx.bumps.signal_commit,
        now,
    )?;

    emit!(SignalCommitted {
        market: market_key,
        commitment_root,
        recorded_at: now,
    });
    Ok(())
}

/// One commitment per market, written by the owning sponsor.
#[allow(clippy::too_many_arguments)]
pub fn record_signal(
    commit: &mut SignalCommitment,
    market: &Market,
    market_key: Pubkey,
    sponsor: &Sponsor,
    sponsor_key: Pubkey,
    caller: Pubkey,
    commitment_root: [u8; 32],
    bump: u8,
    now: i64,
) -> Result<()> {
    require_owned_by(market, sponsor, sponsor_key, caller)?;
    require!(commit.version == 0, SuperfanError::AlreadyCommitted);

    commit.market = market_key;
    commit.commitment_root = commitment_root;
    commit.recorded_at = now;
    commit.bump = bump;
    commit.version = INITIAL_VERSION;
    Ok(())
}
