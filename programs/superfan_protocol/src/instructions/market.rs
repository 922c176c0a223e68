use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::SuperfanError;
use crate::events::{MarketCancelled, MarketCreated, MarketLocked, MarketResolved};
use crate::state::{Market, MarketStatus, Sponsor, SponsorMarketCounter};
use crate::utils::name_hash;
use crate::{CreateMarket, UpdateMarketStatus};

/// Caller-supplied market parameters, as passed to `create_market`.
#[derive(Clone, Debug)]
pub struct MarketTerms {
    pub artist_wallet: Pubkey,
    pub artist_id: String,
    pub trading_starts_at: i64,
    pub trading_ends_at: i64,
    pub resolution_deadline: i64,
    pub conviction_threshold_bps: u16,
    pub max_pool_exposure: u64,
    pub liquidity_pool: Pubkey,
    pub signal_oracle: Pubkey,
}

pub fn create_market(
    ctx: Context<CreateMarket>,
    market_id: u64,
    terms: MarketTerms,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sponsor_key = ctx.accounts.sponsor.key();

    open_market(
        &mut ctx.accounts.market,
        &mut ctx.accounts.market_counter,
        &ctx.accounts.sponsor,
        sponsor_key,
        ctx.accounts.authority.key(),
        market_id,
        &terms,
        ctx.bumps.market,
        now,
    )?;

    let market_key = ctx.accounts.market.key();
    msg!("market {} created: sponsor={} id={}", market_key, sponsor_key, market_id);
    emit!(MarketCreated {
        market: market_key,
        sponsor: sponsor_key,
        market_id,
        trading_starts_at: terms.trading_starts_at,
        trading_ends_at: terms.trading_ends_at,
        resolution_deadline: terms.resolution_deadline,
    });
    Ok(())
}

pub fn lock_market(ctx: Context<UpdateMarketStatus>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sponsor_key = ctx.accounts.sponsor.key();

    apply_lock(
        &mut ctx.accounts.market,
        &ctx.accounts.sponsor,
        sponsor_key,
        ctx.accounts.authority.key(),
        now,
    )?;

    emit!(MarketLocked {
        market: ctx.accounts.market.key(),
        sponsor: sponsor_key,
        locked_at: now,
    });
    Ok(())
}

pub fn cancel_market(ctx: Context<UpdateMarketStatus>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sponsor_key = ctx.accounts.sponsor.key();

    apply_cancel(
        &mut ctx.accounts.market,
        &ctx.accounts.sponsor,
        sponsor_key,
        ctx.accounts.authority.key(),
        now,
    )?;

    emit!(MarketCancelled {
        market: ctx.accounts.market.key(),
        sponsor: sponsor_key,
        cancelled_at: now,
    });
    Ok(())
}

pub fn resolve_market(ctx: Context<UpdateMarketStatus>, outcome_yes: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sponsor_key = ctx.accounts.sponsor.key();

    apply_resolve(
        &mut ctx.accounts.market,
        &ctx.accounts.sponsor,
        sponsor_key,
        ctx.accounts.authority.key(),
        outcome_yes,
        now,
    )?;

    msg!("market {} resolved: yes={}", ctx.accounts.market.key(), outcome_yes);
    emit!(MarketResolved {
        market: ctx.accounts.market.key(),
        sponsor: sponsor_key,
        outcome_yes,
        resolved_at: now,
    });
    Ok(())
}

// -------------------------
// Core (no runtime access)
// -------------------------
//
// Every function below validates first and writes last, so an Err leaves
// the records exactly as they were passed in.

pub fn validate_window(starts_at: i64, ends_at: i64, resolution_deadline: i64) -> Result<()> {
    require!(
        starts_at < ends_at && ends_at < resolution_deadline,
        SuperfanError::InvalidWindow
    );
    Ok(())
}

pub fn validate_threshold(bps: u16) -> Result<()> {
    require!(bps <= MAX_BPS, SuperfanError::InvalidThreshold);
    Ok(())
}

fn require_sponsor_authority(sponsor: &Sponsor, caller: Pubkey) -> Result<()> {
    require_keys_eq!(sponsor.authority, caller, SuperfanError::Unauthorized);
    Ok(())
}

pub(crate) fn require_owned_by(
    market: &Market,
    sponsor: &Sponsor,
    sponsor_key: Pubkey,
    caller: Pubkey,
) -> Result<()> {
    require_sponsor_authority(sponsor, caller)?;
    require_keys_eq!(market.sponsor, sponsor_key, SuperfanError::Unauthorized);
    Ok(())
}

/// Consumes `counter.next_market_id` and writes a new Active market.
///
/// `market` may already hold a record when a stale id is replayed; the
/// sequence check rejects it before any field is written.
#[allow(clippy::too_many_arguments)]
pub fn open_market(
    market: &mut Market,
    counter: &mut SponsorMarketCounter,
    sponsor: &Sponsor,
    sponsor_key: Pubkey,
    caller: Pubkey,
    market_id: u64,
    terms: &MarketTerms,
    bump: u8,
    now: i64,
) -> Result<()> {
    require_sponsor_authority(sponsor, caller)?;
    require_keys_eq!(counter.sponsor, sponsor_key, SuperfanError::Unauthorized);

    validate_window(
        terms.trading_starts_at,
        terms.trading_ends_at,
        terms.resolution_deadline,
    )?;
    validate_threshold(terms.conviction_threshold_bps)?;

    require!(market_id == counter.next_market_id, SuperfanError::InvalidSequence);
    let next = counter
        .next_market_id
        .checked_add(1)
        .ok_or(SuperfanError::MathOverflow)?;

    market.sponsor = sponsor_key;
    market.market_id = market_id;
    market.artist_wallet = terms.artist_wallet;
    market.artist_id_hash = name_hash(&terms.artist_id);
    market.trading_starts_at = terms.trading_starts_at;
    market.trading_ends_at = terms.trading_ends_at;
    market.resolution_deadline = terms.resolution_deadline;
    market.conviction_threshold_bps = terms.conviction_threshold_bps;
    market.max_pool_exposure = terms.max_pool_exposure;
    market.liquidity_pool = terms.liquidity_pool;
    market.signal_oracle = terms.signal_oracle;
    market.status = MarketStatus::Active;
    market.outcome_yes = false;
    market.created_at = now;
    market.resolved_at = 0;
    market.bump = bump;

    counter.next_market_id = next;
    Ok(())
}

/// Active -> Locked, once the trading window has fully elapsed.
pub fn apply_lock(
    market: &mut Market,
    sponsor: &Sponsor,
    sponsor_key: Pubkey,
    caller: Pubkey,
    now: i64,
) -> Result<()> {
    require_owned_by(market, sponsor, sponsor_key, caller)?;
    require!(market.status == MarketStatus::Active, SuperfanError::InvalidStatus);
    require!(now >= market.trading_ends_at, SuperfanError::TooEarly);

    market.status = MarketStatus::Locked;
    Ok(())
}

/// Active -> Cancelled, only before trading starts.
pub fn apply_cancel(
    market: &mut Market,
    sponsor: &Sponsor,
    sponsor_key: Pubkey,
    caller: Pubkey,
    now: i64,
) -> Result<()> {
    require_owned_by(market, sponsor, sponsor_key, caller)?;
    require!(market.status == MarketStatus::Active, SuperfanError::InvalidStatus);
    require!(now < market.trading_starts_at, SuperfanError::TooLate);

    market.status = MarketStatus::Cancelled;
    Ok(())
}

/// Locked -> Resolved.
///
/// With the `resolution-deadline` feature, resolving after
/// `resolution_deadline` is rejected with TooLate.
pub fn apply_resolve(
    market: &mut Market,
    sponsor: &Sponsor,
    sponsor_key: Pubkey,
    caller: Pubkey,
    outcome_yes: bool,
    now: i64,
) -> Result<()> {
    require_owned_by(market, sponsor, sponsor_key, caller)?;
    require!(market.status == MarketStatus::Locked, SuperfanError::InvalidStatus);
    #[cfg(feature = "resolution-deadline")]
    require!(now <= market.resolution_deadline, SuperfanError::TooLate);

    market.status = MarketStatus::Resolved;
    market.outcome_yes = outcome_yes;
    market.resolved_at = now;
    Ok(())
}
