use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::SuperfanError;
use crate::events::{ConfigInitialized, SponsorRegistered};
use crate::state::{Sponsor, SponsorMarketCounter, SuperfanConfig};
use crate::utils::name_hash;
use crate::{InitializeConfig, RegisterSponsor};

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    max_sponsors: u32,
    quote_mint: Pubkey,
    admin: Pubkey,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    write_config(cfg, max_sponsors, quote_mint, admin, ctx.bumps.config)?;

    msg!("superfan config initialized; admin={}", admin);
    emit!(ConfigInitialized {
        config: cfg.key(),
        admin,
        quote_mint,
        max_sponsors,
    });
    Ok(())
}

pub fn register_sponsor(ctx: Context<RegisterSponsor>, name: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sponsor_key = ctx.accounts.sponsor.key();
    let authority = ctx.accounts.authority.key();

    enroll_sponsor(
        &mut ctx.accounts.sponsor,
        &mut ctx.accounts.market_counter,
        sponsor_key,
        authority,
        &name,
        (ctx.bumps.sponsor, ctx.bumps.market_counter),
        now,
    )?;

    msg!("sponsor {} registered for {}", sponsor_key, authority);
    emit!(SponsorRegistered {
        sponsor: sponsor_key,
        authority,
        name_hash: ctx.accounts.sponsor.name_hash,
    });
    Ok(())
}

// -------------------------
// Core (no runtime access)
// -------------------------

/// Writes a fresh config. `admin` is recorded, not checked against the payer.
pub fn write_config(
    cfg: &mut SuperfanConfig,
    max_sponsors: u32,
    quote_mint: Pubkey,
    admin: Pubkey,
    bump: u8,
) -> Result<()> {
    require!(cfg.version == 0, SuperfanError::AlreadyInitialized);

    cfg.admin = admin;
    cfg.quote_mint = quote_mint;
    cfg.max_sponsors = max_sponsors;
    cfg.bump = bump;
    cfg.version = INITIAL_VERSION;
    Ok(())
}

/// Writes the sponsor record and its paired counter together.
///
/// `max_sponsors` is not consulted here.
pub fn enroll_sponsor(
    sponsor: &mut Sponsor,
    counter: &mut SponsorMarketCounter,
    sponsor_key: Pubkey,
    authority: Pubkey,
    name: &str,
    (sponsor_bump, counter_bump): (u8, u8),
    now: i64,
) -> Result<()> {
    require!(sponsor.version == 0, SuperfanError::AlreadyRegistered);

    sponsor.authority = authority;
    sponsor.name_hash = name_hash(name);
    sponsor.registered_at = now;
    sponsor.bump = sponsor_bump;
    sponsor.version = INITIAL_VERSION;

    counter.sponsor = sponsor_key;
    counter.next_market_id = INITIAL_MARKET_ID;
    counter.bump = counter_bump;
    Ok(())
}
