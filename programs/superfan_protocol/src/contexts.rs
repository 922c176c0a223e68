// programs/superfan_protocol/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::{
    Market, ScoutRegistry, SignalCommitment, Sponsor, SponsorMarketCounter, SuperfanConfig,
};

// ----------------------------
// Config + sponsor registry
// ----------------------------

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// A repeat call reaches the handler, which rejects a written config.
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + SuperfanConfig::INIT_SPACE,
        seeds = [crate::CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, SuperfanConfig>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RegisterSponsor<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, SuperfanConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Sponsor::INIT_SPACE,
        seeds = [crate::SPONSOR_SEED, authority.key().as_ref()],
        bump
    )]
    pub sponsor: Account<'info, Sponsor>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + SponsorMarketCounter::INIT_SPACE,
        seeds = [crate::MARKET_COUNTER_SEED, sponsor.key().as_ref()],
        bump
    )]
    pub market_counter: Account<'info, SponsorMarketCounter>,

    pub system_program: Program<'info, System>,
}

// ----------------------------
// Market lifecycle
// ----------------------------

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct CreateMarket<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, SuperfanConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    // seeded by the stored authority; the signer is checked in the handler
    #[account(
        seeds = [crate::SPONSOR_SEED, sponsor.authority.as_ref()],
        bump = sponsor.bump
    )]
    pub sponsor: Account<'info, Sponsor>,

    #[account(
        mut,
        seeds = [crate::MARKET_COUNTER_SEED, sponsor.key().as_ref()],
        bump = market_counter.bump
    )]
    pub market_counter: Account<'info, SponsorMarketCounter>,

    // a replayed id lands on the existing record, which the core rejects
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Market::INIT_SPACE,
        seeds = [
            crate::MARKET_SEED,
            sponsor.key().as_ref(),
            market_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub market: Account<'info, Market>,

    pub system_program: Program<'info, System>,
}

/// Shared by lock / cancel / resolve.
#[derive(Accounts)]
pub struct UpdateMarketStatus<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, SuperfanConfig>,

    pub authority: Signer<'info>,

    #[account(
        seeds = [crate::SPONSOR_SEED, sponsor.authority.as_ref()],
        bump = sponsor.bump
    )]
    pub sponsor: Account<'info, Sponsor>,

    #[account(
        mut,
        seeds = [
            crate::MARKET_SEED,
            sponsor.key().as_ref(),
            market.market_id.to_le_bytes().as_ref()
        ],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,
}

// ----------------------------
// Signal commitments
// ----------------------------

#[derive(Accounts)]
pub struct SubmitSignalCommitment<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, SuperfanConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [crate::SPONSOR_SEED, sponsor.authority.as_ref()],
        bump = sponsor.bump
    )]
    pub sponsor: Account<'info, Sponsor>,

    #[account(
        seeds = [
            crate::MARKET_SEED,
            sponsor.key().as_ref(),
            market.market_id.to_le_bytes().as_ref()
        ],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + SignalCommitment::INIT_SPACE,
        seeds = [crate::SIGNAL_SEED, market.key().as_ref()],
        bump
    )]
    pub signal_commit: Account<'info, SignalCommitment>,

    pub system_program: Program<'info, System>,
}

// ----------------------------
// Scout reputation (admin)
// ----------------------------

#[derive(Accounts)]
pub struct UpdateReputation<'info> {
    #[account(
        seeds = [crate::CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, SuperfanConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: identity only; the scout does not sign.
    pub user: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + ScoutRegistry::INIT_SPACE,
        seeds = [crate::SCOUT_SEED, user.key().as_ref()],
        bump
    )]
    pub scout_registry: Account<'info, ScoutRegistry>,

    pub system_program: Program<'info, System>,
}
