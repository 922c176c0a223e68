use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(not(target_os = "solana"))]
pub mod ledger;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

declare_id!("Cdwbw2aAasToUrUkmnj6UzECZ46wHczLbiKsmir2Xhc7");

#[program]
pub mod superfan_protocol {
    use super::*;
    use crate::instructions::{config, market, reputation, signal};

    // ----------------------------
    // Config + sponsor registry
    // ----------------------------
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        max_sponsors: u32,
        quote_mint: Pubkey,
        admin: Pubkey,
    ) -> Result<()> {
        config::initialize_config(ctx, max_sponsors, quote_mint, admin)
    }

    pub fn register_sponsor(ctx: Context<RegisterSponsor>, name: String) -> Result<()> {
        config::register_sponsor(ctx, name)
    }

    // ----------------------------
    // Market lifecycle
    // ----------------------------
    #[allow(clippy::too_many_arguments)]
    pub fn create_market(
        ctx: Context<CreateMarket>,
        market_id: u64,
        artist_wallet: Pubkey,
        artist_id: String,
        trading_starts_at: i64,
        trading_ends_at: i64,
        resolution_deadline: i64,
        conviction_threshold_bps: u16,
        max_pool_exposure: u64,
        liquidity_pool: Pubkey,
        signal_oracle: Pubkey,
    ) -> Result<()> {
        market::create_market(
            ctx,
            market_id,
            MarketTerms {
                artist_wallet,
                artist_id,
                trading_starts_at,
                trading_ends_at,
                resolution_deadline,
                conviction_threshold_bps,
                max_pool_exposure,
                liquidity_pool,
                signal_oracle,
            },
        )
    }

    pub fn lock_market(ctx: Context<UpdateMarketStatus>) -> Result<()> {
        market::lock_market(ctx)
    }

    pub fn cancel_market(ctx: Context<UpdateMarketStatus>) -> Result<()> {
        market::cancel_market(ctx)
    }

    pub fn resolve_market(ctx: Context<UpdateMarketStatus>, outcome_yes: bool) -> Result<()> {
        market::resolve_market(ctx, outcome_yes)
    }

    // ----------------------------
    // Signals + reputation
    // ----------------------------
    pub fn submit_signal_commitment(
        ctx: Context<SubmitSignalCommitment>,
        commitment_root: [u8; 32],
    ) -> Result<()> {
        signal::submit_signal_commitment(ctx, commitment_root)
    }

    pub fn update_reputation(ctx: Context<UpdateReputation>, delta: i64) -> Result<()> {
        reputation::update_reputation(ctx, delta)
    }
}
