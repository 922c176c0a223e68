use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default)]
pub struct SuperfanConfig {
    pub admin: Pubkey,
    /// Quote asset used for pool exposure accounting. Opaque to this program.
    pub quote_mint: Pubkey,
    /// Informational only; registration does not count against it.
    pub max_sponsors: u32,
    pub bump: u8,
    pub version: u16,
}

#[account]
#[derive(InitSpace, Default)]
pub struct Sponsor {
    pub authority: Pubkey,
    pub name_hash: [u8; 32],
    pub registered_at: i64,
    pub bump: u8,
    pub version: u16,
}

#[account]
#[derive(InitSpace, Default)]
pub struct SponsorMarketCounter {
    /// Address of the owning Sponsor record.
    pub sponsor: Pubkey,
    /// Smallest market id not yet used by this sponsor.
    pub next_market_id: u64,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace)]
pub enum MarketStatus {
    #[default]
    Active,
    Locked,
    Resolved,
    Cancelled,
}

#[account]
#[derive(InitSpace, Default)]
pub struct Market {
    pub sponsor: Pubkey,
    pub market_id: u64,

    pub artist_wallet: Pubkey,
    pub artist_id_hash: [u8; 32],

    // unix seconds, strictly increasing
    pub trading_starts_at: i64,
    pub trading_ends_at: i64,
    pub resolution_deadline: i64,

    // risk parameters, interpreted downstream
    pub conviction_threshold_bps: u16,
    pub max_pool_exposure: u64,

    // external collaborators, stored as-is
    pub liquidity_pool: Pubkey,
    pub signal_oracle: Pubkey,

    pub status: MarketStatus,
    /// Meaningful only once `status == Resolved`.
    pub outcome_yes: bool,

    pub created_at: i64,
    pub resolved_at: i64,
    pub bump: u8,
}

#[account]
#[derive(InitSpace, Default)]
pub struct SignalCommitment {
    pub market: Pubkey,
    /// Root of the off-chain signal set, opaque to this program.
    pub commitment_root: [u8; 32],
    pub recorded_at: i64,
    pub bump: u8,
    pub version: u16,
}

#[account]
#[derive(InitSpace, Default)]
pub struct ScoutRegistry {
    pub user: Pubkey,
    pub score: i64,
    pub bump: u8,
}
