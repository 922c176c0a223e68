use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub config: Pubkey,
    pub admin: Pubkey,
    pub quote_mint: Pubkey,
    pub max_sponsors: u32,
}

#[event]
pub struct SponsorRegistered {
    pub sponsor: Pubkey,
    pub authority: Pubkey,
    pub name_hash: [u8; 32],
}

#[event]
pub struct MarketCreated {
    pub market: Pubkey,
    pub sponsor: Pubkey,
    pub market_id: u64,
    pub trading_starts_at: i64,
    pub trading_ends_at: i64,
    pub resolution_deadline: i64,
}

#[event]
pub struct MarketLocked {
    pub market: Pubkey,
    pub sponsor: Pubkey,
    pub locked_at: i64,
}

#[event]
pub struct MarketCancelled {
    pub market: Pubkey,
    pub sponsor: Pubkey,
    pub cancelled_at: i64,
}

#[event]
pub struct MarketResolved {
    pub market: Pubkey,
    pub sponsor: Pubkey,
    pub outcome_yes: bool,
    pub resolved_at: i64,
}

#[event]
pub struct SignalCommitted {
    pub market: Pubkey,
    pub commitment_root: [u8; 32],
    pub recorded_at: i64,
}

#[event]
pub struct ReputationUpdated {
    pub user: Pubkey,
    pub new_score: i64,
}
