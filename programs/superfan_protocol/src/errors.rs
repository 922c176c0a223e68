use anchor_lang::prelude::*;

#[error_code]
pub enum SuperfanError {
    #[msg("Config already initialized")]
    AlreadyInitialized,
    #[msg("Sponsor already registered")]
    AlreadyRegistered,
    #[msg("Market id does not match counter")]
    InvalidSequence,
    #[msg("Timestamps must satisfy trading start < trading end < resolution deadline")]
    InvalidWindow,
    #[msg("Invalid conviction threshold (must be <= 10000 bps)")]
    InvalidThreshold,
    #[msg("Invalid market status for this action")]
    InvalidStatus,
    #[msg("Trading window still open")]
    TooEarly,
    #[msg("Action window has passed")]
    TooLate,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Record not found")]
    NotFound,
    #[msg("Signal commitment already recorded for this market")]
    AlreadyCommitted,
    #[msg("Math overflow")]
    MathOverflow,
}
