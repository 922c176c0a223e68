// Record namespaces
// =================
//
// Byte-compatible with the TypeScript client; changing any of these moves
// every derived address.

pub const CONFIG_SEED: &[u8] = b"superfan_config";
pub const SPONSOR_SEED: &[u8] = b"sponsor";
pub const MARKET_COUNTER_SEED: &[u8] = b"market_counter";
pub const MARKET_SEED: &[u8] = b"market";
pub const SIGNAL_SEED: &[u8] = b"signal";
pub const SCOUT_SEED: &[u8] = b"scout";

// Market parameters
// =================

/// Upper bound for `conviction_threshold_bps` (100%).
pub const MAX_BPS: u16 = 10_000;

/// Fixed width of the name / artist-id digests.
pub const NAME_HASH_LEN: usize = 32;

// Record versions & counters
// ==========================

/// Written into Config, Sponsor and SignalCommitment on first creation. Zero marks a slot
/// allocated by `init_if_needed` that has not been written yet.
pub const INITIAL_VERSION: u16 = 1;

/// First sequence number handed out by a fresh market counter.
pub const INITIAL_MARKET_ID: u64 = 0;
