use anchor_lang::prelude::*;

use crate::constants::*;

// -------------------------
// Address derivation
// -------------------------

/// Derives the program address for `namespace` followed by `parts`, in order.
///
/// Pure and total: the same inputs always yield the same `(address, bump)`.
pub fn derive_address(namespace: &[u8], parts: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8) {
    let mut seeds: Vec<&[u8]> = Vec::with_capacity(parts.len() + 1);
    seeds.push(namespace);
    seeds.extend_from_slice(parts);
    Pubkey::find_program_address(&seeds, program_id)
}

pub fn config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    derive_address(CONFIG_SEED, &[], program_id)
}

pub fn sponsor_pda(authority: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    derive_address(SPONSOR_SEED, &[authority.as_ref()], program_id)
}

pub fn market_counter_pda(sponsor: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    derive_address(MARKET_COUNTER_SEED, &[sponsor.as_ref()], program_id)
}

pub fn market_pda(sponsor: &Pubkey, market_id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    derive_address(
        MARKET_SEED,
        &[sponsor.as_ref(), market_id.to_le_bytes().as_ref()],
        program_id,
    )
}

pub fn signal_pda(market: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    derive_address(SIGNAL_SEED, &[market.as_ref()], program_id)
}

pub fn scout_pda(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    derive_address(SCOUT_SEED, &[user.as_ref()], program_id)
}

// -------------------------
// Name digest
// -------------------------

/// UTF-8 bytes of `name`, truncated or zero-padded to 32 bytes.
///
/// Not a hash: names sharing a 32-byte prefix collide, and clients depend on
/// this exact layout.
pub fn name_hash(name: &str) -> [u8; NAME_HASH_LEN] {
    let mut out = [0u8; NAME_HASH_LEN];
    let bytes = name.as_bytes();
    let n = bytes.len().min(NAME_HASH_LEN);
    out[..n].copy_from_slice(&bytes[..n]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_address_is_deterministic() {
        let program_id = crate::ID;
        let authority = Pubkey::new_unique();

        let a = sponsor_pda(&authority, &program_id);
        let b = sponsor_pda(&authority, &program_id);
        assert_eq!(a, b);

        let manual = Pubkey::find_program_address(&[b"sponsor", authority.as_ref()], &program_id);
        assert_eq!(a, manual);
    }

    #[test]
    fn market_pda_matches_client_layout() {
        let program_id = crate::ID;
        let sponsor = Pubkey::new_unique();
        let id: u64 = 7;

        let expected = Pubkey::find_program_address(
            &[b"market", sponsor.as_ref(), &id.to_le_bytes()],
            &program_id,
        );
        assert_eq!(market_pda(&sponsor, id, &program_id), expected);
    }

    #[test]
    fn namespaces_do_not_alias() {
        let program_id = crate::ID;
        let key = Pubkey::new_unique();

        let sponsor = sponsor_pda(&key, &program_id).0;
        let counter = market_counter_pda(&key, &program_id).0;
        assert_ne!(sponsor, counter);
        assert_ne!(sponsor, config_pda(&program_id).0);
        assert_ne!(signal_pda(&key, &program_id).0, scout_pda(&key, &program_id).0);
    }

    #[test]
    fn market_addresses_never_alias() {
        let program_id = crate::ID;
        let s1 = Pubkey::new_unique();
        let s2 = Pubkey::new_unique();

        let mut seen = std::collections::HashSet::new();
        for sponsor in [s1, s2] {
            for id in 0..16u64 {
                assert!(seen.insert(market_pda(&sponsor, id, &program_id).0));
            }
        }
    }

    #[test]
    fn name_hash_empty_is_zeroed() {
        assert_eq!(name_hash(""), [0u8; 32]);
    }

    #[test]
    fn name_hash_pads_short_names() {
        let h = name_hash("Test Label");
        assert_eq!(&h[..10], b"Test Label");
        assert!(h[10..].iter().all(|b| *b == 0));
    }

    #[test]
    fn name_hash_truncates_long_names() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789-suffix";
        let h = name_hash(long);
        assert_eq!(&h[..], &long.as_bytes()[..32]);

        // exactly 32 bytes is kept verbatim
        let exact = "0123456789abcdef0123456789abcdef";
        assert_eq!(&name_hash(exact)[..], exact.as_bytes());
    }

    #[test]
    fn name_hash_shared_prefix_collides() {
        let a = "artist-0000000000000000000000000-a";
        let b = "artist-0000000000000000000000000-b";
        assert_eq!(name_hash(a), name_hash(b));
    }

    #[test]
    fn name_hash_uses_utf8_bytes() {
        let h = name_hash("é");
        assert_eq!(&h[..2], &[0xc3, 0xa9]);
        assert_eq!(h[2], 0);
    }
}
