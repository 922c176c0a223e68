//! Off-chain record store.
//!
//! Mirrors what the runtime does for the program: records live at derived
//! addresses, each operation runs the same core functions as the on-chain
//! handlers against working copies, and the copies are written back only
//! when the whole operation succeeds.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::SuperfanError;
use crate::instructions::config::{enroll_sponsor, write_config};
use crate::instructions::market::{
    apply_cancel, apply_lock, apply_resolve, open_market, MarketTerms,
};
use crate::instructions::reputation::apply_reputation_delta;
use crate::instructions::signal::record_signal;
use crate::state::{
    Market, ScoutRegistry, SignalCommitment, Sponsor, SponsorMarketCounter, SuperfanConfig,
};
use crate::utils::{
    config_pda, market_counter_pda, market_pda, scout_pda, signal_pda, sponsor_pda,
};

#[derive(Clone)]
pub enum Record {
    Config(SuperfanConfig),
    Sponsor(Sponsor),
    MarketCounter(SponsorMarketCounter),
    Market(Market),
    SignalCommitment(SignalCommitment),
    ScoutRegistry(ScoutRegistry),
}

/// Addresses written by a successful `register_sponsor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SponsorAddresses {
    pub sponsor: Pubkey,
    pub market_counter: Pubkey,
}

pub struct Ledger {
    program_id: Pubkey,
    records: BTreeMap<Pubkey, Record>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(crate::ID)
    }
}

impl Ledger {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            records: BTreeMap::new(),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, address: &Pubkey) -> bool {
        self.records.contains_key(address)
    }

    // -----------------
    // Lookups
    // -----------------

    pub fn config(&self) -> Option<&SuperfanConfig> {
        match self.records.get(&config_pda(&self.program_id).0) {
            Some(Record::Config(c)) => Some(c),
            _ => None,
        }
    }

    pub fn sponsor(&self, address: &Pubkey) -> Option<&Sponsor> {
        match self.records.get(address) {
            Some(Record::Sponsor(s)) => Some(s),
            _ => None,
        }
    }

    pub fn market_counter(&self, address: &Pubkey) -> Option<&SponsorMarketCounter> {
        match self.records.get(address) {
            Some(Record::MarketCounter(c)) => Some(c),
            _ => None,
        }
    }

    pub fn market(&self, address: &Pubkey) -> Option<&Market> {
        match self.records.get(address) {
            Some(Record::Market(m)) => Some(m),
            _ => None,
        }
    }

    pub fn signal_commitment(&self, address: &Pubkey) -> Option<&SignalCommitment> {
        match self.records.get(address) {
            Some(Record::SignalCommitment(c)) => Some(c),
            _ => None,
        }
    }

    pub fn scout_registry(&self, address: &Pubkey) -> Option<&ScoutRegistry> {
        match self.records.get(address) {
            Some(Record::ScoutRegistry(r)) => Some(r),
            _ => None,
        }
    }

    /// Markets of `sponsor` in id order, with their addresses.
    pub fn markets_of(&self, sponsor: &Pubkey) -> Vec<(Pubkey, &Market)> {
        let mut out: Vec<(Pubkey, &Market)> = self
            .records
            .iter()
            .filter_map(|(k, r)| match r {
                Record::Market(m) if m.sponsor == *sponsor => Some((*k, m)),
                _ => None,
            })
            .collect();
        out.sort_by_key(|(_, m)| m.market_id);
        out
    }

    fn load_sponsor(&self, address: &Pubkey) -> Result<Sponsor> {
        self.sponsor(address).cloned().ok_or_else(|| error!(SuperfanError::NotFound))
    }

    fn load_counter(&self, address: &Pubkey) -> Result<SponsorMarketCounter> {
        self.market_counter(address)
            .cloned()
            .ok_or_else(|| error!(SuperfanError::NotFound))
    }

    fn load_market(&self, address: &Pubkey) -> Result<Market> {
        self.market(address).cloned().ok_or_else(|| error!(SuperfanError::NotFound))
    }

    fn require_config(&self) -> Result<()> {
        require!(self.config().is_some(), SuperfanError::NotFound);
        Ok(())
    }

    // -----------------
    // Operations
    // -----------------

    pub fn initialize_config(
        &mut self,
        max_sponsors: u32,
        quote_mint: Pubkey,
        admin: Pubkey,
    ) -> Result<Pubkey> {
        let (address, bump) = config_pda(&self.program_id);
        let mut cfg = self.config().cloned().unwrap_or_default();

        write_config(&mut cfg, max_sponsors, quote_mint, admin, bump)?;

        self.records.insert(address, Record::Config(cfg));
        Ok(address)
    }

    pub fn register_sponsor(
        &mut self,
        authority: Pubkey,
        name: &str,
        now: i64,
    ) -> Result<SponsorAddresses> {
        self.require_config()?;

        let (sponsor_key, sponsor_bump) = sponsor_pda(&authority, &self.program_id);
        let (counter_key, counter_bump) = market_counter_pda(&sponsor_key, &self.program_id);

        let mut sponsor = self.sponsor(&sponsor_key).cloned().unwrap_or_default();
        let mut counter = self.market_counter(&counter_key).cloned().unwrap_or_default();

        enroll_sponsor(
            &mut sponsor,
            &mut counter,
            sponsor_key,
            authority,
            name,
            (sponsor_bump, counter_bump),
            now,
        )?;

        self.records.insert(sponsor_key, Record::Sponsor(sponsor));
        self.records.insert(counter_key, Record::MarketCounter(counter));
        Ok(SponsorAddresses {
            sponsor: sponsor_key,
            market_counter: counter_key,
        })
    }

    /// `authority` is both the signer and the key used to locate the sponsor.
    pub fn create_market(
        &mut self,
        authority: Pubkey,
        market_id: u64,
        terms: &MarketTerms,
        now: i64,
    ) -> Result<Pubkey> {
        self.require_config()?;

        let sponsor_key = sponsor_pda(&authority, &self.program_id).0;
        let sponsor = self.load_sponsor(&sponsor_key)?;
        let counter_key = market_counter_pda(&sponsor_key, &self.program_id).0;
        let mut counter = self.load_counter(&counter_key)?;

        let (market_key, bump) = market_pda(&sponsor_key, market_id, &self.program_id);
        // like init_if_needed: a replayed id hands the existing record to the core
        let mut market = self.market(&market_key).cloned().unwrap_or_default();
        open_market(
            &mut market,
            &mut counter,
            &sponsor,
            sponsor_key,
            authority,
            market_id,
            terms,
            bump,
            now,
        )?;

        self.records.insert(market_key, Record::Market(market));
        self.records.insert(counter_key, Record::MarketCounter(counter));
        Ok(market_key)
    }

    pub fn lock_market(&mut self, authority: Pubkey, market: &Pubkey, now: i64) -> Result<()> {
        self.transition(market, |m, s, key| apply_lock(m, s, key, authority, now))
    }

    pub fn cancel_market(&mut self, authority: Pubkey, market: &Pubkey, now: i64) -> Result<()> {
        self.transition(market, |m, s, key| apply_cancel(m, s, key, authority, now))
    }

    pub fn resolve_market(
        &mut self,
        authority: Pubkey,
        market: &Pubkey,
        outcome_yes: bool,
        now: i64,
    ) -> Result<()> {
        self.transition(market, |m, s, key| {
            apply_resolve(m, s, key, authority, outcome_yes, now)
        })
    }

    pub fn submit_signal_commitment(
        &mut self,
        authority: Pubkey,
        market_key: &Pubkey,
        commitment_root: [u8; 32],
        now: i64,
    ) -> Result<Pubkey> {
        self.require_config()?;

        let market = self.load_market(market_key)?;
        let sponsor = self.load_sponsor(&market.sponsor)?;
        let (signal_key, bump) = signal_pda(market_key, &self.program_id);
        let mut commit = self.signal_commitment(&signal_key).cloned().unwrap_or_default();

        record_signal(
            &mut commit,
            &market,
            *market_key,
            &sponsor,
            market.sponsor,
            authority,
            commitment_root,
            bump,
            now,
        )?;

        self.records.insert(signal_key, Record::SignalCommitment(commit));
        Ok(signal_key)
    }

    /// `admin` is the signer; it must match the config admin.
    pub fn update_reputation(&mut self, admin: Pubkey, user: Pubkey, delta: i64) -> Result<Pubkey> {
        let cfg = self.config().cloned().ok_or_else(|| error!(SuperfanError::NotFound))?;

        let (scout_key, bump) = scout_pda(&user, &self.program_id);
        let mut registry = self.scout_registry(&scout_key).cloned().unwrap_or_default();

        apply_reputation_delta(&mut registry, &cfg, admin, user, delta, bump)?;

        self.records.insert(scout_key, Record::ScoutRegistry(registry));
        Ok(scout_key)
    }

    fn transition<F>(&mut self, market_key: &Pubkey, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Market, &Sponsor, Pubkey) -> Result<()>,
    {
        self.require_config()?;

        let mut market = self.load_market(market_key)?;
        let sponsor = self.load_sponsor(&market.sponsor)?;
        let sponsor_key = market.sponsor;

        apply(&mut market, &sponsor, sponsor_key)?;

        self.records.insert(*market_key, Record::Market(market));
        Ok(())
    }
}
