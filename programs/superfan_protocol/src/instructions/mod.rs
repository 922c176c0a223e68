pub mod config;
pub mod market;
pub mod reputation;
pub mod signal;

pub use market::MarketTerms;
