//! Embedded data files.
//!
//! All data is embedded at compile time using `include_str!()`.

/// Seed referral records (JSON array, mock-data field names).
pub const SEED_REFERRALS: &str = include_str!("../data/referrals.json");

/// Country reference table (`code,label` CSV).
pub const COUNTRIES: &str = include_str!("../data/countries.csv");
