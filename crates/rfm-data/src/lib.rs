//! Seed data for the referral manager.
//!
//! Both the seed referrals and the country reference table are embedded at
//! compile time, so the application starts without any file I/O. A JSON file
//! on disk can replace the seed referrals via [`load_referrals_from`].

pub mod embedded;
mod error;
mod loader;

pub use error::{DataError, Result};
pub use loader::{
    countries, find_country, invalid_referrals, load_referrals_from, parse_countries,
    parse_referrals, seed_referrals,
};
