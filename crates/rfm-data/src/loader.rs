//! Parsing of seed referrals and the country table.

use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;

use rfm_model::{Country, FieldErrors, Referral, ReferralDraft, ReferralId};
use serde::Deserialize;

use crate::embedded;
use crate::error::{DataError, Result};

/// Row of the country CSV.
#[derive(Debug, Deserialize)]
struct CountryRow {
    code: String,
    label: String,
}

/// Load the embedded seed referrals.
pub fn seed_referrals() -> Result<Vec<Referral>> {
    parse_referrals(embedded::SEED_REFERRALS)
}

/// Load referrals from a JSON file, replacing the embedded seed.
pub fn load_referrals_from(path: &Path) -> Result<Vec<Referral>> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let referrals = parse_referrals(&content)?;
    tracing::info!(
        "Loaded {} referrals from {}",
        referrals.len(),
        path.display()
    );
    Ok(referrals)
}

/// Parse a JSON array of referrals and check identities are unique.
///
/// Records whose fields fail form validation are still loaded; each failing
/// field is logged at `warn`.
pub fn parse_referrals(content: &str) -> Result<Vec<Referral>> {
    let referrals: Vec<Referral> =
        serde_json::from_str(content).map_err(|source| DataError::Json { source })?;

    let mut seen = HashSet::with_capacity(referrals.len());
    for referral in &referrals {
        if !seen.insert(referral.id) {
            return Err(DataError::DuplicateId { id: referral.id });
        }
    }

    for (id, errors) in invalid_referrals(&referrals) {
        for (field, error) in errors.iter() {
            tracing::warn!(
                referral = %id,
                field = field.key(),
                error = %error,
                "Loaded referral fails form validation"
            );
        }
    }

    Ok(referrals)
}

/// Records that would not pass form validation, with their field errors.
pub fn invalid_referrals(referrals: &[Referral]) -> Vec<(ReferralId, FieldErrors)> {
    referrals
        .iter()
        .map(|referral| {
            let errors = rfm_validate::validate_draft(&ReferralDraft::from_referral(referral));
            (referral.id, errors)
        })
        .filter(|(_, errors)| !errors.is_empty())
        .collect()
}

/// Load the embedded country reference table.
pub fn countries() -> Result<Vec<Country>> {
    parse_countries(embedded::COUNTRIES)
}

/// Parse `code,label` CSV content into country entries, in file order.
pub fn parse_countries(content: &str) -> Result<Vec<Country>> {
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(cursor);

    reader
        .deserialize::<CountryRow>()
        .map(|row| {
            row.map(|row| Country::new(row.label, row.code))
                .map_err(|source| DataError::Csv { source })
        })
        .collect()
}

/// Find a country entry by its display label.
pub fn find_country<'a>(countries: &'a [Country], label: &str) -> Option<&'a Country> {
    countries.iter().find(|country| country.label == label)
}
