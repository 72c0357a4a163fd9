//! Tests for the embedded seed data.

use std::io::Write;

use rfm_data::{
    DataError, countries, find_country, invalid_referrals, load_referrals_from, seed_referrals,
};
use rfm_model::{FieldError, ReferralField, ReferralId};

#[test]
fn seed_contains_the_two_sample_referrals() {
    let referrals = seed_referrals().expect("embedded seed parses");
    assert_eq!(referrals.len(), 2);

    let john = &referrals[0];
    assert_eq!(john.id, ReferralId(1));
    assert_eq!(john.given_name, "John");
    assert_eq!(john.surname, "Doe");
    assert_eq!(john.phone, "0456 123123");
    assert_eq!(john.email, "testing@brighte.com.au");
    assert_eq!(
        john.display_address(),
        "3 Victoria Park Parade Zetland NSW 2017 Australia"
    );

    let other = &referrals[1];
    assert_eq!(other.id, ReferralId(2));
    assert_eq!(
        other.display_address(),
        "18 Gadigal Avenue Waterloo New South Wales 2017 Australia"
    );
}

#[test]
fn country_table_has_unique_two_letter_codes() {
    let table = countries().expect("embedded countries parse");
    assert!(!table.is_empty());

    let mut codes: Vec<_> = table.iter().map(|c| c.code.as_str()).collect();
    assert!(codes.iter().all(|code| code.len() == 2));
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), table.len());
}

#[test]
fn seed_countries_resolve_to_table_entries() {
    let table = countries().expect("embedded countries parse");
    for referral in seed_referrals().expect("embedded seed parses") {
        let country = find_country(&table, &referral.country).expect("seed country is listed");
        assert_eq!(country.code, "AU");
    }
}

#[test]
fn referrals_load_from_disk_override() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(
        file,
        r#"[{{"id": 10, "givenName": "Jane", "surName": "Roe", "phone": "0400000000",
            "email": "jane@example.com", "addressLine": "1 George St", "suburb": "Sydney",
            "state": "NSW", "postCode": "2000", "country": "Australia"}}]"#
    )
    .expect("write seed");

    let referrals = load_referrals_from(file.path()).expect("override parses");
    assert_eq!(referrals.len(), 1);
    assert_eq!(referrals[0].id, ReferralId(10));
    assert_eq!(referrals[0].given_name, "Jane");
}

#[test]
fn missing_override_reports_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.json");
    let err = load_referrals_from(&path).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn seed_phones_fail_form_validation() {
    let referrals = seed_referrals().expect("embedded seed parses");
    let invalid = invalid_referrals(&referrals);

    let ids: Vec<_> = invalid.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![ReferralId(1), ReferralId(2)]);
    for (_, errors) in &invalid {
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ReferralField::Phone), Some(FieldError::InvalidPhone));
    }
}
