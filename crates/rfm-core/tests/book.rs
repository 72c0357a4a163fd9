//! End-to-end tests of the referral book against the seed data.

use rfm_core::{Commit, DialogKind, ReferralBook, TABLE_HEADERS, rows};
use rfm_model::{FieldError, Referral, ReferralField, ReferralId};

fn seeded() -> ReferralBook {
    ReferralBook::new(rfm_data::seed_referrals().expect("seed parses"))
}

fn fill_valid(book: &mut ReferralBook) {
    book.set_field(ReferralField::GivenName, "Jane");
    book.set_field(ReferralField::Surname, "Roe");
    book.set_field(ReferralField::Email, "jane@example.com");
    book.set_field(ReferralField::Phone, "040 000 0000");
    book.set_field(ReferralField::AddressLine, "1 George St");
    book.set_field(ReferralField::Suburb, "Sydney");
    book.set_field(ReferralField::State, "NSW");
    book.set_field(ReferralField::Postcode, "2000");
    book.select_country(Some("Australia".to_string()));
}

#[test]
fn table_shows_headers_and_seed_rows() {
    let book = seeded();
    assert_eq!(
        TABLE_HEADERS,
        ["Given Name", "Surname", "Email", "Phone", "Address", "Actions"]
    );

    let rows = rows(book.list());
    assert_eq!(
        rows[0].cells(),
        [
            "John",
            "Doe",
            "testing@brighte.com.au",
            "0456 123123",
            "3 Victoria Park Parade Zetland NSW 2017 Australia",
        ]
    );
    insta::assert_snapshot!(
        rows[1].cells().join(" | "),
        @"Another | Referral | referral@gmail.com | 0456 345345 | 18 Gadigal Avenue Waterloo New South Wales 2017 Australia"
    );
}

#[test]
fn add_appends_with_next_identity() {
    let mut book = seeded();
    book.open_add();
    fill_valid(&mut book);
    assert!(book.dialog().can_confirm());

    assert_eq!(book.confirm(), Commit::Added(ReferralId(3)));
    assert!(!book.dialog().is_open());
    assert_eq!(book.referrals().len(), 3);

    let added = book.referrals().last().expect("added record");
    assert_eq!(added.id, ReferralId(3));
    assert_eq!(added.given_name, "Jane");
    assert_eq!(added.phone, "040 000 0000");
    assert_eq!(added.country, "Australia");
    assert_eq!(added.display_address(), "1 George St Sydney NSW 2000 Australia");
}

#[test]
fn add_into_an_empty_book_starts_at_one() {
    let mut book = ReferralBook::default();
    book.open_add();
    fill_valid(&mut book);
    assert_eq!(book.confirm(), Commit::Added(ReferralId(1)));
}

#[test]
fn add_after_the_largest_identity_is_refused() {
    let referrals = rfm_data::parse_referrals(
        r#"[{"id": 4294967295, "givenName": "Max", "surName": "Id", "phone": "040 000 0000",
             "email": "max@example.com", "addressLine": "1 Edge St", "suburb": "Zetland",
             "state": "NSW", "postCode": "2017", "country": "Australia"}]"#,
    )
    .expect("parses");
    let mut book = ReferralBook::new(referrals);
    book.open_add();
    fill_valid(&mut book);

    assert_eq!(book.confirm(), Commit::Refused);
    assert_eq!(book.dialog().kind(), Some(DialogKind::Add));
    let ids: Vec<_> = book.referrals().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![ReferralId(u32::MAX)]);
}

#[test]
fn invalid_email_blocks_create() {
    let mut book = seeded();
    book.open_add();
    fill_valid(&mut book);
    book.set_field(ReferralField::Email, "not-an-email");

    let form = book.dialog().form().expect("add form open");
    assert_eq!(form.error(ReferralField::Email), Some(FieldError::InvalidEmail));
    assert_eq!(
        form.error(ReferralField::Email).map(|e| e.to_string()).as_deref(),
        Some("Please enter a valid email")
    );
    assert!(!book.dialog().can_confirm());
    assert_eq!(book.confirm(), Commit::Blocked);
    assert_eq!(book.referrals().len(), 2);
}

#[test]
fn reopening_add_starts_from_a_clean_form() {
    let mut book = seeded();
    book.open_add();
    book.set_field(ReferralField::Email, "bad");
    book.cancel();
    book.open_add();
    let form = book.dialog().form().expect("add form open");
    assert!(form.errors().is_empty());
    assert_eq!(form.value(ReferralField::Email), "");
}

#[test]
fn edit_replaces_only_the_target() {
    let mut book = seeded();
    let before: Vec<Referral> = book.referrals().to_vec();

    assert!(book.open_edit(ReferralId(1)));
    assert_eq!(book.dialog().kind(), Some(DialogKind::Edit));
    let form = book.dialog().form().expect("edit form open");
    assert_eq!(form.value(ReferralField::Suburb), "Zetland");
    assert_eq!(form.country(), Some("Australia"));

    book.set_field(ReferralField::Suburb, "Redfern");
    assert_eq!(book.confirm(), Commit::Edited(ReferralId(1)));

    let after = book.referrals();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].id, ReferralId(1));
    assert_eq!(after[0].suburb, "Redfern");
    assert_eq!(after[0].country, "Australia");
    assert_eq!(after[1], before[1]);
}

#[test]
fn edit_is_allowed_with_untouched_invalid_values() {
    // The seed phone does not match the phone rule, but only touched fields
    // are validated, so the edit gate stays open.
    let mut book = seeded();
    book.open_edit(ReferralId(1));
    book.set_field(ReferralField::GivenName, "Johnny");
    assert!(book.dialog().can_confirm());
    assert_eq!(book.confirm(), Commit::Edited(ReferralId(1)));
    assert_eq!(book.referrals()[0].phone, "0456 123123");
}

#[test]
fn edit_with_an_error_is_blocked() {
    let mut book = seeded();
    book.open_edit(ReferralId(2));
    book.set_field(ReferralField::Postcode, "20");
    assert_eq!(book.confirm(), Commit::Blocked);
    assert_eq!(book.referrals()[1].postcode, "2017");
}

#[test]
fn delete_removes_only_the_target() {
    let mut book = seeded();
    let survivor = book.referrals()[1].clone();

    assert!(book.open_delete(ReferralId(1)));
    assert_eq!(
        book.dialog().prompt().as_deref(),
        Some("Are you sure to delete John Doe?")
    );
    assert_eq!(book.confirm(), Commit::Deleted(ReferralId(1)));

    assert_eq!(book.referrals(), [survivor]);
    assert!(!book.dialog().is_open());
}

#[test]
fn cancel_leaves_the_list_unchanged() {
    let mut book = seeded();
    let before = book.referrals().to_vec();
    book.open_delete(ReferralId(2));
    book.cancel();
    book.open_edit(ReferralId(1));
    book.set_field(ReferralField::GivenName, "");
    book.cancel();
    assert_eq!(book.referrals(), before.as_slice());
}

#[test]
fn rows_serialize_to_json() {
    let book = seeded();
    let json = serde_json::to_value(rows(book.list())).expect("serialize rows");
    assert_eq!(json[0]["address"], "3 Victoria Park Parade Zetland NSW 2017 Australia");
    assert_eq!(json[1]["id"], 2);
}
