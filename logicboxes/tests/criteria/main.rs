//! Offline encoding/decoding tests against the public SDK surface.

use logicboxes::codec::Error as CodecError;
use logicboxes::customer::{CustomerCriteria, CustomerDetail, SignUpForm};
use logicboxes::domain::{LockStatus, OrderCriteria};
use logicboxes::types::{Criteria, EntityStatus, PrivacyState};
use logicboxes::{Error, JsonTime, SortOrder, wire_query};
use time::OffsetDateTime;

fn valid_sign_up() -> SignUpForm {
    SignUpForm::builder()
        .username("john.doe@example.com")
        .password("Secret_123")
        .name("John Doe")
        .company("Acme Pte Ltd")
        .address("1 Example Street")
        .city("Jakarta")
        .state("DKI Jakarta")
        .country("ID")
        .zipcode("12345")
        .language_code("en")
        .phone_country_code("62")
        .phone("81234567890")
        .build()
}

#[test]
fn customer_criteria_flattens_the_embedded_base() {
    let criteria = CustomerCriteria::builder()
        .base(
            Criteria::builder()
                .reseller_ids(vec!["101".to_owned(), "102".to_owned()])
                .no_of_records(25)
                .page_no(1)
                .build(),
        )
        .city("Bandung")
        .receipt_lowest(12.5)
        .build();

    let query = wire_query(&criteria).unwrap();
    assert_eq!(query.get_all("reseller-id"), vec!["101", "102"]);
    assert_eq!(query.get("no-of-records"), Some("25"));
    assert_eq!(query.get("page-no"), Some("1"));
    assert_eq!(query.get("city"), Some("Bandung"));
    assert_eq!(query.get("total-receipt-start"), Some("12.50"));
    // Unset fields from both halves contribute nothing.
    assert_eq!(query.get("customer-id"), None);
    assert_eq!(query.get("username"), None);
    assert_eq!(query.get("total-receipt-end"), None);
}

#[test]
fn order_criteria_encodes_statuses_and_sort_tokens() {
    let criteria = OrderCriteria::builder()
        .statuses(vec![EntityStatus::Active, EntityStatus::Suspended])
        .sort_order(SortOrder::new().desc("creationtime").asc("endtime"))
        .domain_name("example.com")
        .privacy_status(PrivacyState::Enabled)
        .show_child_orders(true)
        .build();

    let query = wire_query(&criteria).unwrap();
    assert_eq!(query.get_all("status"), vec!["Active", "Suspended"]);
    assert_eq!(
        query.get_all("order-by"),
        vec!["creationtime desc", "endtime"]
    );
    assert_eq!(query.get("domain-name"), Some("example.com"));
    assert_eq!(query.get("privacy-enabled"), Some("true"));
    assert_eq!(query.get("show-child-orders"), Some("true"));
}

#[test]
fn explicitly_false_bools_encode_nothing() {
    // false is the wire zero value on omit-on-empty boolean fields, so an
    // explicitly-set false is indistinguishable from unset in the output.
    let criteria = OrderCriteria::builder()
        .domain_name("example.com")
        .show_child_orders(false)
        .build();
    let query = wire_query(&criteria).unwrap();
    assert_eq!(query.get("show-child-orders"), None);

    let criteria = OrderCriteria::builder()
        .domain_name("example.com")
        .show_child_orders(true)
        .build();
    let query = wire_query(&criteria).unwrap();
    assert_eq!(query.get("show-child-orders"), Some("true"));
}

#[test]
fn order_criteria_expiry_range_uses_distinct_keys() {
    let start = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let end = OffsetDateTime::from_unix_timestamp(1_731_536_000).unwrap();
    let criteria = OrderCriteria::builder()
        .time_expiry_start(start)
        .time_expiry_end(end)
        .build();

    let query = wire_query(&criteria).unwrap();
    assert_eq!(query.get_all("expiry-date-start"), vec!["1700000000"]);
    assert_eq!(query.get_all("expiry-date-end"), vec!["1731536000"]);
}

#[test]
fn timestamps_round_trip_through_the_scalar_decoder() {
    let start = OffsetDateTime::from_unix_timestamp(1_488_274_364).unwrap();
    let criteria = OrderCriteria::builder().time_expiry_start(start).build();

    let query = wire_query(&criteria).unwrap();
    let encoded = query.get("expiry-date-start").unwrap();
    assert_eq!(JsonTime::from_wire(encoded).unwrap().as_time(), start);
}

#[test]
fn sign_up_form_encodes_required_and_optional_fields() {
    let form = valid_sign_up();
    let query = wire_query(&form).unwrap();
    assert_eq!(query.get("username"), Some("john.doe@example.com"));
    assert_eq!(query.get("passwd"), Some("Secret_123"));
    assert_eq!(query.get("address-line-1"), Some("1 Example Street"));
    assert_eq!(query.get("lang-pref"), Some("en"));
    assert_eq!(query.get("phone-cc"), Some("62"));
    // Optional consent flags were never set.
    assert_eq!(query.get("sms-consent"), None);
    assert_eq!(query.get("accept-policy"), None);
}

#[test]
fn sign_up_rejects_a_malformed_email() {
    let form = SignUpForm::builder()
        .username("not-an-email")
        .password("Secret_123")
        .name("John Doe")
        .company("Acme Pte Ltd")
        .address("1 Example Street")
        .city("Jakarta")
        .state("DKI Jakarta")
        .country("ID")
        .zipcode("12345")
        .language_code("en")
        .phone_country_code("62")
        .phone("81234567890")
        .build();
    let err = wire_query(&form).unwrap_err();
    assert!(matches!(
        err,
        Error::Codec(CodecError::Validation {
            field: "username",
            rule: "email"
        })
    ));
}

#[test]
fn sign_up_rejects_a_weak_password() {
    let form = SignUpForm::builder()
        .username("john.doe@example.com")
        .password("secret_123")
        .name("John Doe")
        .company("Acme Pte Ltd")
        .address("1 Example Street")
        .city("Jakarta")
        .state("DKI Jakarta")
        .country("ID")
        .zipcode("12345")
        .language_code("en")
        .phone_country_code("62")
        .phone("81234567890")
        .build();
    let err = wire_query(&form).unwrap_err();
    assert!(matches!(
        err,
        Error::Codec(CodecError::Validation {
            field: "passwd",
            rule: "password"
        })
    ));
}

#[test]
fn first_violation_is_reported_and_nothing_is_encoded() {
    // Both the email and the country code are invalid; the email field comes
    // first in declaration order and wins.
    let form = SignUpForm::builder()
        .username("not-an-email")
        .password("Secret_123")
        .name("John Doe")
        .company("Acme Pte Ltd")
        .address("1 Example Street")
        .city("Jakarta")
        .state("DKI Jakarta")
        .country("Indonesia")
        .zipcode("12345")
        .language_code("en")
        .phone_country_code("62")
        .phone("81234567890")
        .build();
    let err = wire_query(&form).unwrap_err();
    assert!(matches!(
        err,
        Error::Codec(CodecError::Validation {
            field: "username",
            ..
        })
    ));
}

#[test]
fn customer_detail_decodes_quoted_scalars() {
    let raw = r#"{
        "customerid": "12345678",
        "username": "john.doe@example.com",
        "resellerid": "999999",
        "parentid": "0",
        "name": "John Doe",
        "company": "Acme Pte Ltd",
        "useremail": "john.doe@example.com",
        "telnocc": "62",
        "telno": "81234567890",
        "address1": "1 Example Street",
        "city": "Jakarta",
        "state": "DKI Jakarta",
        "country": "ID",
        "zip": "12345",
        "creationdt": "1488274364",
        "customerstatus": "Active",
        "langpref": "en",
        "totalreceipts": "150.75",
        "twofactorauth_enabled": "false",
        "twofactorsmsauth_enabled": "false",
        "twofactorgoogleauth_enabled": "true",
        "isDominicanTaxConfiguredByParent": "false"
    }"#;

    let detail: CustomerDetail = serde_json::from_str(raw).unwrap();
    assert_eq!(detail.id, "12345678");
    assert_eq!(detail.total_receipts.as_f64(), 150.75);
    assert!(!detail.is_2fa.as_bool());
    assert!(detail.is_2fa_google.as_bool());
    assert_eq!(detail.time_creation.as_time().unix_timestamp(), 1_488_274_364);
}

#[test]
fn lock_status_decodes_quoted_booleans() {
    let status: LockStatus =
        serde_json::from_str(r#"{"transferlock":"true","resellerlock":"false"}"#).unwrap();
    assert!(status.transfer_lock.unwrap().as_bool());
    assert!(!status.reseller_lock.unwrap().as_bool());
    assert!(status.customer_lock.is_none());
}
