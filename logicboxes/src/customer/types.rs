use crate::types::Criteria;
use bon::Builder;
use logicboxes_common::{
    FieldDescriptor, FieldKind, FieldValue, JsonBool, JsonFloat, JsonTime, Rule, WireForm,
};
use serde::Deserialize;
use std::sync::LazyLock;

const PASSWORD_SYMBOLS: &str = "~*!@$#%_+.?:,{}";

/// Composition rule the service enforces on passwords: at least one
/// lowercase letter, one uppercase letter and one symbol from the fixed set.
pub(crate) fn password_composition(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Strict variant: additionally enforces the 9-16 character window. Used by
/// the change-password endpoint where the length is not declared separately.
pub(crate) fn password_strict(password: &str) -> bool {
    (9..=16).contains(&password.chars().count()) && password_composition(password)
}

//region sign up
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct SignUpForm {
    username: String,
    password: String,
    name: String,
    company: String,
    address: String,
    address_line2: Option<String>,
    address_line3: Option<String>,
    city: String,
    state: String,
    other_state: Option<String>,
    country: String,
    zipcode: String,
    language_code: String,
    phone_country_code: String,
    phone: String,
    alt_phone_country_code: Option<String>,
    alt_phone: Option<String>,
    fax_country_code: Option<String>,
    fax: Option<String>,
    mobile_country_code: Option<String>,
    mobile: Option<String>,
    vat_id: Option<String>,
    /// `false` is the wire zero value and encodes nothing; only `true` is
    /// ever sent.
    sms_consent: Option<bool>,
    /// `false` is the wire zero value and encodes nothing; only `true` is
    /// ever sent.
    email_marketing_consent: Option<bool>,
    /// `false` is the wire zero value and encodes nothing; only `true` is
    /// ever sent.
    accept_policy: Option<bool>,
}

impl WireForm for SignUpForm {
    fn descriptors() -> &'static [FieldDescriptor] {
        static FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor {
                key: "username",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required, Rule::Email],
            },
            FieldDescriptor {
                key: "passwd",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[
                    Rule::Required,
                    Rule::MinLen(9),
                    Rule::MaxLen(16),
                    Rule::Custom("password"),
                ],
            },
            FieldDescriptor {
                key: "name",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required],
            },
            FieldDescriptor {
                key: "company",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required],
            },
            FieldDescriptor {
                key: "address-line-1",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required],
            },
            FieldDescriptor {
                key: "address-line-2",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "address-line-3",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "city",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required],
            },
            FieldDescriptor {
                key: "state",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required],
            },
            FieldDescriptor {
                key: "other-state",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "country",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required, Rule::CountryCode],
            },
            FieldDescriptor {
                key: "zipcode",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required],
            },
            FieldDescriptor {
                key: "lang-pref",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required],
            },
            FieldDescriptor {
                key: "phone-cc",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required, Rule::Len(2)],
            },
            FieldDescriptor {
                key: "phone",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required, Rule::Numeric],
            },
            FieldDescriptor {
                key: "alt-phone-cc",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[Rule::Len(2)],
            },
            FieldDescriptor {
                key: "alt-phone",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[Rule::Numeric],
            },
            FieldDescriptor {
                key: "fax-cc",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[Rule::Len(2)],
            },
            FieldDescriptor {
                key: "fax",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[Rule::Numeric],
            },
            // The service spells the mobile keys with a capital M.
            FieldDescriptor {
                key: "Mobile-cc",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[Rule::Len(2)],
            },
            FieldDescriptor {
                key: "Mobile",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[Rule::Numeric],
            },
            FieldDescriptor {
                key: "vat-id",
                kind: FieldKind::Str,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "sms-consent",
                kind: FieldKind::Bool,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "email-marketing-consent",
                kind: FieldKind::Bool,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "accept-policy",
                kind: FieldKind::Bool,
                omit_empty: true,
                rules: &[],
            },
        ];
        FIELDS
    }

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            (&self.username).into(),
            (&self.password).into(),
            (&self.name).into(),
            (&self.company).into(),
            (&self.address).into(),
            (&self.address_line2).into(),
            (&self.address_line3).into(),
            (&self.city).into(),
            (&self.state).into(),
            (&self.other_state).into(),
            (&self.country).into(),
            (&self.zipcode).into(),
            (&self.language_code).into(),
            (&self.phone_country_code).into(),
            (&self.phone).into(),
            (&self.alt_phone_country_code).into(),
            (&self.alt_phone).into(),
            (&self.fax_country_code).into(),
            (&self.fax).into(),
            (&self.mobile_country_code).into(),
            (&self.mobile).into(),
            (&self.vat_id).into(),
            self.sms_consent.into(),
            self.email_marketing_consent.into(),
            self.accept_policy.into(),
        ]
    }
}
//endregion

//region criteria
#[derive(Debug, Clone, Default, Builder)]
#[builder(on(String, into))]
pub struct CustomerCriteria {
    #[builder(default)]
    base: Criteria,
    username: Option<String>,
    name: Option<String>,
    company: Option<String>,
    city: Option<String>,
    state: Option<String>,
    /// Lower bound on total receipts, `total-receipt-start`.
    receipt_lowest: Option<f64>,
    /// Upper bound on total receipts, `total-receipt-end`.
    receipt_highest: Option<f64>,
}

impl WireForm for CustomerCriteria {
    fn descriptors() -> &'static [FieldDescriptor] {
        static FIELDS: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(|| {
            let mut fields = Criteria::descriptors().to_vec();
            fields.extend_from_slice(&[
                FieldDescriptor {
                    key: "username",
                    kind: FieldKind::Str,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "name",
                    kind: FieldKind::Str,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "company",
                    kind: FieldKind::Str,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "city",
                    kind: FieldKind::Str,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "state",
                    kind: FieldKind::Str,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "total-receipt-start",
                    kind: FieldKind::Float,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "total-receipt-end",
                    kind: FieldKind::Float,
                    omit_empty: true,
                    rules: &[],
                },
            ]);
            fields
        });
        &FIELDS
    }

    fn values(&self) -> Vec<FieldValue<'_>> {
        let mut values = self.base.values();
        values.extend([
            (&self.username).into(),
            (&self.name).into(),
            (&self.company).into(),
            (&self.city).into(),
            (&self.state).into(),
            self.receipt_lowest.into(),
            self.receipt_highest.into(),
        ]);
        values
    }
}
//endregion

//region change password
pub(crate) struct ChangePasswordForm<'a> {
    pub customer_id: &'a str,
    pub new_password: &'a str,
}

impl WireForm for ChangePasswordForm<'_> {
    fn descriptors() -> &'static [FieldDescriptor] {
        static FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor {
                key: "customer-id",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required, Rule::Numeric],
            },
            FieldDescriptor {
                key: "new-passwd",
                kind: FieldKind::Str,
                omit_empty: false,
                rules: &[Rule::Required, Rule::Custom("password-strict")],
            },
        ];
        FIELDS
    }

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![self.customer_id.into(), self.new_password.into()]
    }
}
//endregion

//region detail
#[derive(Deserialize, Debug)]
pub struct CustomerDetail {
    #[serde(rename = "customerid")]
    pub id: String,
    pub username: String,
    #[serde(rename = "resellerid")]
    pub reseller_id: String,
    #[serde(rename = "parentid")]
    pub parent_id: String,
    pub name: String,
    pub company: String,
    #[serde(rename = "useremail")]
    pub email: String,
    #[serde(rename = "telnocc")]
    pub phone_country_code: String,
    #[serde(rename = "telno")]
    pub phone: String,
    #[serde(rename = "mobilenocc")]
    pub mobile_country_code: Option<String>,
    #[serde(rename = "mobileno")]
    pub mobile: Option<String>,
    #[serde(rename = "address1")]
    pub address: String,
    #[serde(rename = "address2")]
    pub address_line2: Option<String>,
    #[serde(rename = "address3")]
    pub address_line3: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(rename = "stateid")]
    pub state_id: Option<String>,
    #[serde(rename = "country")]
    pub country_code: String,
    #[serde(rename = "zip")]
    pub zipcode: String,
    pub pin: Option<String>,
    #[serde(rename = "creationdt")]
    pub time_creation: JsonTime,
    #[serde(rename = "customerstatus")]
    pub status: String,
    #[serde(rename = "salescontactid")]
    pub sales_contact_id: Option<String>,
    #[serde(rename = "langpref")]
    pub language_preference: String,
    #[serde(rename = "totalreceipts")]
    pub total_receipts: JsonFloat,
    #[serde(rename = "twofactorauth_enabled")]
    pub is_2fa: JsonBool,
    #[serde(rename = "twofactorsmsauth_enabled")]
    pub is_2fa_sms: JsonBool,
    #[serde(rename = "twofactorgoogleauth_enabled")]
    pub is_2fa_google: JsonBool,
    #[serde(rename = "isDominicanTaxConfiguredByParent")]
    pub is_dominican_tax_configured: JsonBool,
}
//endregion

#[test]
fn password_composition_rules() {
    assert!(password_composition("Secret_123"));
    assert!(!password_composition("secret_123"));
    assert!(!password_composition("SECRET_123"));
    assert!(!password_composition("Secret123"));
}

#[test]
fn password_strict_enforces_the_length_window() {
    assert!(password_strict("Secret_123"));
    assert!(!password_strict("Se_1"));
    assert!(!password_strict("Secret_123Secret_123"));
}
