//! Shared wire types: status/auth constants, the service's status envelope
//! and the base search [`Criteria`] embedded by the per-namespace criteria.

use bon::Builder;
use logicboxes_common::{FieldDescriptor, FieldKind, FieldValue, WireForm};
use serde::Deserialize;
use time::OffsetDateTime;

/// Lifecycle status of an order/customer entity as the service spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityStatus {
    Active,
    InActive,
    Deleted,
    Archived,
    Suspended,
    VerificationPending,
    VerificationFailed,
    Restorable,
    NotApplicable,
    NotAvailable,
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::InActive => "InActive",
            EntityStatus::Deleted => "Deleted",
            EntityStatus::Archived => "Archived",
            EntityStatus::Suspended => "Suspended",
            EntityStatus::VerificationPending => "Pending Verification",
            EntityStatus::VerificationFailed => "Failed Verification",
            EntityStatus::Restorable => "Pending Delete Restorable",
            EntityStatus::NotApplicable => "Not Applicable",
            EntityStatus::NotAvailable => "NA",
        }
    }
}

/// Second-factor channel accepted by the OTP endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    Sms,
    Google,
    GoogleBackup,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Sms => "sms",
            AuthType::Google => "gauth",
            AuthType::GoogleBackup => "gauthbackup",
        }
    }
}

/// Privacy-protection filter; the wire wants the literal `true`/`false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacyState {
    Enabled,
    Disabled,
}

impl PrivacyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivacyState::Enabled => "true",
            PrivacyState::Disabled => "false",
        }
    }
}

/// Status envelope the service wraps error responses in.
#[derive(Deserialize, Debug)]
pub struct JsonStatusResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Common search criteria embedded (and flattened) into the per-namespace
/// criteria types.
#[derive(Debug, Clone, Default, Builder)]
pub struct Criteria {
    #[builder(default)]
    reseller_ids: Vec<String>,
    #[builder(default)]
    customer_ids: Vec<String>,
    time_creation_start: Option<OffsetDateTime>,
    time_creation_end: Option<OffsetDateTime>,
    no_of_records: Option<u16>,
    page_no: Option<u16>,
}

impl WireForm for Criteria {
    fn descriptors() -> &'static [FieldDescriptor] {
        static FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor {
                key: "reseller-id",
                kind: FieldKind::StrSeq,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "customer-id",
                kind: FieldKind::StrSeq,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "creation-date-start",
                kind: FieldKind::Timestamp,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "creation-date-end",
                kind: FieldKind::Timestamp,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "no-of-records",
                kind: FieldKind::Uint,
                omit_empty: true,
                rules: &[],
            },
            FieldDescriptor {
                key: "page-no",
                kind: FieldKind::Uint,
                omit_empty: true,
                rules: &[],
            },
        ];
        FIELDS
    }

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            (&self.reseller_ids).into(),
            (&self.customer_ids).into(),
            self.time_creation_start.into(),
            self.time_creation_end.into(),
            self.no_of_records.into(),
            self.page_no.into(),
        ]
    }
}
