use crate::types::{Criteria, EntityStatus, PrivacyState};
use bon::Builder;
use logicboxes_common::{FieldDescriptor, FieldKind, FieldValue, JsonBool, SortOrder, WireForm};
use serde::Deserialize;
use std::sync::LazyLock;
use time::OffsetDateTime;

/// Search filter for registration orders. Embeds the shared [`Criteria`]
/// fields, flattened into one wire namespace.
#[derive(Debug, Clone, Default, Builder)]
#[builder(on(String, into))]
pub struct OrderCriteria {
    #[builder(default)]
    base: Criteria,
    #[builder(default)]
    statuses: Vec<EntityStatus>,
    #[builder(default)]
    sort_order: SortOrder,
    #[builder(default)]
    order_ids: Vec<String>,
    #[builder(default)]
    domain_keys: Vec<String>,
    domain_name: Option<String>,
    privacy_status: Option<PrivacyState>,
    /// `false` is the wire zero value and encodes nothing; only `true` is
    /// ever sent.
    show_child_orders: Option<bool>,
    time_expiry_start: Option<OffsetDateTime>,
    time_expiry_end: Option<OffsetDateTime>,
}

impl WireForm for OrderCriteria {
    fn descriptors() -> &'static [FieldDescriptor] {
        static FIELDS: LazyLock<Vec<FieldDescriptor>> = LazyLock::new(|| {
            let mut fields = Criteria::descriptors().to_vec();
            fields.extend_from_slice(&[
                FieldDescriptor {
                    key: "status",
                    kind: FieldKind::StrSeq,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "order-by",
                    kind: FieldKind::SortSeq,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "order-id",
                    kind: FieldKind::StrSeq,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "product-key",
                    kind: FieldKind::StrSeq,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "domain-name",
                    kind: FieldKind::Str,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "privacy-enabled",
                    kind: FieldKind::Str,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "show-child-orders",
                    kind: FieldKind::Bool,
                    omit_empty: true,
                    rules: &[],
                },
                FieldDescriptor {
                    key: "expiry-date-start",
                    kind: FieldKind::Timestamp,
                    omit_empty: true,
                    rules: &[],
                },
                // The range end gets its own key; the API documents the pair
                // as expiry-date-start/expiry-date-end.
                FieldDescriptor {
                    key: "expiry-date-end",
                    kind: FieldKind::Timestamp,
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
            FieldValue::StrSeq(self.statuses.iter().map(EntityStatus::as_str).collect()),
            (&self.sort_order).into(),
            (&self.order_ids).into(),
            (&self.domain_keys).into(),
            (&self.domain_name).into(),
            self.privacy_status
                .map_or(FieldValue::Absent, |p| FieldValue::Str(p.as_str())),
            self.show_child_orders.into(),
            self.time_expiry_start.into(),
            self.time_expiry_end.into(),
        ]);
        values
    }
}

/// Acknowledgement envelope returned by the mutating domain endpoints.
#[derive(Deserialize, Debug)]
pub struct DomainAction {
    #[serde(rename = "entityid")]
    pub entity_id: Option<String>,
    #[serde(rename = "actiontype")]
    pub action_type: Option<String>,
    #[serde(rename = "actiontypedesc")]
    pub action_type_desc: Option<String>,
    #[serde(rename = "eaqid")]
    pub eaq_id: Option<String>,
    #[serde(rename = "actionstatus")]
    pub action_status: Option<String>,
    #[serde(rename = "actionstatusdesc")]
    pub action_status_desc: Option<String>,
}

/// Lock flags on a domain name; the service quotes every boolean.
#[derive(Deserialize, Debug)]
pub struct LockStatus {
    #[serde(rename = "transferlock")]
    pub transfer_lock: Option<JsonBool>,
    #[serde(rename = "customerlock")]
    pub customer_lock: Option<JsonBool>,
    #[serde(rename = "resellerlock")]
    pub reseller_lock: Option<JsonBool>,
}
