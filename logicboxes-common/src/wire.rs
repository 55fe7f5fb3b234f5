//! Outbound wire encoding.
//!
//! Criteria/form types declare an ordered table of [`FieldDescriptor`]s (one
//! per encodable field, embedded base criteria flattened in) and hand out
//! their runtime values through [`WireForm::values`]. [`encode`] validates the
//! instance first and then walks the table in declaration order, so the
//! resulting [`WireQuery`] is deterministic for a given input.

use crate::error::Error;
use crate::validate::{Rule, Validator};
use std::collections::BTreeMap;
use time::OffsetDateTime;

//region descriptors
/// Declared kind of an encodable field. The encoder drops any value that
/// disagrees with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Bool,
    Float,
    Uint,
    Timestamp,
    StrSeq,
    SortSeq,
}

/// Per-field wire metadata. Tables are a pure function of the type: built
/// once, never mutated, shared freely across calls.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub kind: FieldKind,
    pub omit_empty: bool,
    pub rules: &'static [Rule],
}
//endregion

//region values
/// Borrowed runtime value of one field. `Absent` stands in for unset `Option`
/// fields and always encodes to nothing.
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Bool(bool),
    Float(f64),
    Uint(u16),
    Time(OffsetDateTime),
    StrSeq(Vec<&'a str>),
    Sort(&'a SortOrder),
    Absent,
}

impl FieldValue<'_> {
    /// Whether the value is the zero value of its kind.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Bool(b) => !b,
            FieldValue::Float(f) => *f == 0.0,
            FieldValue::Uint(u) => *u == 0,
            FieldValue::Time(_) => false,
            FieldValue::StrSeq(items) => items.is_empty(),
            FieldValue::Sort(order) => order.is_empty(),
            FieldValue::Absent => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value agrees with the field's declared kind. `Absent`
    /// agrees with every kind.
    fn matches_kind(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Str(_), FieldKind::Str)
                | (FieldValue::Bool(_), FieldKind::Bool)
                | (FieldValue::Float(_), FieldKind::Float)
                | (FieldValue::Uint(_), FieldKind::Uint)
                | (FieldValue::Time(_), FieldKind::Timestamp)
                | (FieldValue::StrSeq(_), FieldKind::StrSeq)
                | (FieldValue::Sort(_), FieldKind::SortSeq)
                | (FieldValue::Absent, _)
        )
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Str(s)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(s: &'a String) -> Self {
        FieldValue::Str(s)
    }
}

impl<'a> From<&'a Option<String>> for FieldValue<'a> {
    fn from(s: &'a Option<String>) -> Self {
        match s {
            Some(s) => FieldValue::Str(s),
            None => FieldValue::Absent,
        }
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Option<bool>> for FieldValue<'_> {
    fn from(b: Option<bool>) -> Self {
        b.map_or(FieldValue::Absent, FieldValue::Bool)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(f: Option<f64>) -> Self {
        f.map_or(FieldValue::Absent, FieldValue::Float)
    }
}

impl From<u16> for FieldValue<'_> {
    fn from(u: u16) -> Self {
        FieldValue::Uint(u)
    }
}

impl From<Option<u16>> for FieldValue<'_> {
    fn from(u: Option<u16>) -> Self {
        u.map_or(FieldValue::Absent, FieldValue::Uint)
    }
}

impl From<OffsetDateTime> for FieldValue<'_> {
    fn from(t: OffsetDateTime) -> Self {
        FieldValue::Time(t)
    }
}

impl From<Option<OffsetDateTime>> for FieldValue<'_> {
    fn from(t: Option<OffsetDateTime>) -> Self {
        t.map_or(FieldValue::Absent, FieldValue::Time)
    }
}

impl<'a> From<&'a Vec<String>> for FieldValue<'a> {
    fn from(items: &'a Vec<String>) -> Self {
        FieldValue::StrSeq(items.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(items: &'a [String]) -> Self {
        FieldValue::StrSeq(items.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a SortOrder> for FieldValue<'a> {
    fn from(order: &'a SortOrder) -> Self {
        FieldValue::Sort(order)
    }
}
//endregion

//region sort order
/// Ordering specification: sortable field name mapped to a descending flag.
/// Each entry encodes to one `"field"` / `"field desc"` token. Backed by a
/// `BTreeMap` so token order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOrder(BTreeMap<String, bool>);

impl SortOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort ascending by `field`.
    pub fn asc(mut self, field: impl Into<String>) -> Self {
        self.0.insert(field.into(), false);
        self
    }

    /// Sort descending by `field`.
    pub fn desc(mut self, field: impl Into<String>) -> Self {
        self.0.insert(field.into(), true);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(field, desc)| (field.as_str(), *desc))
    }
}
//endregion

//region wire query
/// Multi-valued key/value collection ready to be sent as URL query
/// parameters. Keys are not unique; repeated keys serialize as repeated
/// `key=value` pairs.
#[derive(Debug, Clone, Default)]
pub struct WireQuery {
    pairs: Vec<(String, String)>,
}

impl WireQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Percent-encoded `key=value&...` rendering.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
    }
}
//endregion

/// A type encodable as wire query parameters.
///
/// Implementors declare one descriptor table per type and hand out runtime
/// values in the same order. Types embedding a base criteria prepend the base
/// table and base values so the flattened field set shares one namespace.
pub trait WireForm {
    /// Ordered field descriptors. Pure function of the type; calling it twice
    /// yields the same list.
    fn descriptors() -> &'static [FieldDescriptor]
    where
        Self: Sized;

    /// Runtime values, aligned index-for-index with [`Self::descriptors`].
    fn values(&self) -> Vec<FieldValue<'_>>;
}

/// Encodes `form` into a [`WireQuery`], running `validator` over the full
/// instance first. On a validation error nothing is encoded.
pub fn encode<T: WireForm>(form: &T, validator: &Validator) -> Result<WireQuery, Error> {
    let descriptors = T::descriptors();
    let values = form.values();
    debug_assert_eq!(descriptors.len(), values.len());

    validator.check(descriptors, &values)?;

    let mut query = WireQuery::new();
    for (desc, value) in descriptors.iter().zip(&values) {
        encode_field(desc, value, &mut query);
    }
    Ok(query)
}

fn encode_field(desc: &FieldDescriptor, value: &FieldValue<'_>, query: &mut WireQuery) {
    if desc.omit_empty && value.is_zero() {
        return;
    }
    // A value disagreeing with its declared kind contributes no pairs;
    // encoding is fail-open per field.
    if !value.matches_kind(desc.kind) {
        return;
    }

    match value {
        FieldValue::Str(s) => query.append(desc.key, *s),
        FieldValue::Bool(b) => query.append(desc.key, if *b { "true" } else { "false" }),
        FieldValue::Float(f) => query.append(desc.key, format!("{:.2}", f)),
        FieldValue::Uint(u) => query.append(desc.key, u.to_string()),
        FieldValue::Time(t) => query.append(desc.key, t.unix_timestamp().to_string()),
        FieldValue::StrSeq(items) => {
            for item in items {
                query.append(desc.key, *item);
            }
        }
        FieldValue::Sort(order) => {
            for (field, descending) in order.iter() {
                if descending {
                    query.append(desc.key, format!("{} desc", field));
                } else {
                    query.append(desc.key, field);
                }
            }
        }
        FieldValue::Absent => {}
    }
}
