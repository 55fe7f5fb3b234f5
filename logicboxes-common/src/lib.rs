//! Shared wire codec for the logicboxes SDK.
//!
//! The reseller API speaks a string-typed dialect in both directions: requests
//! are flat, multi-valued query-parameter sets and responses wrap booleans,
//! floats and Unix timestamps in quoted JSON strings. This crate holds the
//! generic machinery bridging that dialect and strongly-typed Rust structs:
//!
//! - [`wire`]: per-type field descriptor tables, the [`WireForm`] trait and
//!   the encode engine producing a [`WireQuery`] multi-map.
//! - [`validate`]: the declarative rule engine run before any encoding.
//! - [`scalar`]: tolerant response scalars ([`JsonBool`], [`JsonFloat`],
//!   [`JsonTime`]).

pub mod error;
pub mod scalar;
pub mod validate;
pub mod wire;

pub use error::Error;
pub use scalar::{JsonBool, JsonFloat, JsonTime};
pub use validate::{CustomRule, Rule, Validator};
pub use wire::{FieldDescriptor, FieldKind, FieldValue, SortOrder, WireForm, WireQuery, encode};
