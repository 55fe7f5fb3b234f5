#![doc = include_str!("../README.md")]

pub mod customer;
pub mod domain;
pub mod general;
pub mod pricing;
pub mod types;

mod client;
mod error;
mod utils;

pub use client::Client;
pub use error::Error;
pub use utils::wire_query;

/// Wire codec shared by every endpoint namespace.
pub use logicboxes_common as codec;
pub use logicboxes_common::{JsonBool, JsonFloat, JsonTime, SortOrder, WireQuery};
