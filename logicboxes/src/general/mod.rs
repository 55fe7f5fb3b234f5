//! Catalogue endpoints shared across namespaces.

use crate::client::Client;
use crate::error::Error;
use crate::utils::parse_json_response;
use logicboxes_common::WireQuery;
use reqwest::Method;
use std::collections::{BTreeMap, HashMap};

/// ISO 3166-1 alpha-2 code mapped to the country's display name.
pub type CountryDb = BTreeMap<String, String>;

impl Client {
    /// Fetches the service's country catalogue, inverted so the ISO code is
    /// the key.
    pub async fn country_list(&self) -> Result<CountryDb, Error> {
        let resp = self
            .call_api(Method::GET, "country", "list", WireQuery::new())
            .await?;
        let by_name: HashMap<String, String> = parse_json_response(resp).await?;

        Ok(by_name.into_iter().map(|(name, code)| (code, name)).collect())
    }
}
