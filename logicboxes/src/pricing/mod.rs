//! Product pricing endpoints.
//!
//! Price responses are deeply nested product/slab maps with no stable shape,
//! so they stay loosely typed.

use crate::client::Client;
use crate::error::Error;
use crate::utils::parse_json_response;
use logicboxes_common::WireQuery;
use reqwest::Method;
use std::collections::HashMap;

pub type CustomerPrice = HashMap<String, serde_json::Value>;
pub type ResellerPrice = HashMap<String, serde_json::Value>;
pub type ResellerCostPrice = HashMap<String, serde_json::Value>;
pub type PromoPrice = Vec<serde_json::Value>;

impl Client {
    pub async fn customer_pricing(&self, customer_id: &str) -> Result<CustomerPrice, Error> {
        let mut query = WireQuery::new();
        query.append("customer-id", customer_id);
        let resp = self
            .call_api(Method::GET, "products", "customer-price", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn reseller_pricing(&self, reseller_id: &str) -> Result<ResellerPrice, Error> {
        let mut query = WireQuery::new();
        query.append("reseller-id", reseller_id);
        let resp = self
            .call_api(Method::GET, "products", "reseller-price", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn reseller_cost_pricing(
        &self,
        reseller_id: &str,
    ) -> Result<ResellerCostPrice, Error> {
        let mut query = WireQuery::new();
        query.append("reseller-id", reseller_id);
        let resp = self
            .call_api(Method::GET, "products", "reseller-cost-price", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn promo_prices(&self) -> Result<PromoPrice, Error> {
        let resp = self
            .call_api(Method::GET, "products", "promo-details", WireQuery::new())
            .await?;
        parse_json_response(resp).await
    }
}
