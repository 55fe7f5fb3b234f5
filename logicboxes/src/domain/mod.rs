//! Domain registration order endpoints.

mod types;

pub use types::{DomainAction, LockStatus, OrderCriteria};

use crate::client::Client;
use crate::error::Error;
use crate::utils::{parse_json_response, scalar_to_bool, scalar_to_string, wire_query};
use logicboxes_common::WireQuery;
use reqwest::Method;
use std::collections::HashMap;

/// Loosely-typed record set keyed by result index plus paging metadata.
pub type OrderSearchResult = HashMap<String, serde_json::Value>;

impl Client {
    pub async fn search_orders(&self, criteria: &OrderCriteria) -> Result<OrderSearchResult, Error> {
        let query = wire_query(criteria)?;
        let resp = self.call_api(Method::GET, "domains", "search", query).await?;
        parse_json_response(resp).await
    }

    /// Resolves a registered domain name to its order id.
    pub async fn order_id(&self, domain_name: &str) -> Result<String, Error> {
        let mut query = WireQuery::new();
        query.append("domain-name", domain_name);
        let resp = self
            .call_api(Method::GET, "domains", "orderid", query)
            .await?;
        scalar_to_string(parse_json_response(resp).await?)
    }

    pub async fn registration_order_details(
        &self,
        order_id: &str,
        options: &[String],
    ) -> Result<HashMap<String, serde_json::Value>, Error> {
        let mut query = WireQuery::new();
        query.append("order-id", order_id);
        for option in options {
            query.append("options", option.as_str());
        }
        let resp = self
            .call_api(Method::GET, "domains", "details", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn suggest_names(
        &self,
        keyword: &str,
        tld_only: Option<&str>,
        exact_match: bool,
        adult: bool,
    ) -> Result<HashMap<String, serde_json::Value>, Error> {
        let mut query = WireQuery::new();
        query.append("keyword", keyword);
        if let Some(tld) = tld_only {
            query.append("tld-only", tld);
        }
        query.append("exact-match", if exact_match { "true" } else { "false" });
        query.append("adult", if adult { "true" } else { "false" });
        let resp = self
            .call_api(Method::GET, "domains", "v5/suggest-names", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn modify_name_servers(
        &self,
        order_id: &str,
        name_servers: &[String],
    ) -> Result<DomainAction, Error> {
        let mut query = WireQuery::new();
        query.append("order-id", order_id);
        for ns in name_servers {
            query.append("ns", ns.as_str());
        }
        let resp = self
            .call_api(Method::POST, "domains", "modify-ns", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn add_child_name_server(
        &self,
        order_id: &str,
        child_ns: &str,
        ip_addresses: &[String],
    ) -> Result<DomainAction, Error> {
        let mut query = WireQuery::new();
        query.append("order-id", order_id);
        query.append("cns", child_ns);
        for ip in ip_addresses {
            query.append("ip", ip.as_str());
        }
        let resp = self
            .call_api(Method::POST, "domains", "add-cns", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn modify_privacy_protection(
        &self,
        order_id: &str,
        protect: bool,
        reason: &str,
    ) -> Result<DomainAction, Error> {
        let mut query = WireQuery::new();
        query.append("order-id", order_id);
        query.append("protect-privacy", if protect { "true" } else { "false" });
        query.append("reason", reason);
        let resp = self
            .call_api(Method::POST, "domains", "modify-privacy-protection", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn modify_auth_code(&self, order_id: &str, auth_code: &str) -> Result<bool, Error> {
        let mut query = WireQuery::new();
        query.append("order-id", order_id);
        query.append("auth-code", auth_code);
        let resp = self
            .call_api(Method::POST, "domains", "modify-auth-code", query)
            .await?;
        scalar_to_bool(parse_json_response(resp).await?)
    }

    pub async fn apply_theft_protection(&self, order_id: &str) -> Result<DomainAction, Error> {
        let mut query = WireQuery::new();
        query.append("order-id", order_id);
        let resp = self
            .call_api(Method::POST, "domains", "enable-theft-protection", query)
            .await?;
        parse_json_response(resp).await
    }

    /// Lists the locks currently applied on the domain name.
    pub async fn lock_status(&self, order_id: &str) -> Result<LockStatus, Error> {
        let mut query = WireQuery::new();
        query.append("order-id", order_id);
        let resp = self.call_api(Method::GET, "domains", "locks", query).await?;
        parse_json_response(resp).await
    }
}
