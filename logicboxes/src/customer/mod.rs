//! Customer account endpoints.

mod types;

pub use types::{CustomerCriteria, CustomerDetail, SignUpForm};

pub(crate) use types::{ChangePasswordForm, password_composition, password_strict};

use crate::client::Client;
use crate::error::Error;
use crate::types::AuthType;
use crate::utils::{parse_json_response, scalar_to_bool, scalar_to_string, wire_query};
use logicboxes_common::WireQuery;
use reqwest::Method;
use std::collections::HashMap;

/// Loosely-typed record set keyed by result index plus paging metadata.
pub type CustomerSearchResult = HashMap<String, serde_json::Value>;

impl Client {
    /// Creates a customer account and returns the new customer id.
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<String, Error> {
        let query = wire_query(form)?;
        let resp = self
            .call_api(Method::POST, "customers", "signup", query)
            .await?;
        scalar_to_string(parse_json_response(resp).await?)
    }

    /// Fetches customer details by the account's email address.
    pub async fn customer_details(&self, email: &str) -> Result<CustomerDetail, Error> {
        let mut query = WireQuery::new();
        query.append("username", email);
        let resp = self
            .call_api(Method::GET, "customers", "details", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn customer_details_by_id(&self, customer_id: &str) -> Result<CustomerDetail, Error> {
        let mut query = WireQuery::new();
        query.append("customer-id", customer_id);
        let resp = self
            .call_api(Method::GET, "customers", "details-by-id", query)
            .await?;
        parse_json_response(resp).await
    }

    pub async fn search_customers(
        &self,
        criteria: &CustomerCriteria,
    ) -> Result<CustomerSearchResult, Error> {
        let query = wire_query(criteria)?;
        let resp = self
            .call_api(Method::GET, "customers", "search", query)
            .await?;
        parse_json_response(resp).await
    }

    /// Changes a customer password. The password must satisfy the strict
    /// composition rule (9-16 chars, mixed case, symbol).
    pub async fn change_customer_password(
        &self,
        customer_id: &str,
        new_password: &str,
    ) -> Result<bool, Error> {
        let form = ChangePasswordForm {
            customer_id,
            new_password,
        };
        let query = wire_query(&form)?;
        let resp = self
            .call_api(Method::POST, "customers", "change-password", query)
            .await?;
        scalar_to_bool(parse_json_response(resp).await?)
    }

    /// Generates a one-time password for the customer over the given channel.
    pub async fn generate_otp(&self, customer_id: &str, auth_type: AuthType) -> Result<bool, Error> {
        let mut query = WireQuery::new();
        query.append("customer-id", customer_id);
        query.append("auth-type", auth_type.as_str());
        let resp = self
            .call_api(Method::GET, "customers", "generate-otp", query)
            .await?;
        scalar_to_bool(parse_json_response(resp).await?)
    }

    pub async fn verify_otp(
        &self,
        customer_id: &str,
        otp: &str,
        auth_type: AuthType,
    ) -> Result<bool, Error> {
        let mut query = WireQuery::new();
        query.append("customer-id", customer_id);
        query.append("otp", otp);
        query.append("auth-type", auth_type.as_str());
        let resp = self
            .call_api(Method::POST, "customers", "verify-otp", query)
            .await?;
        scalar_to_bool(parse_json_response(resp).await?)
    }
}
