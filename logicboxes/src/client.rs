use crate::error::Error;
use bon::bon;
use logicboxes_common::WireQuery;
use reqwest::Method;

const HOST_PRODUCTION: &str = "https://httpapi.com/api";
const HOST_TEST: &str = "https://test.httpapi.com/api";

/// Shared transport for every endpoint namespace. Reseller credentials are
/// injected into each outbound query; the base host follows the production
/// flag.
pub struct Client {
    reseller_id: String,
    api_key: String,
    production: bool,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    #[builder(on(String, into))]
    pub fn new(
        reseller_id: String,
        api_key: String,
        /// Talk to the live host instead of the test host. Off by default.
        #[builder(default)]
        production: bool,
    ) -> Self {
        Self {
            reseller_id,
            api_key,
            production,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.production
    }

    pub(crate) async fn call_api(
        &self,
        method: Method,
        namespace: &str,
        api_name: &str,
        mut query: WireQuery,
    ) -> Result<reqwest::Response, Error> {
        if method != Method::GET && method != Method::POST {
            return Err(Error::UnsupportedMethod(method));
        }

        query.append("auth-userid", self.reseller_id.as_str());
        query.append("api-key", self.api_key.as_str());

        let host = if self.production {
            HOST_PRODUCTION
        } else {
            HOST_TEST
        };
        let url = format!("{}/{}/{}.json", host, namespace, api_name);

        let resp = self
            .http_client
            .request(method, url)
            .query(query.pairs())
            .send()
            .await?;
        Ok(resp)
    }
}
