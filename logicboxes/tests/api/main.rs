//! Live-API tests. These hit the reseller test host and are ignored by
//! default; provide `tests/api/config.toml` and run with `--ignored`.

use logicboxes::Client;
use logicboxes::domain::OrderCriteria;
use logicboxes::types::EntityStatus;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct ApiConfig {
    reseller_id: String,
    api_key: String,
    #[serde(default)]
    production: bool,
    test_domain_name: String,
    test_order_id: String,
}

fn get_client() -> (Client, ApiConfig) {
    let conf_str = std::fs::read_to_string("tests/api/config.toml").unwrap();
    let conf = toml::from_str::<ApiConfig>(&conf_str).unwrap();
    let client = Client::builder()
        .reseller_id(conf.reseller_id.clone())
        .api_key(conf.api_key.clone())
        .production(conf.production)
        .build();
    (client, conf)
}

#[tokio::test]
#[ignore]
async fn suggest_names_test() {
    let (client, _) = get_client();
    match client.suggest_names("domain", None, false, false).await {
        Ok(data) => println!("ok: {:#?}", data),
        Err(e) => println!("error: {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn order_id_test() {
    let (client, conf) = get_client();
    match client.order_id(&conf.test_domain_name).await {
        Ok(data) => println!("ok: {:#?}", data),
        Err(e) => println!("error: {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn registration_order_details_test() {
    let (client, conf) = get_client();
    match client
        .registration_order_details(&conf.test_order_id, &["All".to_owned()])
        .await
    {
        Ok(data) => println!("ok: {:#?}", data),
        Err(e) => println!("error: {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn search_orders_test() {
    let (client, _) = get_client();
    let criteria = OrderCriteria::builder()
        .statuses(vec![EntityStatus::Active])
        .build();
    match client.search_orders(&criteria).await {
        Ok(data) => println!("ok: {:#?}", data),
        Err(e) => println!("error: {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn modify_name_servers_test() {
    let (client, conf) = get_client();
    match client
        .modify_name_servers(&conf.test_order_id, &["ns1.domain.asia".to_owned()])
        .await
    {
        Ok(data) => println!("ok: {:#?}", data),
        Err(e) => println!("error: {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn lock_status_test() {
    let (client, conf) = get_client();
    match client.lock_status(&conf.test_order_id).await {
        Ok(data) => println!("ok: {:#?}", data),
        Err(e) => println!("error: {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn promo_prices_test() {
    let (client, _) = get_client();
    match client.promo_prices().await {
        Ok(data) => println!("ok: {:#?}", data),
        Err(e) => println!("error: {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn country_list_test() {
    let (client, _) = get_client();
    match client.country_list().await {
        Ok(data) => println!("ok: {} countries", data.len()),
        Err(e) => println!("error: {:#?}", e),
    }
}
