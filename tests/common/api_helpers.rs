use reqwest::{Client, Response};
use std::time::Duration;

pub fn http_client() -> anyhow::Result<Client> {
    Ok(Client::builder().timeout(Duration::from_secs(10)).build()?)
}

pub async fn get(client: &Client, base_url: &str, path: &str) -> anyhow::Result<Response> {
    let url = format!("{}{}", base_url, path);
    Ok(client.get(url).send().await?)
}
