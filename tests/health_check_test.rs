use captrivia_tests::common::{api_helpers::*, utils::*};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() -> anyhow::Result<()> {
    let base_url = base_url().await?;
    let client = http_client()?;

    let resp = get(&client, &base_url, "/health").await?;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await?;
    assert_eq!(body["status"], "healthy");
    Ok(())
}
