use std::time::Duration;

use bytes::Bytes;
use rgwadmin_core::{Context, OsEnv, Result};
use rgwadmin_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    // Keep bodies untouched and error statuses as plain responses.
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("rgwadmin-example/1.0")
        .no_gzip()
        .build()
        .map_err(|err| rgwadmin_core::Error::config_invalid(err.to_string()))?;

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::new(client));

    let address = ctx
        .env_var("RGW_ADMIN_ADDRESS")
        .unwrap_or_else(|| "127.0.0.1:8080".to_string());
    let url = format!("http://{address}/admin/usage");
    println!("GET {url} (unsigned, expect 403)");

    let req = http::Request::get(url).body(Bytes::new())?;
    let resp = ctx.http_send(req).await?;
    println!("status: {}", resp.status());
    println!("body: {}", String::from_utf8_lossy(resp.body()));

    Ok(())
}
