//! Live API tests. These only run when real member credentials are provided
//! via `TALQUIN_ELECTRIC_USERNAME` / `TALQUIN_ELECTRIC_PASSWORD`.

use std::env;

use talquin_client::TalquinApiClient;
use tracing_subscriber::EnvFilter;

fn credentials() -> Option<(String, String)> {
    let username = env::var("TALQUIN_ELECTRIC_USERNAME").ok()?;
    let password = env::var("TALQUIN_ELECTRIC_PASSWORD").ok()?;
    Some((username, password))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[tokio::test]
async fn test_live_access_token_fetch() {
    let Some((username, password)) = credentials() else {
        eprintln!("skipping: no credentials in TALQUIN_ELECTRIC_USERNAME/PASSWORD");
        return;
    };
    init_tracing();

    let client = TalquinApiClient::new(username, password);
    let token = client
        .fetch_access_token()
        .await
        .expect("token fetch failed");

    assert!(!token.to_string().is_empty());
}
