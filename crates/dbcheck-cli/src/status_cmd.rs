use reqwest::Client;

use dbcheck_core::types::{ConnectivityResult, StatusView};
use dbcheck_core::DB_CHECK_PATH;

/// Fetch the connectivity result from a dbcheck server.
///
/// The body is decoded whatever the status code, since the server answers
/// failures with 500 and a regular result.
pub async fn fetch(client: &Client, base_url: &str) -> Result<ConnectivityResult, reqwest::Error> {
    let url = format!("{}{DB_CHECK_PATH}", base_url.trim_end_matches('/'));
    client.get(url).send().await?.json().await
}

/// Report the database status once: print the pending line, make a single
/// request, print the resolved line.
pub async fn run(base_url: &str) -> StatusView {
    println!("{}", StatusView::Pending);

    let client = Client::new();
    let outcome = fetch(&client, base_url).await;
    if let Err(e) = &outcome {
        tracing::warn!("Status request to {base_url} failed: {e}");
    }

    let view = StatusView::from_fetch(outcome);
    println!("{view}");
    view
}
