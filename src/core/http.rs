use std::time::Duration;

use reqwest::{
    blocking::Client,
    header::USER_AGENT,
};

use super::FemineError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn http_client() -> Result<Client, FemineError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| FemineError::Custom(format!("HTTP client build failed: {e}")))
}

/// Fetch one page body. A non-success status is an error; the collector
/// treats it like any other failed address and moves on.
pub fn fetch_text(client: &Client, url: &str) -> Result<String, FemineError> {
    let resp = client.get(url).header(USER_AGENT, "femine/0.1 (+reqwest)").send()?;

    if !resp.status().is_success() {
        return Err(FemineError::Custom(format!("HTTP error {} from {}", resp.status(), url)));
    }

    Ok(resp.text()?)
}
