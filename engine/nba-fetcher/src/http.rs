use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{FetchError, Result};

/// Send a request and decode the JSON body.
///
/// Transport failures, non-success statuses and undecodable bodies map onto
/// the three `FetchError` kinds. No retry.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    endpoint: &str,
) -> Result<T> {
    let response = request.send().await.map_err(|e| FetchError::transport(endpoint, e))?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} returned status {}", endpoint, status);
        return Err(FetchError::Http {
            endpoint: endpoint.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| FetchError::transport(endpoint, e))?;
    debug!("{} returned {} bytes", endpoint, body.len());

    Ok(serde_json::from_str(&body)?)
}
