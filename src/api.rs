use dioxus::logger::tracing::debug;
use reqwest::StatusCode;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::shared::types::WeddingInfo;

/// GET the wedding document once. No retries, no timeout beyond the client's.
pub async fn fetch_wedding(config: &ApiConfig) -> Result<WeddingInfo, FetchError> {
    let url = config.endpoint.as_str();
    debug!("[wedding] GET {url}");
    let res = reqwest::get(url)
        .await
        .map_err(|e| FetchError::network(url, e.to_string()))?;
    let status = res.status();
    // body is never read on a failed status
    check_status(url, status)?;
    let bytes = res
        .bytes()
        .await
        .map_err(|e| FetchError::network(url, format!("reading body: {e}")))?;
    decode_response(url, status, &bytes)
}

/// Turn a status and body into a validated document.
///
/// The status is checked before anything looks at the body.
pub fn decode_response(
    url: &str,
    status: StatusCode,
    body: &[u8],
) -> Result<WeddingInfo, FetchError> {
    check_status(url, status)?;
    let info: WeddingInfo = serde_json::from_slice(body).map_err(|e| {
        let snip = String::from_utf8_lossy(body);
        let snip = snip.chars().take(120).collect::<String>();
        FetchError::parse(format!("{e} (body: {snip})"))
    })?;
    info.validate()?;
    Ok(info)
}

fn check_status(url: &str, status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}
