use gloo_net::http::Request;
use serde_json::Value;

/// Fetch a remote JSON configuration document.
///
/// Yields `None` for an empty URL (no request is made), any transport or
/// HTTP error, a body that is not valid JSON, or a JSON `null`. Failures
/// are logged and never surface to the caller.
pub async fn fetch_config(url: &str) -> Option<Value> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let response = match Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            log::error!("[fetch] config request failed: {err}");
            return None;
        }
    };
    if !response.ok() {
        log::error!("[fetch] config request failed: HTTP {}", response.status());
        return None;
    }

    match response.json::<Value>().await {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("[fetch] config body is not valid JSON: {err}");
            None
        }
    }
}
