//! Per-mount resolution pipeline.
//!
//! One mount point runs `Discovered -> (fetch?) -> Ready` or
//! `Discovered -> Skipped`, as a sequence of awaited stages. The remote
//! fetch is the only suspension point and is injected by the caller, so
//! the pipeline is testable without any network or DOM.

use crate::config::{ConfigError, ViewerConfig};
use serde_json::Value;
use std::future::Future;

/// Configuration sources declared by one mount point.
#[derive(Debug, Clone, Default)]
pub struct MountSources {
    /// URL of a remote JSON configuration document (`data-src`).
    pub remote_url: Option<String>,
    /// Literal configuration embedded at render time (`data-config`, or a
    /// document handed directly to the render entry point).
    pub inline_json: Option<String>,
    /// Editor override attributes (`data-override`), highest precedence.
    pub overrides_json: Option<String>,
}

/// Terminal state of one mount point's pipeline.
#[derive(Debug)]
pub enum Resolution {
    Ready(ViewerConfig),
    Skipped(ConfigError),
}

impl Resolution {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Resolution::Skipped(_))
    }
}

/// Resolve one mount point's effective configuration.
///
/// The base comes from the inline document when present, otherwise from
/// the remote URL via `fetch`; with neither, resolution skips. Overrides
/// merge on top (a malformed override document is logged and ignored so
/// the base configuration still renders). When the base was fetched and no
/// `basePath` survived the merge, it is derived from the URL's directory.
pub async fn resolve<F, Fut>(sources: &MountSources, fetch: F) -> Resolution
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Option<Value>>,
{
    let mut fetched_from: Option<&str> = None;
    let mut config = if let Some(inline) = sources.inline_json.as_deref() {
        match ViewerConfig::parse(inline) {
            Ok(config) => config,
            Err(err) => {
                log::error!("[config] inline configuration rejected: {err}");
                return Resolution::Skipped(err);
            }
        }
    } else if let Some(url) = non_empty(sources.remote_url.as_deref()) {
        match fetch(url.to_owned()).await {
            Some(value) => match ViewerConfig::from_value(value) {
                Ok(config) => {
                    fetched_from = Some(url);
                    config
                }
                Err(err) => {
                    log::error!("[config] remote configuration rejected: {err}");
                    return Resolution::Skipped(err);
                }
            },
            // Fetch failures are logged where they happen and collapse to
            // the no-configuration outcome; there is no retry.
            None => return Resolution::Skipped(ConfigError::NoConfiguration),
        }
    } else {
        return Resolution::Skipped(ConfigError::NoConfiguration);
    };

    if let Some(text) = non_empty(sources.overrides_json.as_deref()) {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(overrides)) => config.apply_overrides(&overrides),
            Ok(_) => log::warn!("[config] override document is not a JSON object; ignored"),
            Err(err) => log::warn!("[config] override JSON malformed; keeping base config: {err}"),
        }
    }

    if let Some(url) = fetched_from {
        config.ensure_base_path_from(url);
    }

    Resolution::Ready(config)
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}
