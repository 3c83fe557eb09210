//! Debug hooks for outgoing requests.
//!
//! The request URL carries the API key in plain text, so where it ends up is
//! left to the caller: install a [`RedactingObserver`] or a closure to keep
//! credentials out of logs.

use reqwest::Url;
use std::fmt::Debug;

/// Called with the fully built request URL when debug is enabled.
pub trait RequestObserver: Send + Sync + Debug {
    fn on_request(&self, url: &Url);
}

/// Logs the full URL, key included, at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, url: &Url) {
        tracing::debug!("Debug: Requesting URL: {url}");
    }
}

/// Logs the URL with the `appid` value masked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedactingObserver;

impl RequestObserver for RedactingObserver {
    fn on_request(&self, url: &Url) {
        tracing::debug!("Debug: Requesting URL: {}", redact_url(url));
    }
}

/// Adapter so plain closures can observe requests.
pub struct FnObserver<F>(pub F);

impl<F> Debug for FnObserver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnObserver")
    }
}

impl<F> RequestObserver for FnObserver<F>
where
    F: Fn(&Url) + Send + Sync,
{
    fn on_request(&self, url: &Url) {
        (self.0)(url)
    }
}

/// Render `url` with the `appid` query value replaced by `***`.
pub fn redact_url(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}
