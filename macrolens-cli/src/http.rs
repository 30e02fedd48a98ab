//! HTTP retrieval of the snapshot document.

use std::time::Duration;

use macrolens_core::{MacroLensError, Snapshot, SnapshotSource};

/// Fetches the snapshot with a single `GET` to a fixed endpoint.
///
/// Uses the blocking client; callers on the tokio runtime run it through
/// `spawn_blocking`. Once issued the request runs to completion, so the
/// client's default request timeout is disabled.
#[derive(Debug, Clone)]
pub(crate) struct HttpSnapshotSource {
    url: String,
}

impl HttpSnapshotSource {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl SnapshotSource for HttpSnapshotSource {
    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }

    fn fetch(&self) -> macrolens_core::Result<Snapshot> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("macrolens/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|err| MacroLensError::Fetch(err.to_string()))?;
        let response = client
            .get(&self.url)
            .send()
            .map_err(|err| MacroLensError::Fetch(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(MacroLensError::Fetch(format!(
                "{} returned {status}",
                self.url
            )));
        }
        let document = response
            .text()
            .map_err(|err| MacroLensError::Fetch(err.to_string()))?;
        Snapshot::from_json(&document)
    }
}
