//! Blocking HTTP client for a running report server.
//!
//! Wraps the `POST /generate-pdf` contract: serialize a [`ReportRequest`],
//! receive PDF bytes, surface structured failures. At most one render
//! request is in flight per client at any time; a second call while one is
//! pending fails fast instead of queueing.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::{self, DEFAULT_BASE_URL};
use crate::error::{Result, SizingError};
use crate::models::report::ReportRequest;

// ---------------------------------------------------------------------------
// ReportClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ReportClient`].
pub struct ReportClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for ReportClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl ReportClientBuilder {
    /// Set the server base URL (default `http://localhost:8081`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout (default 120 seconds; PDF rendering is
    /// slow for chart-heavy payloads).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ReportClient> {
        let client = Client::builder().timeout(self.timeout).build()?;
        Ok(ReportClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            client,
            busy: AtomicBool::new(false),
        })
    }
}

// ---------------------------------------------------------------------------
// ReportClient
// ---------------------------------------------------------------------------

/// Client for requesting rendered PDF reports over HTTP.
pub struct ReportClient {
    base_url: String,
    client: Client,
    busy: AtomicBool,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ReportClient {
    /// Create a new builder with the default base URL and timeout.
    pub fn builder() -> ReportClientBuilder {
        ReportClientBuilder::default()
    }

    /// Whether a render request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Request a rendered PDF for the given payload.
    ///
    /// Returns the PDF bytes on success. A non-2xx response is surfaced as
    /// [`SizingError::RenderRequest`] carrying the server's message. While
    /// one request is pending, further calls fail immediately with the same
    /// error kind; the busy flag is released on every exit path.
    pub fn generate_pdf(&self, request: &ReportRequest) -> Result<Vec<u8>> {
        request.validate()?;

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SizingError::RenderRequest(
                "a report is already being generated".to_string(),
            ));
        }
        let _guard = BusyGuard(&self.busy);

        let url = format!("{}/generate-pdf", self.base_url);
        debug!("requesting report from {url}");
        let response = self.client.post(&url).json(request).send()?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.bytes()?.to_vec());
        }

        let body: ErrorBody = response.json().unwrap_or_default();
        let mut message = body
            .message
            .unwrap_or_else(|| format!("server returned status {status}"));
        if let Some(detail) = body.error {
            message = format!("{message}: {detail}");
        }
        Err(SizingError::RenderRequest(message))
    }

    /// Fetch a report and write it to disk, returning the file path.
    ///
    /// The file lands in `dir` when given, otherwise in the platform
    /// download directory, under `relatorio_pacs_<unit>_<date>.pdf`.
    pub fn save_pdf(&self, request: &ReportRequest, dir: Option<&Path>) -> Result<PathBuf> {
        let bytes = self.generate_pdf(request)?;
        let dir = dir
            .map(Path::to_path_buf)
            .unwrap_or_else(config::default_download_dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join(config::download_file_name(
            &request.unit_name,
            &request.date,
        ));
        fs::write(&path, bytes)?;
        debug!("report saved to {}", path.display());
        Ok(path)
    }
}

/// Releases the busy flag when the request ends, whichever way it ends.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
