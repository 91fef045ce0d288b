use std::{path::PathBuf, time::Duration};

use anyhow::{Context, bail};
use reqwest::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    backend_url: Url,
    request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(backend_url: &str, request_timeout: Duration) -> anyhow::Result<Self> {
        let backend_url = Url::parse(backend_url)
            .with_context(|| format!("Invalid backend URL {backend_url:?}"))?;
        if !matches!(backend_url.scheme(), "http" | "https") {
            bail!("Backend URL must use http or https, got {:?}", backend_url.scheme());
        }
        if backend_url.host_str().is_none() {
            bail!("Backend URL {backend_url} has no host");
        }
        Ok(Self {
            backend_url,
            request_timeout,
        })
    }

    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Full URL of an endpoint, appended to the base path.
    ///
    /// `Url::join` would replace the last base segment, so this concatenates.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.backend_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn host(&self) -> &str {
        self.backend_url.host_str().unwrap_or("127.0.0.1")
    }

    pub fn port(&self) -> u16 {
        self.backend_url.port_or_known_default().unwrap_or(8000)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// A local backend checkout the client starts and stops itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendLaunch {
    pub backend_dir: PathBuf,
    pub python: String,
}
