//! # clikit Archive Download (`common::network::download`)
//!
//! File: cli/src/common/network/download.rs
//!
//! ## Overview
//!
//! Fetches a remote file (typically a `.zip` archive) over HTTP(S) and writes the
//! response body to a local path. There is no transformation, retry, resume, or
//! progress reporting: one GET, one output file.
//!
//! ## Architecture
//!
//! - `parse_source_url` accepts only absolute `http`/`https` URLs.
//! - `build_client` builds a `reqwest::Client` from [`DownloadConfig`].
//! - `download_with_client` issues the GET, rejects non-success statuses, then
//!   streams the body chunk by chunk into a newly created target file.
//! - `download` is the convenience form using a default client.
//!
//! The target file is only created once a successful response has arrived, so a
//! rejected URL or an HTTP error never leaves an empty or error-page file behind.
//! A failure while streaming the body leaves the partial file in place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clikit::common::network::download;
//! use std::path::Path;
//!
//! # async fn run() -> clikit::core::error::Result<()> {
//! download::download(
//!     "https://example.com/releases/tool-1.2.0.zip",
//!     Path::new("/tmp/tool.zip"),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::config::DownloadConfig;
use crate::core::error::{KitError, Result};
use futures_util::StreamExt;
use reqwest::{Client, Url};
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Parses `source` as an absolute `http`/`https` URL.
///
/// # Errors
///
/// `KitError::InvalidArgument` for anything that is not an absolute HTTP(S) URL
/// with a host (relative paths, other schemes, garbage).
pub fn parse_source_url(source: &str) -> Result<Url> {
    let url = Url::parse(source).map_err(|e| {
        KitError::InvalidArgument(format!("'{}' is not a valid URL: {}", source, e))
    })?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(KitError::InvalidArgument(format!(
            "'{}' is not an absolute HTTP(S) URL",
            source
        ))
        .into());
    }
    Ok(url)
}

/// Builds the HTTP client used for downloads.
pub fn build_client(config: &DownloadConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(secs) = config.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| KitError::Network(format!("Failed to build HTTP client: {}", e)).into())
}

/// Downloads `source` to `target` with a default client. Returns the number of bytes written.
pub async fn download(source: &str, target: &Path) -> Result<u64> {
    let client = build_client(&DownloadConfig::default())?;
    download_with_client(&client, source, target).await
}

/// Downloads `source` to `target` using `client`. Returns the number of bytes written.
///
/// # Errors
///
/// - `KitError::InvalidArgument` if `source` is not an absolute HTTP(S) URL.
/// - `KitError::Network` on transport failure or a non-success HTTP status.
/// - `KitError::Io` if `target` cannot be created or written.
pub async fn download_with_client(client: &Client, source: &str, target: &Path) -> Result<u64> {
    let url = parse_source_url(source)?;
    info!("Downloading {} to {:?}", url, target);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| KitError::Network(format!("GET {} failed: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(KitError::Network(format!("GET {} returned HTTP {}", url, status)).into());
    }
    debug!(
        "Response {} (content-length: {:?})",
        status,
        response.content_length()
    );

    let mut file = tokio::fs::File::create(target)
        .await
        .map_err(|e| KitError::io(target, e))?;
    let mut written = 0u64;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk
            .map_err(|e| KitError::Network(format!("Reading body of {} failed: {}", url, e)))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| KitError::io(target, e))?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|e| KitError::io(target, e))?;

    info!("Downloaded {} bytes to {:?}", written, target);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::kit_error;
    use tempfile::tempdir;

    #[test]
    fn test_parse_source_url_accepts_http_and_https() -> Result<()> {
        assert_eq!(
            parse_source_url("https://example.com/a.zip")?.as_str(),
            "https://example.com/a.zip"
        );
        assert_eq!(
            parse_source_url("http://127.0.0.1:8080/x")?.host_str(),
            Some("127.0.0.1")
        );
        Ok(())
    }

    #[test]
    fn test_parse_source_url_rejects_invalid() {
        for source in ["not-a-url", "", "/tmp/file.zip", "ftp://example.com/a.zip", "file:///etc/hosts"] {
            let err = parse_source_url(source).unwrap_err();
            assert!(
                matches!(kit_error(&err), Some(KitError::InvalidArgument(_))),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn test_build_client_with_timeout() {
        let config = DownloadConfig {
            user_agent: "clikit-test".into(),
            connect_timeout_secs: Some(3),
        };
        assert!(build_client(&config).is_ok());
    }

    #[tokio::test]
    async fn test_download_invalid_url_creates_nothing() -> Result<()> {
        let temp_dir = tempdir()?;
        let target = temp_dir.path().join("out.zip");

        let err = download("not-a-url", &target).await.unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::InvalidArgument(_))));
        assert!(!target.exists());
        Ok(())
    }
}
