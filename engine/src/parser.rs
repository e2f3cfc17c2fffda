//! Getting a `Track` out of a URL.
//!
//! The repository only sees the `TrackParser` trait, `IgcFetcher` is the real thing: it fetches
//! the content over HTTP(S) or from the local filesystem, then hands it to the IGC parser.
//!

use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use eyre::Result;
use tracing::{debug, trace};

use igcinfo_formats::{Igc, Track};

use crate::{version, TrackError};

/// Fetch and decode a track.  Any failure is a `TrackError::Parse`.
///
pub trait TrackParser: Debug + Send + Sync + 'static {
    fn parse(&self, url: &str) -> impl Future<Output = Result<Track, TrackError>> + Send;
}

/// Fetch IGC files from `http://`, `https://`, `file://` or a plain path.
///
#[derive(Clone, Debug)]
pub struct IgcFetcher {
    client: reqwest::Client,
}

impl IgcFetcher {
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self> {
        let ua = user_agent.map(String::from).unwrap_or_else(version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(ua)
            .build()?;
        Ok(IgcFetcher { client })
    }

    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, TrackError> {
        let perr = |e: String| TrackError::Parse(url.to_string(), e);

        let body = if url.starts_with("http://") || url.starts_with("https://") {
            let resp = self
                .client
                .get(url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| perr(e.to_string()))?;
            let data = resp.bytes().await.map_err(|e| perr(e.to_string()))?;
            data.to_vec()
        } else if let Some(path) = url.strip_prefix("file://") {
            tokio::fs::read(path).await.map_err(|e| perr(e.to_string()))?
        } else if url.contains("://") {
            return Err(perr("unsupported scheme".to_string()));
        } else {
            tokio::fs::read(url).await.map_err(|e| perr(e.to_string()))?
        };

        debug!("{} bytes read.", body.len());
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl TrackParser for IgcFetcher {
    #[tracing::instrument(skip(self))]
    async fn parse(&self, url: &str) -> Result<Track, TrackError> {
        let data = self.fetch(url).await?;
        let track = Igc::parse(&data).map_err(|e| TrackError::Parse(url.to_string(), e.to_string()))?;
        trace!("{} fixes", track.fixes.len());
        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let f = IgcFetcher::new(Duration::from_secs(5), None).unwrap();
        let r = f.parse("ftp://example.com/a.igc").await;
        assert!(matches!(r, Err(TrackError::Parse(u, _)) if u == "ftp://example.com/a.igc"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let f = IgcFetcher::new(Duration::from_secs(5), Some("test/1.0")).unwrap();
        let r = f.parse("/nonexistent/dir/a.igc").await;
        assert!(matches!(r, Err(TrackError::Parse(_, _))));
    }
}
