//! `ingest` sub-command.
//!

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, warn};

use igcinfo_engine::{Repository, TrackError, TrackId, TrackParser};

/// What happened to one URL.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IngestStatus {
    New,
    Duplicate,
    Failed,
}

/// One line of output per URL.
///
#[derive(Clone, Debug, Serialize)]
pub struct IngestRow {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TrackId>,
    pub status: IngestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IngestRow {
    pub fn failed(&self) -> bool {
        self.status == IngestStatus::Failed
    }
}

/// Ingest all URLs in order, a failure does not stop the others.
///
#[tracing::instrument(skip(repo))]
pub async fn ingest_urls<P: TrackParser>(repo: &Repository<P>, urls: &[String]) -> Vec<IngestRow> {
    let mut rows = Vec::with_capacity(urls.len());
    for url in urls {
        let row = match repo.ingest(url).await {
            Ok(r) => IngestRow {
                url: r.url,
                id: Some(r.id),
                status: IngestStatus::New,
                error: None,
            },
            Err(TrackError::Duplicate { id, url }) => {
                info!("{url} already there as {id}");
                IngestRow {
                    url,
                    id: Some(id),
                    status: IngestStatus::Duplicate,
                    error: None,
                }
            }
            Err(e) => {
                warn!("{url}: {e}");
                IngestRow {
                    url: url.clone(),
                    id: None,
                    status: IngestStatus::Failed,
                    error: Some(e.to_string()),
                }
            }
        };
        rows.push(row);
    }
    rows
}

/// Display the rows as a table.
///
pub fn ingest_table(rows: &[IngestRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Id", "URL", "Status"]);
    for row in rows {
        let id = row.id.map(|id| id.to_string()).unwrap_or_default();
        let status = match &row.error {
            Some(e) => format!("{}: {}", row.status, e),
            None => row.status.to_string(),
        };
        builder.push_record([id, row.url.clone(), status]);
    }
    builder.build().with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rows() -> Vec<IngestRow> {
        vec![
            IngestRow {
                url: "http://x/a.igc".to_string(),
                id: Some("1".parse().unwrap()),
                status: IngestStatus::New,
                error: None,
            },
            IngestRow {
                url: "http://x/b.igc".to_string(),
                id: None,
                status: IngestStatus::Failed,
                error: Some("boom".to_string()),
            },
        ]
    }

    #[test]
    fn test_ingest_rows_json() {
        assert_eq!(
            json!([
                {"url": "http://x/a.igc", "id": "1", "status": "new"},
                {"url": "http://x/b.igc", "status": "failed", "error": "boom"},
            ]),
            json!(rows())
        );
    }

    #[test]
    fn test_ingest_table() {
        let t = ingest_table(&rows());
        assert!(t.contains("http://x/a.igc"));
        assert!(t.contains("new"));
        assert!(t.contains("failed: boom"));
    }
}
