use async_trait::async_trait;
use thiserror::Error;

use crate::content::gviz;
use crate::types::Record;

/// Host serving published spreadsheets through the gviz endpoint.
pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

#[derive(Debug, Error)]
pub enum ContentError {
    /// The content source was unreachable or returned a non-success status.
    #[error("request to content source failed: {0}")]
    Fetch(#[from] reqwest::Error),
    /// The response body is too short (or not sliceable) at the fixed
    /// envelope offsets.
    #[error("response does not fit the gviz envelope ({len} bytes)")]
    Envelope { len: usize },
    /// The text between the envelope offsets is not a valid table payload.
    #[error("envelope payload is not valid table JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can return a named table of labeled columns and value rows.
///
/// The gviz envelope quirk lives entirely behind this seam; a conventional
/// JSON or CSV backend can substitute without touching [`super::ContentStore`].
#[async_trait]
pub trait TableSource {
    async fn fetch_table(&self, table: &str) -> Result<Vec<Record>, ContentError>;
}

/// A published spreadsheet queried through the gviz tabular-query endpoint:
/// `<base>/<source_id>/gviz/tq?sheet=<table>`.
#[derive(Debug, Clone)]
pub struct SheetSource {
    client: reqwest::Client,
    base_url: String,
    source_id: String,
}

impl SheetSource {
    pub fn new(source_id: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), source_id)
    }

    /// Use a caller-configured client (timeouts, proxies). No timeout is
    /// imposed here; that belongs to the transport.
    pub fn with_client(client: reqwest::Client, source_id: impl Into<String>) -> Self {
        SheetSource {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            source_id: source_id.into(),
        }
    }

    /// Point at a different host serving the same endpoint convention.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn table_url(&self) -> String {
        format!("{}/{}/gviz/tq", self.base_url, self.source_id)
    }
}

#[async_trait]
impl TableSource for SheetSource {
    async fn fetch_table(&self, table: &str) -> Result<Vec<Record>, ContentError> {
        let body = self
            .client
            .get(self.table_url())
            .query(&[("sheet", table)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        gviz::decode_table(&body)
    }
}
