use super::{decode_records, RecordSource};
use crate::error::{OrgTableError, Result};
use crate::model::Record;
use std::time::Duration;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("orgtable/", env!("CARGO_PKG_VERSION"));

/// Fetches the collection from the remote record service.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching records");

        let response = self.client.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(OrgTableError::Status(status.as_u16()));
        }

        let body = response.text()?;
        decode_records(&body)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.endpoint)
    }
}
