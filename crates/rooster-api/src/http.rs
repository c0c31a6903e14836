// HTTP backend for the data facade
//
// Wraps `reqwest::Client` with base-URL joining, status checking, and
// body decoding. 404 on a by-id endpoint is an absent record, not a
// failure.

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{Publication, Shift};
use crate::source::DataSource;
use crate::transport::TransportConfig;

/// Network-backed [`DataSource`] speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: Url,
    timeout_ms: u64,
}

impl HttpSource {
    /// Create a client from a `TransportConfig`.
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: transport.base_url.clone(),
            timeout_ms: transport.timeout_ms(),
        })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    ///
    /// Used by tests to point at a mock server.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            timeout_ms: TransportConfig::default().timeout_ms(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/{path}`, tolerating a trailing slash on the base.
    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET and decode a JSON body. Any non-success status is an error.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        self.get_optional(url).await?.ok_or_else(|| Error::Status {
            status: StatusCode::NOT_FOUND.as_u16(),
            message: "Not Found".into(),
        })
    }

    /// GET and decode a JSON body, mapping 404 to `None`.
    async fn get_optional<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                Error::Transport(e)
            }
        })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_owned(),
            });
        }

        let body = resp.text().await?;
        trace!(bytes = body.len(), "response body received");
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            })
    }
}

impl DataSource for HttpSource {
    async fn get_publications(&self) -> Result<Vec<Publication>, Error> {
        self.get(self.endpoint("publications")?).await
    }

    async fn get_publication_by_id(&self, id: &str) -> Result<Option<Publication>, Error> {
        let mut url = self.endpoint("publications")?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(id);
        self.get_optional(url).await
    }

    async fn search_publications(&self, query: &str) -> Result<Vec<Publication>, Error> {
        let mut url = self.endpoint("publications/search")?;
        url.query_pairs_mut().append_pair("q", query);
        self.get(url).await
    }

    async fn get_shifts(&self, date: Option<NaiveDate>) -> Result<Vec<Shift>, Error> {
        let mut url = self.endpoint("shifts")?;
        if let Some(date) = date {
            url.query_pairs_mut()
                .append_pair("date", &date.format("%Y-%m-%d").to_string());
        }
        self.get(url).await
    }

    async fn get_shift_by_id(&self, id: &str) -> Result<Option<Shift>, Error> {
        let mut url = self.endpoint("shifts")?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(id);
        self.get_optional(url).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let source = HttpSource::from_reqwest("http://localhost:3000/api/", reqwest::Client::new())
            .unwrap();
        assert_eq!(
            source.endpoint("shifts").unwrap().as_str(),
            "http://localhost:3000/api/shifts"
        );
    }
}
