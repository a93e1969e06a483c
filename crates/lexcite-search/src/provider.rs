//! Opinion-search provider implementations
//!
//! `CourtListenerClient` talks to a CourtListener-compatible search API.
//! `MockSearch` is a deterministic in-process double for tests and offline
//! runs.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use chrono::NaiveDate;
use lexcite_domain::traits::OpinionSearch;
use lexcite_domain::{OpinionHit, OpinionId};
use serde::Deserialize;

use crate::SearchError;

/// Default search API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.courtlistener.com";

/// Default HTTP timeout for the underlying client (seconds)
///
/// The executor applies its own, tighter per-request timeout on top; this
/// is a backstop against a hung connection.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Client for a CourtListener-compatible opinion search API
pub struct CourtListenerClient {
    endpoint: String,
    token: Option<String>,
    client: reqwest::Client,
}

/// One result row of the search endpoint
#[derive(Deserialize)]
struct WireResult {
    id: u64,
    cluster_id: Option<u64>,
    #[serde(rename = "caseName")]
    case_name: String,
    #[serde(default)]
    citation: Vec<String>,
    court: String,
    #[serde(rename = "dateFiled")]
    date_filed: Option<String>,
    #[serde(default)]
    snippet: String,
    absolute_url: Option<String>,
    status: Option<String>,
}

/// Response envelope of the search endpoint
#[derive(Deserialize)]
struct WireResponse {
    results: Vec<WireResult>,
}

impl CourtListenerClient {
    /// Create a client for the given endpoint
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lexcite_search::CourtListenerClient;
    ///
    /// let client = CourtListenerClient::new("https://www.courtlistener.com", None);
    /// ```
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            token,
            client,
        }
    }

    /// Create a client for the default public endpoint
    pub fn default_endpoint(token: Option<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, token)
    }

    fn convert(result: WireResult) -> OpinionHit {
        let date_filed = result
            .date_filed
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

        OpinionHit {
            id: OpinionId(result.id),
            cluster_id: result.cluster_id,
            case_name: result.case_name,
            citation: result.citation.into_iter().next().unwrap_or_default(),
            court: result.court,
            date_filed,
            snippet: result.snippet,
            url: result.absolute_url,
            precedential: matches!(result.status.as_deref(), Some("Precedential") | None),
        }
    }
}

impl OpinionSearch for CourtListenerClient {
    type Error = SearchError;

    async fn search(
        &self,
        query: &str,
        court_scope: &str,
        max_results: usize,
    ) -> Result<Vec<OpinionHit>, Self::Error> {
        let url = format!("{}/api/rest/v4/search/", self.endpoint);
        let page_size = max_results.to_string();

        let mut request = self.client.get(&url).query(&[
            ("q", query),
            ("type", "o"),
            ("court", court_scope),
            ("page_size", page_size.as_str()),
        ]);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Token {}", token));
        }

        let response = request.send().await?.error_for_status()?;
        let body: WireResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        Ok(body.results.into_iter().map(Self::convert).collect())
    }
}

/// Deterministic search double for tests and offline runs
///
/// Responses are keyed by query text; unknown queries return the default
/// hit list (empty unless configured). The mock also tracks peak in-flight
/// concurrency so executor tests can assert the semaphore cap held.
///
/// # Examples
///
/// ```
/// use lexcite_search::MockSearch;
///
/// let mock = MockSearch::new().with_hits("motion to compel", vec![]);
/// ```
#[derive(Default)]
pub struct MockSearch {
    responses: HashMap<String, Vec<OpinionHit>>,
    failures: HashSet<String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockSearch {
    /// Create an empty mock (every query returns no hits)
    pub fn new() -> Self {
        Self::default()
    }

    /// Register hits for a query
    pub fn with_hits(mut self, query: impl Into<String>, hits: Vec<OpinionHit>) -> Self {
        self.responses.insert(query.into(), hits);
        self
    }

    /// Make a query fail with a communication error
    pub fn with_failure(mut self, query: impl Into<String>) -> Self {
        self.failures.insert(query.into());
        self
    }

    /// Delay every response, to exercise timeout handling
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queries received so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Highest number of simultaneously in-flight searches observed
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl OpinionSearch for MockSearch {
    type Error = SearchError;

    async fn search(
        &self,
        query: &str,
        _court_scope: &str,
        max_results: usize,
    ) -> Result<Vec<OpinionHit>, Self::Error> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        self.calls.lock().unwrap().push(query.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failures.contains(query) {
            return Err(SearchError::Other(format!("injected failure for '{}'", query)));
        }

        let hits = self.responses.get(query).cloned().unwrap_or_default();
        Ok(hits.into_iter().take(max_results).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64) -> OpinionHit {
        OpinionHit {
            id: OpinionId(id),
            cluster_id: None,
            case_name: "Smith v. Jones".to_string(),
            citation: "123 So.3d 456".to_string(),
            court: "Louisiana Supreme Court".to_string(),
            date_filed: NaiveDate::from_ymd_opt(2020, 1, 1),
            snippet: String::new(),
            url: None,
            precedential: true,
        }
    }

    #[tokio::test]
    async fn test_mock_returns_registered_hits() {
        let mock = MockSearch::new().with_hits("q1", vec![hit(1), hit(2)]);
        let hits = mock.search("q1", "state-supreme", 10).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_unknown_query_is_empty() {
        let mock = MockSearch::new();
        let hits = mock.search("unknown", "state-supreme", 10).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_mock_truncates_to_max_results() {
        let mock = MockSearch::new().with_hits("q1", vec![hit(1), hit(2), hit(3)]);
        let hits = mock.search("q1", "state-supreme", 2).await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_injected_failure() {
        let mock = MockSearch::new().with_failure("boom");
        assert!(mock.search("boom", "state-supreme", 10).await.is_err());
    }

    #[test]
    fn test_wire_conversion_parses_date_and_citation() {
        let wire = WireResult {
            id: 7,
            cluster_id: Some(70),
            case_name: "Smith v. Jones".to_string(),
            citation: vec!["250 So.3d 1012".to_string(), "2018-0123".to_string()],
            court: "Louisiana Supreme Court".to_string(),
            date_filed: Some("2018-05-04".to_string()),
            snippet: "…".to_string(),
            absolute_url: None,
            status: Some("Precedential".to_string()),
        };
        let hit = CourtListenerClient::convert(wire);
        assert_eq!(hit.id, OpinionId(7));
        assert_eq!(hit.citation, "250 So.3d 1012");
        assert_eq!(hit.date_filed, NaiveDate::from_ymd_opt(2018, 5, 4));
        assert!(hit.precedential);
    }

    #[test]
    fn test_wire_conversion_tolerates_missing_fields() {
        let wire = WireResult {
            id: 8,
            cluster_id: None,
            case_name: "Doe v. Roe".to_string(),
            citation: vec![],
            court: "La. App. 1 Cir.".to_string(),
            date_filed: Some("not-a-date".to_string()),
            snippet: String::new(),
            absolute_url: None,
            status: None,
        };
        let hit = CourtListenerClient::convert(wire);
        assert_eq!(hit.citation, "");
        assert!(hit.date_filed.is_none());
    }
}
