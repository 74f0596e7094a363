//! Fallback search: primary provider with timeout and retries, mock data
//! when the provider cannot answer.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tripwise_core::FlightPriceSelection;

use crate::client::{FlightSearchClient, MockFlightClient};
use crate::select::select_cheapest;
use crate::types::{Direction, FlightOffer, FlightQuery, FlightSearchError};

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Per-attempt deadline
    pub timeout: Duration,
    /// Total attempts against the primary provider (at least 1)
    pub max_attempts: u32,
    /// Pause between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_attempts: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSearchResult {
    /// Provider that produced `offers`
    pub provider: String,
    /// True when the offers are placeholder data
    pub fallback: bool,
    pub offers: Vec<FlightOffer>,
    /// Cheapest outbound (and return) fares, ready for the estimator
    pub selection: Option<FlightPriceSelection>,
}

pub struct FallbackFlightSearch<C> {
    primary: C,
    mock: MockFlightClient,
    retry: RetryPolicy,
}

impl<C: FlightSearchClient> FallbackFlightSearch<C> {
    pub fn new(primary: C) -> Self {
        Self {
            primary,
            mock: MockFlightClient::new(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Search the primary provider, falling back to mock offers on any
    /// failure, timeout or answer without an outbound offer. Only an
    /// invalid query is an error.
    pub async fn search(&self, query: &FlightQuery) -> Result<FlightSearchResult, FlightSearchError> {
        query.validate()?;

        match self.try_primary(query).await {
            Ok(offers) => Ok(result(self.primary.name(), false, offers)),
            Err(err) => {
                warn!(
                    provider = self.primary.name(),
                    error = %err,
                    "flight search failed, using mock offers"
                );
                let offers = self.mock.search(query).await?;
                Ok(result(self.mock.name(), true, offers))
            }
        }
    }

    async fn try_primary(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, FlightSearchError> {
        let attempts = self.retry.max_attempts.max(1);
        let mut last_error = FlightSearchError::Provider("no attempts made".to_string());

        for attempt in 1..=attempts {
            let outcome = tokio::time::timeout(self.retry.timeout, self.primary.search(query)).await;
            match outcome {
                Ok(Ok(offers)) if has_outbound(&offers) => {
                    debug!(provider = self.primary.name(), attempt, count = offers.len(), "flight offers received");
                    return Ok(offers);
                }
                Ok(Ok(_)) => {
                    last_error = FlightSearchError::Provider("no outbound offers returned".to_string());
                }
                Ok(Err(err @ FlightSearchError::InvalidQuery(_))) => return Err(err),
                Ok(Err(err)) => last_error = err,
                Err(_) => {
                    last_error = FlightSearchError::Timeout(self.retry.timeout.as_millis() as u64);
                }
            }

            debug!(provider = self.primary.name(), attempt, error = %last_error, "flight search attempt failed");
            if attempt < attempts && !self.retry.backoff.is_zero() {
                tokio::time::sleep(self.retry.backoff).await;
            }
        }

        Err(last_error)
    }
}

fn has_outbound(offers: &[FlightOffer]) -> bool {
    offers.iter().any(|o| o.direction == Direction::Outbound)
}

fn result(provider: &str, fallback: bool, offers: Vec<FlightOffer>) -> FlightSearchResult {
    FlightSearchResult {
        provider: provider.to_string(),
        fallback,
        selection: select_cheapest(&offers),
        offers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn query() -> FlightQuery {
        FlightQuery {
            source: "Madrid".to_string(),
            destination: "Lima".to_string(),
            depart: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2025, 6, 24),
            travelers: 1,
        }
    }

    fn fast_retry() -> RetryPolicy {
        RetryPolicy {
            timeout: Duration::from_millis(50),
            max_attempts: 3,
            backoff: Duration::ZERO,
        }
    }

    fn offer(direction: Direction, price: f64) -> FlightOffer {
        FlightOffer {
            id: format!("{:?}-{}", direction, price),
            carrier: "Test Air".to_string(),
            direction,
            price,
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            departs_at: "09:00".to_string(),
            duration_minutes: 600,
            stops: 0,
        }
    }

    /// Fails a fixed number of times, then answers
    struct Flaky {
        failures: u32,
        calls: AtomicU32,
    }

    #[async_trait]
    impl FlightSearchClient for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn search(&self, _query: &FlightQuery) -> Result<Vec<FlightOffer>, FlightSearchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(FlightSearchError::Provider("503".to_string()))
            } else {
                Ok(vec![offer(Direction::Outbound, 420.0), offer(Direction::Return, 380.0)])
            }
        }
    }

    struct Slow;

    #[async_trait]
    impl FlightSearchClient for Slow {
        fn name(&self) -> &str {
            "slow"
        }

        async fn search(&self, _query: &FlightQuery) -> Result<Vec<FlightOffer>, FlightSearchError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![offer(Direction::Outbound, 100.0)])
        }
    }

    struct Empty;

    #[async_trait]
    impl FlightSearchClient for Empty {
        fn name(&self) -> &str {
            "empty"
        }

        async fn search(&self, _query: &FlightQuery) -> Result<Vec<FlightOffer>, FlightSearchError> {
            Ok(Vec::new())
        }
    }

    struct ReturnOnly;

    #[async_trait]
    impl FlightSearchClient for ReturnOnly {
        fn name(&self) -> &str {
            "return-only"
        }

        async fn search(&self, _query: &FlightQuery) -> Result<Vec<FlightOffer>, FlightSearchError> {
            Ok(vec![offer(Direction::Return, 210.0)])
        }
    }

    #[tokio::test]
    async fn test_primary_success() {
        let search = FallbackFlightSearch::new(Flaky { failures: 0, calls: AtomicU32::new(0) })
            .with_retry(fast_retry());
        let result = search.search(&query()).await.unwrap();
        assert_eq!(result.provider, "flaky");
        assert!(!result.fallback);
        assert_eq!(result.selection, Some(FlightPriceSelection {
            outbound: 420.0,
            return_fare: Some(380.0),
            carrier: Some("Test Air".to_string()),
        }));
    }

    #[tokio::test]
    async fn test_retry_recovers() {
        let search = FallbackFlightSearch::new(Flaky { failures: 2, calls: AtomicU32::new(0) })
            .with_retry(fast_retry());
        let result = search.search(&query()).await.unwrap();
        assert!(!result.fallback);
        assert_eq!(search.primary.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausted_retries_fall_back() {
        let search = FallbackFlightSearch::new(Flaky { failures: 10, calls: AtomicU32::new(0) })
            .with_retry(fast_retry());
        let result = search.search(&query()).await.unwrap();
        assert!(result.fallback);
        assert_eq!(result.provider, "mock");
        assert!(!result.offers.is_empty());
        assert!(result.selection.is_some());
        assert_eq!(search.primary.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let search = FallbackFlightSearch::new(Slow).with_retry(RetryPolicy {
            timeout: Duration::from_millis(20),
            max_attempts: 1,
            backoff: Duration::ZERO,
        });
        let result = search.search(&query()).await.unwrap();
        assert!(result.fallback);
    }

    #[tokio::test]
    async fn test_empty_answer_falls_back() {
        let search = FallbackFlightSearch::new(Empty).with_retry(fast_retry());
        let result = search.search(&query()).await.unwrap();
        assert!(result.fallback);
        assert_eq!(result.offers.len(), 8);
    }

    #[tokio::test]
    async fn test_return_only_answer_falls_back() {
        let search = FallbackFlightSearch::new(ReturnOnly).with_retry(fast_retry());
        let result = search.search(&query()).await.unwrap();
        assert!(result.fallback);
        assert_eq!(result.provider, "mock");
        assert!(result.selection.is_some());
    }

    #[tokio::test]
    async fn test_invalid_query_is_an_error() {
        let search = FallbackFlightSearch::new(Empty).with_retry(fast_retry());
        let mut q = query();
        q.return_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        let err = search.search(&q).await.unwrap_err();
        assert!(matches!(err, FlightSearchError::InvalidQuery(_)));
    }
}
