//! Test utilities for pkgproxy unit tests.
//!
//! Provides a [`MockFetcher`] standing in for the upstream repository and
//! fixture helpers for populating index directories.

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use url::Url;

use crate::index::{FetchError, Fetcher};

pub use fixtures::*;

/// Canned upstream responses, keyed by URL.
///
/// Every request is recorded. URLs without a canned response answer with
/// HTTP 404.
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    responses: HashMap<String, Result<Vec<u8>, u16>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    /// Create a fetcher with no canned responses.
    pub fn new() -> Self {
        MockFetcher::default()
    }

    /// Answer `url` with `body`.
    pub fn respond(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.to_string(), Ok(body.into()));
        self
    }

    /// Answer `url` with an HTTP error status.
    pub fn fail(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Err(status));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.responses.get(url.as_str()) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status { status: *status }),
            None => Err(FetchError::Status { status: 404 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fetcher_records_requests() {
        let fetcher = MockFetcher::new().respond("https://example.com/a", b"a".to_vec());

        let a = Url::parse("https://example.com/a").unwrap();
        let b = Url::parse("https://example.com/b").unwrap();

        assert_eq!(fetcher.fetch(&a).unwrap(), b"a");
        assert!(matches!(
            fetcher.fetch(&b),
            Err(FetchError::Status { status: 404 })
        ));
        assert_eq!(
            fetcher.requests(),
            vec!["https://example.com/a".to_string(), "https://example.com/b".to_string()]
        );
    }
}
