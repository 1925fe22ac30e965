//! Upstream archive downloads.

use std::time::Duration;

use url::Url;

use crate::index::FetchError;

/// Blocking retrieval of an archive from an upstream repository.
pub trait Fetcher {
    /// Download `url` and return the response body.
    ///
    /// Non-success responses are errors.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

/// [`Fetcher`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("pkgproxy/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpFetcher {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        tracing::info!("Downloading {}", url);

        let response = self.client.get(url.clone()).send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes()?;
        tracing::debug!("Downloaded {} bytes from {}", bytes.len(), url);

        Ok(bytes.to_vec())
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;

    fn url(server: &MockServer, path: &str) -> Url {
        Url::parse(&server.url(path)).unwrap()
    }

    #[test]
    fn test_fetch_returns_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/packages/source/s/spam/spam-0.1.2.tar.gz");
            then.status(200).body("spam archive");
        });

        let fetcher = HttpFetcher::with_timeout(None).unwrap();
        let body = fetcher
            .fetch(&url(&server, "/packages/source/s/spam/spam-0.1.2.tar.gz"))
            .unwrap();

        mock.assert();
        assert_eq!(body, b"spam archive");
    }

    #[test]
    fn test_fetch_not_found_is_status_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/packages/source/e/eggs/eggs-1.0.tar.gz");
            then.status(404);
        });

        let fetcher = HttpFetcher::with_timeout(None).unwrap();
        let err = fetcher
            .fetch(&url(&server, "/packages/source/e/eggs/eggs-1.0.tar.gz"))
            .unwrap_err();

        mock.assert();
        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[test]
    fn test_fetch_connection_refused_is_transport_error() {
        let fetcher = HttpFetcher::with_timeout(Some(Duration::from_secs(2))).unwrap();
        let err = fetcher
            .fetch(&Url::parse("http://127.0.0.1:9/spam-0.1.2.tar.gz").unwrap())
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }
}
