use std::{sync::Arc, time::Duration};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::auth::TokenProvider;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/";

/// Status code and (possibly absent) JSON body of a finished request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn new(status_code: u16, data: Option<Value>) -> Self {
        Self { status_code, data }
    }
}

/// The HTTP seam. Expected status codes come back as `Ok`; only transport
/// level failures (DNS, refused connections, timeouts) are `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<ApiResponse>;
    async fn post(&self, url: Url, body: Value, token: Option<String>) -> Result<ApiResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn finish(resp: reqwest::Response) -> Result<ApiResponse> {
        let status_code = resp.status().as_u16();
        let text = resp.text().await?;
        // Non-JSON bodies (html error pages and such) are dropped.
        let data = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };
        Ok(ApiResponse { status_code, data })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<ApiResponse> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        Self::finish(resp).await
    }

    async fn post(&self, url: Url, body: Value, token: Option<String>) -> Result<ApiResponse> {
        debug!("POST {}", url);
        let mut req = self.client.post(url).json(&body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;
        Self::finish(resp).await
    }
}

pub struct NetworkClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl<T: Transport> std::fmt::Debug for NetworkClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl NetworkClient<HttpTransport> {
    pub fn http(
        base_url: &str,
        tokens: Arc<dyn TokenProvider>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        Ok(Self::new(
            HttpTransport::new(timeout)?,
            parse_base_url(base_url)?,
            tokens,
        ))
    }
}

impl<T: Transport> NetworkClient<T> {
    pub fn new(transport: T, base_url: Url, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            transport,
            base_url,
            tokens,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.tokens.token()
    }

    /// Appends percent-encoded `segments` to the base url.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Base url {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) async fn get(&self, url: Url) -> Result<ApiResponse> {
        self.transport.get(url).await
    }

    pub(crate) async fn post(
        &self,
        url: Url,
        body: Value,
        token: Option<String>,
    ) -> Result<ApiResponse> {
        self.transport.post(url, body, token).await
    }
}

/// Parses a base url, making sure relative joins land below its path.
pub fn parse_base_url(s: &str) -> Result<Url> {
    let mut url = Url::parse(s)?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("{} cannot be used as an api base url", s));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
pub(crate) mod fake {
    use std::{collections::VecDeque, sync::Mutex};

    use super::*;
    use crate::auth::StaticToken;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Recorded {
        pub method: &'static str,
        pub url: Url,
        pub body: Option<Value>,
        pub token: Option<String>,
    }

    /// Answers requests from a queue of canned responses.
    #[derive(Default)]
    pub struct FakeTransport {
        pub responses: Mutex<VecDeque<Result<ApiResponse>>>,
        pub requests: Mutex<Vec<Recorded>>,
    }

    impl FakeTransport {
        pub fn with(responses: Vec<Result<ApiResponse>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(vec![]),
            }
        }

        pub fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }

        fn next(&self) -> Result<ApiResponse> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("connection refused")))
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get(&self, url: Url) -> Result<ApiResponse> {
            self.requests.lock().unwrap().push(Recorded {
                method: "GET",
                url,
                body: None,
                token: None,
            });
            self.next()
        }

        async fn post(&self, url: Url, body: Value, token: Option<String>) -> Result<ApiResponse> {
            self.requests.lock().unwrap().push(Recorded {
                method: "POST",
                url,
                body: Some(body),
                token,
            });
            self.next()
        }
    }

    pub fn client(responses: Vec<Result<ApiResponse>>, token: Option<&str>) -> NetworkClient<FakeTransport> {
        NetworkClient::new(
            FakeTransport::with(responses),
            parse_base_url("http://api.test/api").unwrap(),
            Arc::new(StaticToken::new(token.map(String::from))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = parse_base_url("http://localhost:3000/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/");
    }

    #[test]
    fn endpoint_encodes_segments() {
        let client = fake::client(vec![], None);
        let url = client
            .endpoint(&["storebranches", "search", "main st"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.test/api/storebranches/search/main%20st"
        );
    }

    #[test]
    fn empty_keyword_keeps_trailing_segment() {
        let client = fake::client(vec![], None);
        let url = client.endpoint(&["products", "search", ""]).unwrap();
        assert_eq!(url.as_str(), "http://api.test/api/products/search/");
    }

    #[test]
    fn rejects_non_base_url() {
        assert!(parse_base_url("mailto:someone@example.com").is_err());
    }
}
