//! The Yahoo client and its builder. The cookie/crumb handshake lives in `auth`.

mod auth;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::core::YfError;

/// Desktop browser UA; the provider throttles obvious bots harder.
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/124.0.0.0 Safari/537.36"
);

const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";
const DEFAULT_BASE_TIMESERIES: &str =
    "https://query2.finance.yahoo.com/ws/fundamentals-timeseries/v1/finance/timeseries/";
const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com/consent";
const DEFAULT_CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";

/// Holds a configured HTTP client, the endpoint base URLs and the session crumb.
///
/// Cloning is cheap. Clones share the crumb, so the handshake runs at most once
/// per family of clones.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: Client,
    base_chart: Url,
    base_timeseries: Url,
    cookie_url: Url,
    crumb_url: Url,

    crumb: Arc<RwLock<Option<String>>>,
    credential_fetch_lock: Arc<Mutex<()>>,
}

impl YfClient {
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }

    pub(crate) fn base_timeseries(&self) -> &Url {
        &self.base_timeseries
    }

    /// Sends a request and turns any non-2xx answer into [`YfError::Status`].
    pub(crate) async fn send(&self, req: RequestBuilder) -> Result<Response, YfError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%status, url = %resp.url(), "provider answered with an error status");
            return Err(YfError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }
        Ok(resp)
    }
}

/// Configures a [`YfClient`]. Every endpoint defaults to the public Yahoo hosts.
#[derive(Debug, Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_timeseries: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,

    #[cfg(feature = "test-mode")]
    preauth: Option<(String, String)>,
}

impl YfClientBuilder {
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Chart API base; the symbol is appended.
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Fundamentals-timeseries API base; the symbol is appended.
    #[must_use]
    pub fn base_timeseries(mut self, url: Url) -> Self {
        self.base_timeseries = Some(url);
        self
    }

    /// The URL that hands out the consent cookie.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Overall request timeout. None by default.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Connect timeout. None by default.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Skips the handshake: `cookie` is sent with every request and `crumb` is used as is.
    #[cfg(feature = "test-mode")]
    #[must_use]
    pub fn preauth(mut self, cookie: impl Into<String>, crumb: impl Into<String>) -> Self {
        self.preauth = Some((cookie.into(), crumb.into()));
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<YfClient, YfError> {
        let url_or = |url: Option<Url>, default: &str| url.map_or_else(|| Url::parse(default), Ok);

        let mut http = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);
        if let Some(t) = self.timeout {
            http = http.timeout(t);
        }
        if let Some(t) = self.connect_timeout {
            http = http.connect_timeout(t);
        }

        #[cfg(feature = "test-mode")]
        let crumb = match self.preauth {
            Some((cookie, crumb)) => {
                let mut headers = reqwest::header::HeaderMap::new();
                let value = reqwest::header::HeaderValue::from_str(&cookie)
                    .map_err(|_| YfError::Auth("preauth cookie is not a valid header".into()))?;
                headers.insert(reqwest::header::COOKIE, value);
                http = http.default_headers(headers);
                Some(crumb)
            }
            None => None,
        };
        #[cfg(not(feature = "test-mode"))]
        let crumb = None;

        Ok(YfClient {
            http: http.build()?,
            base_chart: url_or(self.base_chart, DEFAULT_BASE_CHART)?,
            base_timeseries: url_or(self.base_timeseries, DEFAULT_BASE_TIMESERIES)?,
            cookie_url: url_or(self.cookie_url, DEFAULT_COOKIE_URL)?,
            crumb_url: url_or(self.crumb_url, DEFAULT_CRUMB_URL)?,
            crumb: Arc::new(RwLock::new(crumb)),
            credential_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}
