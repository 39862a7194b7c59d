//! Fetching the catalog, once per session.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Catalog, Error};

/// The catalog document used when no other URL is configured.
pub static DEFAULT_CATALOG_URL: &str =
    "https://gist.githubusercontent.com/jonasfroeller/e466eefd7e359b0b9afaae0325fa633f/raw/0d544d28d680ff20df8a492b477c152ead0be149/webfonts.json";
static DEFAULT_USER_AGENT: &str = concat!("webfont-tester/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_MAX_BODY_SIZE: u64 = 10 * 1024 * 1024;

/// Where and how to fetch the catalog.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use webfont_tester::FetchOptions;
///
/// let opts = FetchOptions::default()
///     .url("https://example.com/webfonts.json")
///     .timeout(Duration::from_secs(5));
/// assert_eq!(opts.timeout_ms, 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FetchOptions {
    /// The URL of the catalog document.
    pub url: String,
    /// Overall timeout for the request, in milliseconds.
    pub timeout_ms: u64,
    /// Largest accepted response body, in bytes.
    pub max_body_size: u64,
    /// The `User-Agent` header sent with the request.
    pub user_agent: String,
}

impl FetchOptions {
    /// Fetch from this URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Give up on the request after this long.
    ///
    /// The timeout is kept in whole milliseconds, rounding up.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    /// Reject responses larger than this many bytes.
    pub fn max_body_size(mut self, bytes: u64) -> Self {
        self.max_body_size = bytes;
        self
    }

    /// Send this `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The timeout as a [`Duration`].
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            url: DEFAULT_CATALOG_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Something that can produce a catalog.
///
/// Implemented for [`HttpFetcher`] and for any closure returning a catalog,
/// which is convenient for loading from disk or in tests.
pub trait CatalogFetcher {
    /// Produce the catalog.
    fn fetch(&self) -> Result<Catalog, Error>;
}

impl<F> CatalogFetcher for F
where
    F: Fn() -> Result<Catalog, Error>,
{
    fn fetch(&self) -> Result<Catalog, Error> {
        self()
    }
}

/// Fetches the catalog with a single HTTP GET.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    options: FetchOptions,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    /// Create a fetcher with these options.
    pub fn new(options: FetchOptions) -> Self {
        HttpFetcher { options }
    }

    /// The options this fetcher uses.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    fn agent(&self) -> ureq::Agent {
        use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

        let tls_config = TlsConfig::builder()
            .provider(TlsProvider::NativeTls)
            .root_certs(RootCerts::PlatformVerifier)
            .build();

        ureq::Agent::config_builder()
            .tls_config(tls_config)
            .timeout_global(Some(self.options.timeout_duration()))
            .build()
            .into()
    }
}

#[cfg(feature = "fetch")]
impl CatalogFetcher for HttpFetcher {
    fn fetch(&self) -> Result<Catalog, Error> {
        let url = &self.options.url;
        let fetch_err = |e: ureq::Error| Error::Fetch { url: url.clone(), source: Box::new(e) };

        log::debug!("fetching font catalog from {}", url);
        let body = self
            .agent()
            .get(url)
            .header("User-Agent", &self.options.user_agent)
            .call()
            .map_err(fetch_err)?
            .into_body()
            .with_config()
            .limit(self.options.max_body_size)
            .read_to_string()
            .map_err(fetch_err)?;
        log::debug!("received {} bytes of catalog", body.len());

        let catalog = Catalog::from_json(&body)?;
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(catalog)
    }
}

/// Where the session's catalog is.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// No fetch has been attempted yet.
    #[default]
    NotLoaded,
    /// The catalog is available.
    Loaded(Arc<Catalog>),
    /// The fetch failed. The error is kept for display.
    Failed(Arc<Error>),
}

impl LoadState {
    /// Returns the catalog, if loaded.
    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        match self {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Returns the error, if the fetch failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            LoadState::Failed(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` once the catalog is loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }
}

/// Holds the catalog for the lifetime of a session.
///
/// The first call to [`CatalogCache::load`] fetches the catalog; later calls
/// return the cached result, including a cached failure. Fetching again
/// only happens through an explicit [`CatalogCache::reload`].
#[derive(Debug)]
pub struct CatalogCache<F> {
    fetcher: F,
    state: LoadState,
}

impl<F: CatalogFetcher> CatalogCache<F> {
    /// Create an empty cache around a fetcher.
    pub fn new(fetcher: F) -> Self {
        CatalogCache { fetcher, state: LoadState::NotLoaded }
    }

    /// The current state, without fetching.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Fetch the catalog if no attempt has been made yet, and return the
    /// resulting state.
    pub fn load(&mut self) -> &LoadState {
        if matches!(self.state, LoadState::NotLoaded) {
            self.fetch_now();
        }
        &self.state
    }

    /// Discard the cached state and fetch again.
    pub fn reload(&mut self) -> &LoadState {
        log::debug!("reloading font catalog");
        self.fetch_now();
        &self.state
    }

    /// Fetch if needed and return the catalog, or the error of the failed
    /// fetch.
    pub fn catalog(&mut self) -> Result<Arc<Catalog>, Arc<Error>> {
        match self.load() {
            LoadState::Loaded(catalog) => Ok(catalog.clone()),
            LoadState::Failed(err) => Err(err.clone()),
            LoadState::NotLoaded => unreachable!("load never leaves the state NotLoaded"),
        }
    }

    fn fetch_now(&mut self) {
        self.state = match self.fetcher.fetch() {
            Ok(catalog) => {
                log::debug!("catalog cached with {} families", catalog.len());
                LoadState::Loaded(Arc::new(catalog))
            }
            Err(e) => {
                log::warn!("could not load font catalog: {}", e);
                LoadState::Failed(Arc::new(e))
            }
        };
    }
}

#[cfg(feature = "fetch")]
impl CatalogCache<HttpFetcher> {
    /// A cache that fetches over HTTP with the given options.
    pub fn http(options: FetchOptions) -> Self {
        CatalogCache::new(HttpFetcher::new(options))
    }
}
