//! The discovery orchestrator.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::FindError;
use crate::filter::IconFilter;
use crate::rank::{ByWidth, IconRank};
use crate::types::Icon;
use crate::{html, manifest, normalize, social, well_known};

const DEFAULT_USER_AGENT: &str = "favscan/0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Discovers site icons for a URL.
///
/// A `Finder` looks in the following places:
///
/// - the HTML page at the given URL, for icons in `<link>` tags and for
///   Open Graph / Twitter images;
/// - the JSON manifest named by the page, or `/manifest.json`;
/// - well-known paths on the server (`/favicon.ico`,
///   `/apple-touch-icon.png`).
///
/// Candidates from all sources are normalized, deduplicated, run through
/// the filter chain and ranked. A `Finder` is immutable once built and can
/// be reused across any number of discovery calls; disable manifest lookup
/// or well-known probing via the builder to reduce the number of requests
/// made to webservers.
pub struct Finder {
    manifest: bool,
    well_known: bool,
    well_known_names: Vec<String>,
    filters: Vec<Box<dyn IconFilter>>,
    rank: Box<dyn IconRank>,
    client: Client,
}

/// Configures and builds a [`Finder`].
pub struct FinderBuilder {
    manifest: bool,
    well_known: bool,
    well_known_names: Vec<String>,
    filters: Vec<Box<dyn IconFilter>>,
    rank: Box<dyn IconRank>,
    client: Option<Client>,
    timeout_secs: u64,
    user_agent: String,
}

impl Default for FinderBuilder {
    fn default() -> Self {
        Self {
            manifest: true,
            well_known: true,
            well_known_names: well_known::WELL_KNOWN_NAMES
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
            filters: Vec::new(),
            rank: Box::new(ByWidth),
            client: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl FinderBuilder {
    /// Enables or disables manifest lookup (default: enabled).
    #[must_use]
    pub fn manifest(mut self, enabled: bool) -> Self {
        self.manifest = enabled;
        self
    }

    /// Enables or disables well-known path probing (default: enabled).
    #[must_use]
    pub fn well_known(mut self, enabled: bool) -> Self {
        self.well_known = enabled;
        self
    }

    /// Replaces the list of well-known names probed at the site root.
    #[must_use]
    pub fn well_known_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.well_known_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a filter to the chain. Filters run in insertion order.
    #[must_use]
    pub fn filter<F: IconFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Replaces the ranking policy (default: [`ByWidth`]).
    #[must_use]
    pub fn rank<R: IconRank + 'static>(mut self, rank: R) -> Self {
        self.rank = Box::new(rank);
        self
    }

    /// Uses the given HTTP client instead of building one.
    ///
    /// Timeout and user-agent settings on the builder are ignored when a
    /// client is supplied; deadlines live in the client.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Request timeout for the built-in client (default: 30s).
    #[must_use]
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// `User-Agent` for the built-in client.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Freezes the configuration into a [`Finder`].
    ///
    /// # Errors
    ///
    /// Returns [`FindError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g. invalid TLS config).
    pub fn build(self) -> Result<Finder, FindError> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .timeout(Duration::from_secs(self.timeout_secs))
                .connect_timeout(Duration::from_secs(10))
                .user_agent(&self.user_agent)
                .build()?,
        };
        Ok(Finder {
            manifest: self.manifest,
            well_known: self.well_known,
            well_known_names: self.well_known_names,
            filters: self.filters,
            rank: self.rank,
            client,
        })
    }
}

impl Finder {
    /// Starts configuring a new `Finder`.
    #[must_use]
    pub fn builder() -> FinderBuilder {
        FinderBuilder::default()
    }

    /// Finds icons for the page at `url`.
    ///
    /// Extractors run sequentially (markup, social, manifest, well-known);
    /// their individual failures are logged and skipped. The result is the
    /// ranked, deduplicated candidate list, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns an error only when `url` is unparsable or the page itself
    /// cannot be fetched (including any status >= 300).
    pub async fn find(&self, url: &str) -> Result<Vec<Icon>, FindError> {
        let base = Url::parse(url).map_err(|err| FindError::InvalidUrl {
            url: url.to_owned(),
            reason: err.to_string(),
        })?;
        let body = self.fetch_url(url).await?;
        let page = String::from_utf8_lossy(&body);
        Ok(self.scan(&page, Some(&base)).await)
    }

    /// Finds icons in an HTML document already in hand.
    ///
    /// `base_url` is used to resolve relative links; without it, relative
    /// candidates are dropped during normalization and well-known probing
    /// contributes nothing. Manifest lookup still runs when enabled and a
    /// manifest URL can be resolved.
    ///
    /// # Errors
    ///
    /// Returns [`FindError::InvalidUrl`] if `base_url` does not parse.
    pub async fn find_in_html(
        &self,
        page: &str,
        base_url: Option<&str>,
    ) -> Result<Vec<Icon>, FindError> {
        let base = match base_url {
            Some(raw) => Some(Url::parse(raw).map_err(|err| FindError::InvalidUrl {
                url: raw.to_owned(),
                reason: err.to_string(),
            })?),
            None => None,
        };
        Ok(self.scan(page, base.as_ref()).await)
    }

    /// Runs the extractor pipeline over parsed markup.
    async fn scan(&self, page: &str, base: Option<&Url>) -> Vec<Icon> {
        let scan = html::parse_page(page, base);
        if let Some(charset) = &scan.charset {
            tracing::debug!(%charset, "page charset");
        }

        let mut icons = scan.icons;
        icons.extend(social::parse_opengraph(&scan.opengraph));
        icons.extend(social::parse_twitter(&scan.twitter));
        if self.manifest {
            icons.extend(self.fetch_manifest(&scan.manifest_url, base).await);
        }
        if self.well_known {
            if let Some(base) = base {
                icons.extend(self.probe_well_known(base).await);
            }
        }

        let icons = normalize::dedupe(icons, base);
        let mut icons: Vec<Icon> = icons
            .into_iter()
            .filter_map(|icon| self.apply_filters(icon))
            .collect();
        icons.sort_by(|a, b| self.rank.compare(a, b));
        icons
    }

    fn apply_filters(&self, mut icon: Icon) -> Option<Icon> {
        for filter in &self.filters {
            icon = filter.apply(icon)?;
        }
        Some(icon)
    }

    /// Fetches and expands the manifest. Any failure means zero icons.
    async fn fetch_manifest(&self, url: &str, base: Option<&Url>) -> Vec<Icon> {
        tracing::debug!(url, "loading manifest");
        match self.fetch_url(url).await {
            Ok(bytes) => manifest::parse_manifest_bytes(&bytes, base),
            Err(err) => {
                tracing::warn!(url, error = %err, "manifest fetch failed");
                Vec::new()
            }
        }
    }

    /// Probes the well-known root paths for existence.
    ///
    /// Bodies are discarded; a failed probe only omits that name.
    async fn probe_well_known(&self, base: &Url) -> Vec<Icon> {
        let mut icons = Vec::new();
        for url in well_known::well_known_urls(base, &self.well_known_names) {
            match self.fetch_url(&url).await {
                Ok(_) => {
                    tracing::debug!(url = %url, "well-known icon");
                    icons.push(Icon {
                        url,
                        ..Icon::default()
                    });
                }
                Err(err) => tracing::debug!(url = %url, error = %err, "well-known probe failed"),
            }
        }
        icons
    }

    /// Retrieves a URL and returns the response body.
    ///
    /// Any response status >= 300 is an error.
    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>, FindError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        tracing::debug!(status, url, "fetched");
        if status >= 300 {
            return Err(FindError::UnexpectedStatus {
                status,
                url: url.to_owned(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
