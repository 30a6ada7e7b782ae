//! Client for the national-park-service site: state index page, per-state
//! catalog pages, and per-site detail pages.

use std::time::Duration;

use reqwest::Client;

use parkscout_core::{Site, StateIndex};

use crate::error::ScraperError;
use crate::html;

/// Class marker of the state-search dropdown widget on the index page.
const STATE_DROPDOWN_CLASS: &str = "dropdown-menu SearchBar-keywordSearch";

/// Class marker of one site cell on a state catalog page.
const CATALOG_ROW_CLASS: &str = "col-md-9 col-sm-9 col-xs-12 table-cell list_left";

/// HTTP client for nps.gov page scraping.
///
/// All lookups are sequential; a structural mismatch on any page surfaces
/// as [`ScraperError::MissingElement`] and is fatal for the whole lookup.
pub struct NpsClient {
    client: Client,
    base_url: String,
}

impl NpsClient {
    /// Creates an `NpsClient` with configured timeout and `User-Agent`.
    ///
    /// `base_url` is the site origin (e.g. `https://www.nps.gov`); catalog
    /// and detail hrefs scraped from pages are joined onto it.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches the index page and builds the state index: every anchor in
    /// the state-search dropdown, keyed by lowercased link text, mapped to
    /// the absolute catalog-page URL.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::MissingElement`] — dropdown widget absent, or it
    ///   contains no anchors.
    /// - [`ScraperError::UnexpectedStatus`] / [`ScraperError::Http`] — the
    ///   page could not be fetched.
    pub async fn fetch_state_index(&self) -> Result<StateIndex, ScraperError> {
        let url = format!("{}/index.htm", self.base_url);
        let body = self.fetch_page(&url).await?;

        let block = html::class_block(&body, STATE_DROPDOWN_CLASS, "</ul>").ok_or_else(|| {
            ScraperError::MissingElement {
                what: "state-search dropdown",
                url: url.clone(),
            }
        })?;

        let mut index = StateIndex::new();
        for (href, text) in html::anchors(block) {
            index.insert(text.to_lowercase(), format!("{}{href}", self.base_url));
        }
        if index.is_empty() {
            return Err(ScraperError::MissingElement {
                what: "state links",
                url,
            });
        }

        tracing::info!(states = index.len(), "built state index");
        Ok(index)
    }

    /// Fetches a state catalog page and resolves every listed site into a
    /// [`Site`], in catalog display order.
    ///
    /// Each catalog row contributes one detail-page URL (`base + href +
    /// "index.htm"`); detail pages are fetched sequentially, one request
    /// per site.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::MissingElement`] — a catalog row has no anchor,
    ///   or a detail page lacks one of its required fields.
    /// - [`ScraperError::UnexpectedStatus`] / [`ScraperError::Http`] — any
    ///   page could not be fetched. Fatal for the whole state lookup.
    pub async fn fetch_sites_for_state(
        &self,
        catalog_url: &str,
    ) -> Result<Vec<Site>, ScraperError> {
        let body = self.fetch_page(catalog_url).await?;

        let mut detail_urls = Vec::new();
        for row in html::class_blocks(&body, CATALOG_ROW_CLASS) {
            let href = html::first_href(row).ok_or_else(|| ScraperError::MissingElement {
                what: "site link in catalog row",
                url: catalog_url.to_owned(),
            })?;
            detail_urls.push(format!("{}{href}index.htm", self.base_url));
        }

        tracing::info!(url = catalog_url, sites = detail_urls.len(), "scraping site catalog");

        let mut sites = Vec::with_capacity(detail_urls.len());
        for detail_url in &detail_urls {
            sites.push(self.fetch_site(detail_url).await?);
        }
        Ok(sites)
    }

    /// Fetches one detail page and parses the five site fields.
    async fn fetch_site(&self, url: &str) -> Result<Site, ScraperError> {
        let body = self.fetch_page(url).await?;

        let missing = |what: &'static str| ScraperError::MissingElement {
            what,
            url: url.to_owned(),
        };

        let name = html::class_text(&body, "Hero-title").ok_or_else(|| missing("site title"))?;
        let category =
            html::class_text(&body, "Hero-designation").ok_or_else(|| missing("designation"))?;
        let city = html::itemprop_text(&body, "addressLocality")
            .ok_or_else(|| missing("address locality"))?;
        let state =
            html::itemprop_text(&body, "addressRegion").ok_or_else(|| missing("address region"))?;
        let zipcode =
            html::class_text(&body, "postal-code").ok_or_else(|| missing("postal code"))?;
        let phone =
            html::itemprop_text(&body, "telephone").ok_or_else(|| missing("telephone"))?;

        Ok(Site::new(&name, &category, &city, &state, &zipcode, &phone))
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "fetching page");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}
