//! Access to the external character catalog.
//!
//! The engine only needs one capability from the catalog: given a page
//! number, return that page's characters. `HttpCatalog` talks to the
//! public REST API; `StaticCatalog` serves fixed pages from memory.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::cards::CharacterRecord;
use crate::core::CatalogConfig;
use crate::error::CatalogError;

/// Source of catalog pages.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Characters on a 1-based page.
    async fn fetch_page(&self, page: u32) -> Result<Vec<CharacterRecord>, CatalogError>;
}

/// Pagination block of a catalog response.
#[derive(Clone, Debug, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    info: PageInfo,
    results: Vec<CharacterRecord>,
}

/// Catalog client over HTTP.
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client configured from `CATALOG_BASE_URL` / `CATALOG_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::new(&CatalogConfig::from_env())
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}/character?page={}", self.base_url, page)
    }

    async fn fetch(&self, page: u32) -> Result<PageResponse, CatalogError> {
        let url = self.page_url(page);
        debug!(%url, "fetching catalog page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        parse_page(&body)
    }

    /// Current number of pages, for recomputing `DraftConfig::page_count`.
    pub async fn page_count(&self) -> Result<u32, CatalogError> {
        Ok(self.fetch(1).await?.info.pages)
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CharacterRecord>, CatalogError> {
        Ok(self.fetch(page).await?.results)
    }
}

fn parse_page(body: &[u8]) -> Result<PageResponse, CatalogError> {
    serde_json::from_slice(body).map_err(|e| CatalogError::Malformed(e.to_string()))
}

/// In-memory catalog. Page `n` is `pages[n - 1]`; other pages answer 404.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    pages: Vec<Vec<CharacterRecord>>,
    requests: AtomicUsize,
}

impl StaticCatalog {
    pub fn new(pages: Vec<Vec<CharacterRecord>>) -> Self {
        Self {
            pages,
            requests: AtomicUsize::new(0),
        }
    }

    /// Single-page catalog.
    pub fn single_page(records: Vec<CharacterRecord>) -> Self {
        Self::new(vec![records])
    }

    /// The first twenty characters of the public catalog, as one page.
    pub fn sample() -> Self {
        const NAMES: [&str; 20] = [
            "Rick Sanchez",
            "Morty Smith",
            "Summer Smith",
            "Beth Smith",
            "Jerry Smith",
            "Abadango Cluster Princess",
            "Abradolf Lincler",
            "Adjudicator Rick",
            "Agency Director",
            "Alan Rails",
            "Albert Einstein",
            "Alexander",
            "Alien Googah",
            "Alien Morty",
            "Alien Rick",
            "Amish Cyborg",
            "Annie",
            "Antenna Morty",
            "Antenna Rick",
            "Ants in my Eyes Johnson",
        ];

        let records = NAMES
            .iter()
            .zip(1u32..)
            .map(|(name, id)| {
                CharacterRecord::new(
                    id,
                    *name,
                    format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
                )
            })
            .collect();
        Self::single_page(records)
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Number of `fetch_page` calls served so far.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CharacterRecord>, CatalogError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .cloned()
            .ok_or(CatalogError::Status(404))
    }
}
