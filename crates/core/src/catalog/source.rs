//! Where the catalog document comes from, and the startup loader.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use super::{Catalog, CatalogError};
use crate::metrics::{CATALOG_FALLBACKS, CATALOG_ITEMS};

/// A location the raw catalog document can be read from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Read the raw catalog document.
    async fn fetch(&self) -> Result<String, CatalogError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Catalog stored in a local file.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog served over HTTP(S).
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Http(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Http(format!("timed out fetching {}", self.url))
                } else {
                    CatalogError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Http(format!("{} returned {}", self.url, status)));
        }

        response
            .text()
            .await
            .map_err(|e| CatalogError::Http(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Pick a source for a configured location: `http(s)://` URLs are fetched,
/// anything else is read as a file path.
pub fn source_for(
    location: &str,
    timeout: Duration,
) -> Result<Box<dyn CatalogSource>, CatalogError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpCatalogSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileCatalogSource::new(location)))
    }
}

/// Fetch and parse the catalog, ordered newest first.
pub async fn try_load_catalog(source: &dyn CatalogSource) -> Result<Catalog, CatalogError> {
    let text = source.fetch().await?;
    Ok(Catalog::from_json(&text)?.newest_first())
}

/// Load the catalog, substituting the built-in sample on any failure.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    let catalog = match try_load_catalog(source).await {
        Ok(catalog) => {
            info!(
                source = %source.describe(),
                items = catalog.len(),
                "Catalog loaded"
            );
            catalog
        }
        Err(e) => {
            error!(
                source = %source.describe(),
                error = %e,
                "Error loading catalog, using built-in sample"
            );
            CATALOG_FALLBACKS.inc();
            Catalog::sample()
        }
    };

    CATALOG_ITEMS.set(catalog.len() as i64);
    catalog
}
