mod client;
mod extractor;
mod headings;
mod page;
mod spec;

pub use client::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, UsmsClient};
pub use extractor::{PageExtractor, extract_swimmer_info};
pub use headings::{age_from_heading, detect_course_type_from_header, swimmer_from_heading};
pub use page::{PageElement, TableRow, collect_elements};
pub use spec::{SwimmerLocator, profile_url, swimmer_id_from_url, validate_swimmer_id};

use std::sync::Arc;

use performance::models::ScrapedData;
use tracing::info;

use crate::{Result, traits::ResultsSource};

/// Locator in, scraped page out. Transport failures are errors; a page with
/// no results is `Ok(None)`.
#[derive(Clone)]
pub struct SwimmerImporter {
    source: Arc<dyn ResultsSource>,
    extractor: PageExtractor,
}

impl SwimmerImporter {
    pub fn new(source: Arc<dyn ResultsSource>, extractor: PageExtractor) -> Self {
        Self { source, extractor }
    }

    pub fn usms() -> Result<Self> {
        Ok(Self::new(Arc::new(UsmsClient::new()?), PageExtractor::default()))
    }

    pub async fn scrape(&self, locator: &SwimmerLocator) -> Result<Option<ScrapedData>> {
        info!(
            "Scraping {} results from {}",
            self.source.name(),
            locator.url()
        );

        let html = self.source.fetch_page(locator.url()).await?;
        let data = self.extractor.extract(&html);

        match &data {
            Some(data) => info!(
                "Extracted {} results for {}",
                data.results.len(),
                data.swimmer.name
            ),
            None => info!("No results extracted from {}", locator.url()),
        }

        Ok(data)
    }

    pub fn extractor(&self) -> &PageExtractor {
        &self.extractor
    }
}
