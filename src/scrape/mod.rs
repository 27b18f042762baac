// src/scrape/mod.rs
pub mod fetcher;
pub mod paginate;
pub mod parser;

pub use fetcher::{FetchError, HttpListingFetcher, ListingFetcher};
pub use paginate::paginate;
pub use parser::ListingParser;

use serde::{Deserialize, Serialize};
use tracing::info;

/// One normalized posting extracted from the upstream page.
///
/// `id` is a 1-based counter over the blocks found in one fetch+parse pass;
/// it carries no identity across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
}

/// The listing read path: fetch -> parse -> paginate, composed fresh for
/// every request. No cache, so concurrent callers may observe different
/// upstream content; that is the contract.
pub struct ScrapeService {
    fetcher: Box<dyn ListingFetcher>,
    parser: ListingParser,
    listing_url: String,
    page_size: usize,
}

impl ScrapeService {
    pub fn new(
        fetcher: Box<dyn ListingFetcher>,
        parser: ListingParser,
        listing_url: String,
        page_size: usize,
    ) -> Self {
        Self {
            fetcher,
            parser,
            listing_url,
            page_size,
        }
    }

    /// Fetch the upstream page and return the requested 1-based page of
    /// parsed listings. Touches no shared state across the await.
    pub async fn listings(&self, page: usize) -> Result<Vec<JobListing>, FetchError> {
        let html = self.fetcher.fetch(&self.listing_url).await?;
        let all = self.parser.parse(&html);
        info!("Parsed {} listings from upstream page", all.len());
        Ok(paginate(&all, page, self.page_size))
    }
}
