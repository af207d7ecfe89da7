// Page retrieval and the scrape pipeline

pub mod fetcher;
pub mod pipeline;
pub mod traits;

pub use fetcher::HttpFetcher;
pub use pipeline::Scraper;
pub use traits::Fetcher;
