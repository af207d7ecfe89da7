//! Fetches a page, runs content processors over it and writes their
//! artifacts under `<outputs_root>/<website_name>/`.
//!
//! - `scraper`: the `Fetcher` trait, an HTTP fetcher and the `Scraper` pipeline
//! - `processor`: text, route and image extraction
//! - `config`: JSON configuration for the binary

pub mod config;
pub mod model;
pub mod processor;
pub mod scraper;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::{AppConfig, load_config};
pub use model::{FetchError, Page, ProcessError, ProcessOutput, ProcessorKind, ScrapeError, ScrapeTarget};
pub use processor::Processor;
pub use scraper::{Fetcher, HttpFetcher, Scraper};
