use crate::model::{FetchError, Page};

/// Retrieves and parses a single page.
pub trait Fetcher {
    fn get_page_content(&self, url: &str) -> Result<Page, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn get_page_content(&self, url: &str) -> Result<Page, FetchError> {
        (**self).get_page_content(url)
    }
}
