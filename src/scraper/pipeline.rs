use crate::model::{ProcessOutput, ProcessorKind, ScrapeError, ScrapeTarget};
use crate::scraper::traits::Fetcher;
use crate::utils::is_valid_site_name;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Fetches one page and runs the configured processors over it.
///
/// The output folder `<outputs_root>/<website_name>` is created when the
/// scraper is built, so it exists before any processor runs.
pub struct Scraper<F> {
    target: ScrapeTarget,
    output_folder: PathBuf,
    fetcher: F,
    processors: Vec<ProcessorKind>,
}

impl<F: Fetcher> Scraper<F> {
    pub fn new(target: ScrapeTarget, outputs_root: &Path, fetcher: F) -> Result<Self, ScrapeError> {
        if !is_valid_site_name(&target.website_name) {
            return Err(ScrapeError::InvalidSiteName(target.website_name));
        }

        let output_folder = outputs_root.join(&target.website_name);
        fs::create_dir_all(&output_folder).map_err(|source| ScrapeError::OutputDir {
            path: output_folder.clone(),
            source,
        })?;

        Ok(Self {
            target,
            output_folder,
            fetcher,
            processors: vec![ProcessorKind::Text],
        })
    }

    /// Replaces the processor list. Processors run in the given order.
    pub fn with_processors(mut self, processors: Vec<ProcessorKind>) -> Self {
        self.processors = processors;
        self
    }

    pub fn target(&self) -> &ScrapeTarget {
        &self.target
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// Runs the pipeline, logging any fault and returning the first processor's output.
    pub fn scrape(&self) -> Option<ProcessOutput> {
        match self.try_scrape() {
            Ok(outputs) => outputs.into_iter().next(),
            Err(e) => {
                error!("Error scraping {}: {}", self.target.url, e);
                None
            }
        }
    }

    /// Runs the pipeline and returns every processor's output in order.
    pub fn try_scrape(&self) -> Result<Vec<ProcessOutput>, ScrapeError> {
        let page = self.fetcher.get_page_content(&self.target.url)?;
        debug!("Fetched {} at {}", page.url, page.fetched_at.to_rfc3339());

        let mut outputs = Vec::with_capacity(self.processors.len());
        for &kind in &self.processors {
            let processor = kind.build(&self.target.website_name, &self.output_folder);
            let output = processor
                .process(&page)
                .map_err(|source| ScrapeError::Processing { processor: kind, source })?;
            debug!("{} processor finished for {}", kind, self.target.website_name);
            outputs.push(output);
        }

        Ok(outputs)
    }
}
