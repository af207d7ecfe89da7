use crate::model::{ImageRef, Page, ProcessError, ProcessOutput};
use crate::processor::{Processor, write_artifact};
use crate::utils::{normalize_whitespace, resolve_link};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use scraper::Selector;
use tracing::debug;

static IMAGES: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").expect("static selector"));

pub struct ImageProcessor {
    site_name: String,
    output_folder: PathBuf,
}

impl ImageProcessor {
    pub fn new(site_name: &str, output_folder: &Path) -> Self {
        Self {
            site_name: site_name.to_string(),
            output_folder: output_folder.to_path_buf(),
        }
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.output_folder.join(format!("{}_images.json", self.site_name))
    }
}

impl Processor for ImageProcessor {
    fn process(&self, page: &Page) -> Result<ProcessOutput, ProcessError> {
        let images = extract_images(page);
        let path = self.artifact_path();
        write_artifact(&path, serde_json::to_string_pretty(&images)?.as_bytes())?;
        debug!("Wrote {} image refs to {}", images.len(), path.display());
        Ok(ProcessOutput::Images(images))
    }
}

pub fn extract_images(page: &Page) -> Vec<ImageRef> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for img in page.html.select(&IMAGES) {
        let el = img.value();
        // Lazy-loaded images keep a placeholder in src and the real source in data-src.
        let resolved = ["src", "data-src"]
            .into_iter()
            .filter_map(|attr| el.attr(attr))
            .find_map(|raw| resolve_link(&page.url, raw));
        let Some(url) = resolved else {
            continue;
        };
        let src = url.to_string();
        if !seen.insert(src.clone()) {
            continue;
        }

        let alt = el
            .attr("alt")
            .map(normalize_whitespace)
            .filter(|alt| !alt.is_empty());
        images.push(ImageRef { src, alt });
    }

    images
}
