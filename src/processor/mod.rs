// Content processors: each one extracts a single concern from a parsed page
// and writes its own artifact into the site's output folder.

pub mod image;
pub mod route;
pub mod text;

pub use image::ImageProcessor;
pub use route::RouteProcessor;
pub use text::TextProcessor;

use crate::model::{Page, ProcessError, ProcessOutput, ProcessorKind};
use std::fs;
use std::path::Path;

pub trait Processor {
    fn process(&self, page: &Page) -> Result<ProcessOutput, ProcessError>;
}

impl ProcessorKind {
    /// Constructs the processor for this kind, bound to a site and its output folder.
    pub fn build(self, site_name: &str, output_folder: &Path) -> Box<dyn Processor> {
        match self {
            ProcessorKind::Text => Box::new(TextProcessor::new(site_name, output_folder)),
            ProcessorKind::Route => Box::new(RouteProcessor::new(site_name, output_folder)),
            ProcessorKind::Image => Box::new(ImageProcessor::new(site_name, output_folder)),
        }
    }
}

fn write_artifact(path: &Path, contents: &[u8]) -> Result<(), ProcessError> {
    fs::write(path, contents).map_err(|source| ProcessError::Io {
        path: path.to_path_buf(),
        source,
    })
}
