// Core structs: ScrapeTarget, Page, ProcessOutput and the error enums
use chrono::{DateTime, Utc};
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeTarget {
    pub url: String,
    pub website_name: String,
}

impl ScrapeTarget {
    pub fn new(url: impl Into<String>, website_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            website_name: website_name.into(),
        }
    }
}

/// A fetched page, parsed once and lent to every processor.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub html: Html,
    pub fetched_at: DateTime<Utc>,
}

impl Page {
    pub fn parse(url: Url, markup: &str) -> Self {
        Self {
            url,
            html: Html::parse_document(markup),
            fetched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub href: String,
    pub text: String,
    pub internal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutput {
    Text(String),
    Routes(Vec<Route>),
    Images(Vec<ImageRef>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
    Text,
    Route,
    Image,
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessorKind::Text => "text",
            ProcessorKind::Route => "route",
            ProcessorKind::Image => "image",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url {0}")]
    InvalidUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid website name {0:?}")]
    InvalidSiteName(String),
    #[error("failed to create output folder {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("{processor} processor failed: {source}")]
    Processing {
        processor: ProcessorKind,
        #[source]
        source: ProcessError,
    },
}
