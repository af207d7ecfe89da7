use crate::model::{Page, ProcessError, ProcessOutput, Route};
use crate::processor::{Processor, write_artifact};
use crate::utils::{normalize_whitespace, resolve_link};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use scraper::Selector;
use tracing::debug;

static LINKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

/// Collects the navigational links of a page.
pub struct RouteProcessor {
    site_name: String,
    output_folder: PathBuf,
}

impl RouteProcessor {
    pub fn new(site_name: &str, output_folder: &Path) -> Self {
        Self {
            site_name: site_name.to_string(),
            output_folder: output_folder.to_path_buf(),
        }
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.output_folder.join(format!("{}_routes.json", self.site_name))
    }
}

impl Processor for RouteProcessor {
    fn process(&self, page: &Page) -> Result<ProcessOutput, ProcessError> {
        let routes = extract_routes(page);
        let path = self.artifact_path();
        write_artifact(&path, serde_json::to_string_pretty(&routes)?.as_bytes())?;
        debug!("Wrote {} routes to {}", routes.len(), path.display());
        Ok(ProcessOutput::Routes(routes))
    }
}

pub fn extract_routes(page: &Page) -> Vec<Route> {
    let mut seen = HashSet::new();
    let mut routes = Vec::new();

    for anchor in page.html.select(&LINKS) {
        let Some(url) = anchor.value().attr("href").and_then(|href| resolve_link(&page.url, href)) else {
            continue;
        };
        let href = url.to_string();
        if !seen.insert(href.clone()) {
            continue;
        }

        routes.push(Route {
            internal: url.host_str() == page.url.host_str(),
            text: normalize_whitespace(&anchor.text().collect::<String>()),
            href,
        });
    }

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::page;
    use std::fs;

    const NAV: &str = r##"
        <nav>
          <a href="/about">About
             us</a>
          <a href="docs/intro.html#part-2">Intro</a>
          <a href="/about#team">Team</a>
          <a href="#top">Top</a>
          <a href="mailto:hi@example.com">Mail</a>
          <a href="https://other.org/x">Elsewhere</a>
          <a>No href</a>
        </nav>"##;

    #[test]
    fn resolves_filters_and_dedups_links() {
        let routes = extract_routes(&page("https://example.com/home/", NAV));

        assert_eq!(
            routes,
            vec![
                Route { href: "https://example.com/about".into(), text: "About us".into(), internal: true },
                Route { href: "https://example.com/home/docs/intro.html".into(), text: "Intro".into(), internal: true },
                Route { href: "https://other.org/x".into(), text: "Elsewhere".into(), internal: false },
            ]
        );
    }

    #[test]
    fn writes_routes_json() {
        let dir = tempfile::tempdir().unwrap();
        let processor = RouteProcessor::new("example", dir.path());

        processor.process(&page("https://example.com/home/", NAV)).unwrap();

        let written = fs::read_to_string(dir.path().join("example_routes.json")).unwrap();
        let parsed: Vec<Route> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn page_without_links_gives_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let processor = RouteProcessor::new("example", dir.path());

        let out = processor.process(&page("https://example.com", "<p>plain</p>")).unwrap();

        assert_eq!(out, ProcessOutput::Routes(Vec::new()));
    }
}
