use crate::model::{Page, ProcessError, ProcessOutput};
use crate::processor::{Processor, write_artifact};
use crate::utils::normalize_whitespace;

use scraper::{Html, Node, Selector};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").expect("static selector"));

/// Elements whose text never reaches the reader.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "br", "dd", "details", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "td", "th", "tr", "ul",
];

pub struct TextProcessor {
    site_name: String,
    output_folder: PathBuf,
}

impl TextProcessor {
    pub fn new(site_name: &str, output_folder: &Path) -> Self {
        Self {
            site_name: site_name.to_string(),
            output_folder: output_folder.to_path_buf(),
        }
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.output_folder.join(format!("{}_text.txt", self.site_name))
    }
}

impl Processor for TextProcessor {
    fn process(&self, page: &Page) -> Result<ProcessOutput, ProcessError> {
        let text = extract_text(&page.html);
        let path = self.artifact_path();
        write_artifact(&path, text.as_bytes())?;
        debug!("Wrote {} chars of text to {}", text.len(), path.display());
        Ok(ProcessOutput::Text(text))
    }
}

/// Visible body text. Inline runs are joined; block elements start a new line.
pub fn extract_text(html: &Html) -> String {
    let Some(body) = html.select(&BODY).next() else {
        return String::new();
    };

    let mut lines = TextLines::default();
    // `None` marks the end of a block element.
    let mut stack = vec![Some(*body)];
    while let Some(entry) = stack.pop() {
        let Some(node) = entry else {
            lines.break_line();
            continue;
        };
        match node.value() {
            Node::Text(text) => lines.push(text),
            Node::Element(el) if SKIPPED_TAGS.contains(&el.name()) => {}
            Node::Element(el) => {
                if BLOCK_TAGS.contains(&el.name()) {
                    lines.break_line();
                    stack.push(None);
                }
                stack.extend(node.children().rev().map(Some));
            }
            _ => {}
        }
    }

    lines.finish()
}

#[derive(Default)]
struct TextLines {
    lines: Vec<String>,
    current: String,
}

impl TextLines {
    fn push(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn break_line(&mut self) {
        let line = normalize_whitespace(&self.current);
        if !line.is_empty() {
            self.lines.push(line);
        }
        self.current.clear();
    }

    fn finish(mut self) -> String {
        self.break_line();
        self.lines.join("\n")
    }
}
