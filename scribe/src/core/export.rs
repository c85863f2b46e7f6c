use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::render::{render_markdown, render_print_document};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format '{0}' (expected text, markdown or html)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(ExportFormat::Text),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" | "print" => Ok(ExportFormat::Html),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Text => "text",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Html => "html",
        };
        f.write_str(name)
    }
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// The downloadable body for `script`. `title` heads the printable page.
    pub fn render(&self, script: &str, title: &str) -> String {
        match self {
            ExportFormat::Text => script.to_string(),
            ExportFormat::Markdown => render_markdown(script),
            ExportFormat::Html => render_print_document(script, title),
        }
    }
}

fn slug(raw: &str, fallback: &str) -> String {
    let raw = if raw.trim().is_empty() { fallback } else { raw };
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

/// `{name}-{title}-{millis}.{ext}`, with every non-alphanumeric character
/// replaced by `-`.
pub fn suggested_filename(podcast_name: &str, episode_title: &str, format: ExportFormat, millis: i64) -> String {
    format!(
        "{}-{}-{}.{}",
        slug(podcast_name, "podcast"),
        slug(episode_title, "script"),
        millis,
        format.extension()
    )
}

/// [`suggested_filename`] stamped with the current time.
pub fn download_filename(podcast_name: &str, episode_title: &str, format: ExportFormat) -> String {
    suggested_filename(podcast_name, episode_title, format, Utc::now().timestamp_millis())
}
