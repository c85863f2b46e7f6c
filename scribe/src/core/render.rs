//! Line-oriented renderers for composed scripts.
//!
//! Both renderers share one classifier, so a line is treated the same way
//! whether it ends up as HTML or Markdown. They accept any text, not only
//! composer output.

use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[[0-9:]+\]").unwrap());
static SPEAKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z][a-z]+):\s*(.*)$").unwrap());

const AD_BREAK: &str = "AD BREAK";

/// Leading symbols that mark a header line.
const HEADER_SYMBOLS: [char; 10] = ['🎙', '📻', '📝', '⏱', '🎯', '🎭', '🏷', '🎵', '📱', '🎬'];

const VARIATION_SELECTOR: char = '\u{FE0F}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Header(&'a str),
    Timestamp(&'a str),
    AdBreak(&'a str),
    Speaker { name: &'a str, text: &'a str },
    Plain(&'a str),
}

/// First matching rule wins: blank, header, timestamp, ad break, speaker, plain.
///
/// A symbol-prefixed line carrying the ad marker (`🎯 AD BREAK`, as composed
/// with timestamps off) is an ad break, not a header.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    let is_ad = line.contains(AD_BREAK);
    if line.starts_with(HEADER_SYMBOLS) && !is_ad {
        return LineKind::Header(line);
    }
    if TIMESTAMP.is_match(line) {
        return LineKind::Timestamp(line);
    }
    if is_ad {
        return LineKind::AdBreak(line);
    }
    if let Some(caps) = SPEAKER.captures(line) {
        if let (Some(name), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineKind::Speaker {
                name: name.as_str(),
                text: text.as_str(),
            };
        }
    }
    LineKind::Plain(line)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML fragment for the on-page script view.
pub fn render_markup(script: &str) -> String {
    script
        .split('\n')
        .map(|line| match classify(line) {
            LineKind::Blank => "<br>".to_string(),
            LineKind::Header(l) => format!("<div class=\"script-header\">{}</div>", escape_html(l)),
            LineKind::Timestamp(l) => format!("<div class=\"script-timestamp\">{}</div>", escape_html(l)),
            LineKind::AdBreak(l) => format!("<div class=\"script-ad-break\">{}</div>", escape_html(l)),
            LineKind::Speaker { name, text } => format!(
                "<div class=\"script-speaker\"><span class=\"speaker-name\">{}:</span> {}</div>",
                escape_html(name),
                escape_html(text)
            ),
            LineKind::Plain(l) => format!("<div class=\"script-line\">{}</div>", escape_html(l)),
        })
        .collect()
}

fn strip_header_symbol(line: &str) -> &str {
    let rest = line.trim_start_matches(HEADER_SYMBOLS);
    rest.strip_prefix(VARIATION_SELECTOR).unwrap_or(rest).trim_start()
}

pub fn render_markdown(script: &str) -> String {
    script
        .split('\n')
        .filter_map(|line| match classify(line) {
            LineKind::Blank => None,
            LineKind::Header(l) => Some(format!("## {}", strip_header_symbol(l))),
            LineKind::Timestamp(l) => Some(format!("\n**{}**\n", l)),
            LineKind::AdBreak(l) => Some(format!("\n---\n\n### {}\n\n---\n", l)),
            // a bare "Name:" has nothing to bullet
            LineKind::Speaker { text: "", .. } => Some(line.to_string()),
            LineKind::Speaker { name, text } => Some(format!("- **{}**: {}", name, text)),
            LineKind::Plain(l) => Some(l.to_string()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A standalone page for printing, with the script kept as preformatted text.
pub fn render_print_document(script: &str, title: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: Arial, sans-serif; line-height: 1.6; margin: 20px; }}
h1 {{ color: #333; border-bottom: 2px solid #667eea; padding-bottom: 10px; }}
.script-content {{ white-space: pre-wrap; font-size: 14px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div class="script-content">{content}</div>
</body>
</html>
"#,
        title = title,
        content = escape_html(script)
    )
}
