use chrono::{DateTime, Local};

use crate::highlight::Highlighter;
use crate::layout;
use crate::logs::LogEntry;
use crate::palette::{self, Palette};
use crate::parse;

/// Every block and the panel header line are clipped to this many columns.
const MAX_WIDTH: usize = 120;

/// The Response section shows at most this many characters of the body.
const RESPONSE_PREVIEW_CHARS: usize = 1_000;

/// A titled content block inside a panel. Sections that would have no
/// content are never constructed, so an absent section contributes no
/// lines and no rule to the panel.
struct Section {
    title: &'static str,
    body: String,
    /// Whether the block is preceded by a separator rule. The Headers
    /// block is not; the header line's own rule already separates them.
    ruled: bool,
}

impl Section {
    fn render(&self, palette: &Palette) -> String {
        let block = layout::clip(
            &format!("{}\n{}", palette::bold(self.title), self.body),
            MAX_WIDTH,
        );
        if self.ruled {
            let rule = layout::rule(layout::block_width(&block), palette.border);
            format!("{rule}\n{block}")
        } else {
            block
        }
    }
}

fn headers_section(entry: &LogEntry, palette: &Palette) -> Option<Section> {
    let headers = parse::parse_headers(&entry.query_headers);
    if headers.is_empty() {
        return None;
    }
    let mut keys: Vec<&String> = headers.keys().collect();
    keys.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

    let lines: Vec<String> = keys
        .iter()
        .map(|key| format!("{}: {}", palette::colored(key, palette.key), headers[*key]))
        .collect();
    Some(Section {
        title: "Headers",
        body: lines.join("\n"),
        ruled: false,
    })
}

fn url_query_section(entry: &LogEntry, palette: &Palette) -> Option<Section> {
    let (_, params) = parse::decompose_url(&entry.url);
    if params.is_empty() {
        return None;
    }
    let lines: Vec<String> = params
        .iter()
        .map(|(key, values)| {
            format!(
                "{}: {}",
                palette::colored(key, palette.key),
                values.join(", ")
            )
        })
        .collect();
    Some(Section {
        title: "Query params (from URL)",
        body: lines.join("\n"),
        ruled: true,
    })
}

fn response_query_section(entry: &LogEntry) -> Option<Section> {
    let params = entry.query_params.as_deref()?;
    if params.is_empty() {
        return None;
    }
    Some(Section {
        title: "Query params (from response)",
        body: params.to_string(),
        ruled: true,
    })
}

fn request_body_section(entry: &LogEntry, highlighter: &Highlighter) -> Option<Section> {
    let body = parse::normalize_body(&entry.query_body)?;
    Some(Section {
        title: "Request body",
        body: highlighter.highlight(&body, "json"),
        ruled: true,
    })
}

fn response_section(
    entry: &LogEntry,
    with_response: bool,
    highlighter: &Highlighter,
) -> Option<Section> {
    if !with_response {
        return None;
    }
    let preview: String = entry
        .answer
        .trim_matches('\n')
        .chars()
        .take(RESPONSE_PREVIEW_CHARS)
        .collect();
    Some(Section {
        title: "Response (first 1,000 characters)",
        body: highlighter.highlight(&preview, "json"),
        ruled: true,
    })
}

fn iteration_badge(index: usize, palette: &Palette) -> String {
    format!("#{} {}", index + 1, palette::colored("│", palette.border))
}

fn method_badge(method: &str, palette: &Palette) -> String {
    let label = match palette.method_color(method) {
        Some(color) => palette::colored(method, color),
        None => method.to_string(),
    };
    format!(" {} {}", label, palette::colored("│", palette.border))
}

fn status_badge(status: &str, palette: &Palette) -> String {
    let label = match palette.status_color(status) {
        Some(color) => palette::colored(status, color),
        None => status.to_string(),
    };
    format!(" {} {}", label, palette::colored("│", palette.border))
}

fn path_badge(path: &str, palette: &Palette) -> String {
    format!(" {} {}", path, palette::colored("│", palette.border))
}

fn timestamp(raw: &str, palette: &Palette) -> String {
    let shown = match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    };
    format!(" {}", palette::colored(&shown, palette.subtle))
}

fn header_line(entry: &LogEntry, index: usize, palette: &Palette) -> String {
    let (path, _) = parse::decompose_url(&entry.url);
    let line = layout::clip(
        &format!(
            "{}{}{}{}{}",
            iteration_badge(index, palette),
            method_badge(&entry.method, palette),
            status_badge(&entry.answer_code, palette),
            path_badge(&path, palette),
            timestamp(&entry.timestamp, palette),
        ),
        MAX_WIDTH,
    );
    let rule = layout::rule(layout::visible_width(&line), palette.border);
    format!("{line}\n{rule}")
}

/// Builds the complete framed panel for one entry. `index` is the
/// zero-based running index (fetch offset plus position in the batch);
/// the iteration badge shows it one-based.
pub fn compose(
    entry: &LogEntry,
    index: usize,
    with_response: bool,
    palette: &Palette,
    highlighter: &Highlighter,
) -> String {
    let sections = [
        headers_section(entry, palette),
        url_query_section(entry, palette),
        response_query_section(entry),
        request_body_section(entry, highlighter),
        response_section(entry, with_response, highlighter),
    ];

    let mut blocks = vec![header_line(entry, index, palette)];
    blocks.extend(
        sections
            .into_iter()
            .flatten()
            .map(|section| section.render(palette)),
    );

    layout::frame(&layout::join_vertical(&blocks), palette.border)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
