use crossterm::style::Color;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::palette;

fn ansi_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("\u{1b}\\[[0-9;]*m").expect("static pattern"))
}

/// Terminal column width of a single line, ignoring ANSI escapes.
pub fn visible_width(line: &str) -> usize {
    ansi_pattern().replace_all(line, "").width()
}

/// Widest line of a multi-line block.
pub fn block_width(text: &str) -> usize {
    text.lines().map(visible_width).max().unwrap_or(0)
}

/// Clips every line of `text` to at most `max` visible columns, copying
/// ANSI escapes through without counting them. A clipped line gets a
/// trailing reset so truncated styling cannot leak into the border.
pub fn clip(text: &str, max: usize) -> String {
    text.lines()
        .map(|line| clip_line(line, max))
        .collect::<Vec<_>>()
        .join("\n")
}

fn clip_line(line: &str, max: usize) -> String {
    if visible_width(line) <= max {
        return line.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    let mut rest = line;
    let mut styled = false;
    while !rest.is_empty() {
        if let Some(found) = ansi_pattern().find(rest) {
            if found.start() == 0 {
                out.push_str(found.as_str());
                styled = true;
                rest = &rest[found.end()..];
                continue;
            }
        }
        let ch = match rest.chars().next() {
            Some(ch) => ch,
            None => break,
        };
        let width = ch.width().unwrap_or(0);
        if used + width > max {
            break;
        }
        out.push(ch);
        used += width;
        rest = &rest[ch.len_utf8()..];
    }
    if styled {
        out.push_str("\u{1b}[0m");
    }
    out
}

/// Horizontal rule in the border color.
pub fn rule(width: usize, color: Color) -> String {
    palette::colored(&"─".repeat(width), color)
}

/// Stacks non-empty blocks top to bottom.
pub fn join_vertical(blocks: &[String]) -> String {
    blocks
        .iter()
        .filter(|block| !block.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps a block in a rounded border with one row and two columns of
/// padding, lines left-aligned and padded to the widest one.
pub fn frame(content: &str, border: Color) -> String {
    let inner = block_width(content) + 4;
    let side = palette::colored("│", border);
    let blank = format!("{side}{}{side}", " ".repeat(inner));

    let mut lines = Vec::new();
    lines.push(palette::colored(&format!("╭{}╮", "─".repeat(inner)), border));
    lines.push(blank.clone());
    for line in content.lines() {
        let fill = " ".repeat(inner - 4 - visible_width(line));
        lines.push(format!("{side}  {line}{fill}  {side}"));
    }
    lines.push(blank);
    lines.push(palette::colored(&format!("╰{}╯", "─".repeat(inner)), border));
    lines.join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    #[test]
    fn visible_width_ignores_escapes() {
        let palette = Palette::new();
        let styled = palette::colored("GET", palette.success);
        assert_eq!(visible_width(&styled), 3);
        assert_eq!(visible_width("plain"), 5);
    }

    #[test]
    fn block_width_takes_widest_line() {
        assert_eq!(block_width("ab\nabcd\nabc"), 4);
        assert_eq!(block_width(""), 0);
    }

    #[test]
    fn clip_leaves_short_lines_alone() {
        assert_eq!(clip("short", 120), "short");
    }

    #[test]
    fn clip_cuts_long_lines() {
        let clipped = clip("abcdefgh", 4);
        assert_eq!(clipped, "abcd");
    }

    #[test]
    fn clip_does_not_count_escapes() {
        let palette = Palette::new();
        let line = format!("{}{}", palette::colored("abc", palette.key), "defgh");
        let clipped = clip(&line, 5);
        assert_eq!(visible_width(&clipped), 5);
        assert!(clipped.contains("\u{1b}[38;2;"));
        assert!(clipped.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn frame_adds_padding_and_rounded_corners() {
        let palette = Palette::new();
        let framed = frame("hi", palette.border);
        let lines: Vec<&str> = framed.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains('╭'));
        assert!(lines[0].contains('╮'));
        assert!(lines[2].contains("  hi  "));
        assert!(lines[4].contains('╰'));
        assert!(lines[4].contains('╯'));
        // every row has the same visible width
        let widths: Vec<usize> = lines.iter().map(|l| visible_width(l)).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn join_vertical_skips_empty_blocks() {
        let joined = join_vertical(&[
            "a".to_string(),
            String::new(),
            "b".to_string(),
        ]);
        assert_eq!(joined, "a\nb");
    }
}
