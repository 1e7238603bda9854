use syntect::{
    easy::HighlightLines,
    highlighting::{Theme, ThemeSet},
    parsing::SyntaxSet,
    util::{as_24_bit_terminal_escaped, LinesWithEndings},
};

const THEME: &str = "base16-ocean.dark";

/// Immutable syntax/theme registry, loaded once at startup and shared by
/// reference with every rendering call.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    fn theme(&self) -> Option<&Theme> {
        self.themes.themes.get(THEME)
    }

    /// Renders `source` with per-token terminal colors for the given
    /// language hint. Unknown hints fall back to the plain-text syntax;
    /// any tokenization or theme failure returns the source unchanged.
    pub fn highlight(&self, source: &str, lang: &str) -> String {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        let theme = match self.theme() {
            Some(theme) => theme,
            None => return source.to_string(),
        };

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(source) {
            let ranges = match highlighter.highlight_line(line, &self.syntaxes) {
                Ok(ranges) => ranges,
                Err(_) => return source.to_string(),
            };
            let escaped = as_24_bit_terminal_escaped(&ranges, false);
            lines.push(format!("{}\u{1b}[0m", escaped.trim_end_matches('\n')));
        }
        lines.join("\n")
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
