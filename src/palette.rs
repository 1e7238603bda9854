use crossterm::style::{Color, Stylize};

/// Category -> color table shared by every rendering call. Built once in
/// `main` and passed by reference; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub border: Color,
    pub subtle: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub warning: Color,
    pub key: Color,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            border: Color::Rgb {
                r: 0x30,
                g: 0x30,
                b: 0x30,
            },
            subtle: Color::Rgb {
                r: 0xb0,
                g: 0xb0,
                b: 0xb0,
            },
            success: Color::Rgb {
                r: 0x00,
                g: 0xaa,
                b: 0x00,
            },
            error: Color::Rgb {
                r: 0xca,
                g: 0x00,
                b: 0x00,
            },
            info: Color::Rgb {
                r: 0x00,
                g: 0x00,
                b: 0xbb,
            },
            warning: Color::Rgb {
                r: 0xcc,
                g: 0x77,
                b: 0x00,
            },
            key: Color::Rgb {
                r: 0xf9,
                g: 0x26,
                b: 0x72,
            },
        }
    }

    /// Color for an HTTP method badge. `None` means the badge is left
    /// unstyled.
    pub fn method_color(&self, method: &str) -> Option<Color> {
        match method {
            "GET" => Some(self.success),
            "POST" => Some(self.info),
            "PUT" => Some(self.warning),
            "DELETE" => Some(self.error),
            _ => None,
        }
    }

    /// Color for a status badge, decided by the status class (first
    /// character of the code).
    pub fn status_color(&self, status: &str) -> Option<Color> {
        match status.chars().next() {
            Some('2') => Some(self.success),
            Some('4') => Some(self.error),
            _ => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

pub fn colored(s: &str, color: Color) -> String {
    s.with(color).to_string()
}

pub fn bold(s: &str) -> String {
    s.bold().to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_colors() {
        let palette = Palette::new();
        assert_eq!(palette.method_color("GET"), Some(palette.success));
        assert_eq!(palette.method_color("POST"), Some(palette.info));
        assert_eq!(palette.method_color("PUT"), Some(palette.warning));
        assert_eq!(palette.method_color("DELETE"), Some(palette.error));
        assert_eq!(palette.method_color("PATCH"), None);
        assert_eq!(palette.method_color("get"), None);
    }

    #[test]
    fn status_colors_by_class() {
        let palette = Palette::new();
        assert_eq!(palette.status_color("200"), Some(palette.success));
        assert_eq!(palette.status_color("201"), Some(palette.success));
        assert_eq!(palette.status_color("404"), Some(palette.error));
        assert_eq!(palette.status_color("302"), None);
        assert_eq!(palette.status_color("500"), None);
    }

    #[test]
    fn empty_status_is_unstyled() {
        let palette = Palette::new();
        assert_eq!(palette.status_color(""), None);
    }

    #[test]
    fn colored_wraps_text_in_escapes() {
        let palette = Palette::new();
        let out = colored("GET", palette.success);
        assert!(out.contains("\u{1b}[38;2;0;170;0m"));
        assert!(out.contains("GET"));
    }

    #[test]
    fn bold_wraps_text_in_escapes() {
        let out = bold("Headers");
        assert!(out.contains("\u{1b}[1m"));
        assert!(out.contains("Headers"));
    }
}
