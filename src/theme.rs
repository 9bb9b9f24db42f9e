use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme built from config. Later calls are ignored.
pub fn init(theme: Theme) {
    let _ = THEME.set(theme);
}

/// Get the active theme, falling back to the default palette.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub focused: Style,
    pub button: Style,
    pub summary: Style,
    pub notice: Style,
    pub status: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            focused: Style::default().fg(Color::Black).bg(Color::Cyan),
            button: Style::default().fg(Color::White).bg(Color::Blue),
            summary: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            notice: Style::default().fg(Color::Black).bg(Color::Yellow),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            header: Style::default().fg(Color::Rgb(248, 248, 242)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            focused: Style::default().fg(Color::Black).bg(Color::Rgb(139, 233, 253)), // cyan
            button: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(98, 114, 164)),
            summary: Style::default().fg(Color::Rgb(80, 250, 123)).add_modifier(Modifier::BOLD),
            notice: Style::default().fg(Color::Black).bg(Color::Rgb(189, 147, 249)), // purple
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            header: Style::default().fg(Color::Rgb(235, 219, 178)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            focused: Style::default().fg(Color::Black).bg(Color::Rgb(131, 165, 152)), // aqua
            button: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(69, 133, 136)),
            summary: Style::default().fg(Color::Rgb(184, 187, 38)).add_modifier(Modifier::BOLD),
            notice: Style::default().fg(Color::Black).bg(Color::Rgb(250, 189, 47)), // yellow
            status: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(80, 73, 69)),
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            header: Style::default().fg(Color::Rgb(229, 233, 240)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(Color::Rgb(67, 76, 94)),
            focused: Style::default().fg(Color::Black).bg(Color::Rgb(136, 192, 208)), // frost
            button: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(94, 129, 172)),
            summary: Style::default().fg(Color::Rgb(163, 190, 140)).add_modifier(Modifier::BOLD),
            notice: Style::default().fg(Color::Black).bg(Color::Rgb(235, 203, 139)), // yellow
            status: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(67, 76, 94)),
        }
    }
}

// ── TOML config types ──

/// `[theme]` table of the config file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub focused_fg: Option<String>,
    pub focused_bg: Option<String>,
    pub button_fg: Option<String>,
    pub button_bg: Option<String>,
    pub summary_fg: Option<String>,
    pub notice_fg: Option<String>,
    pub notice_bg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
}

impl ThemeConfig {
    pub fn to_theme(&self) -> Theme {
        // Start from preset or default
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        let fg = |style: &mut Style, value: &Option<String>| {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                *style = style.fg(c);
            }
        };
        fg(&mut theme.header, &self.header_fg);
        fg(&mut theme.dim, &self.dim_fg);
        fg(&mut theme.border, &self.border_fg);
        fg(&mut theme.focused, &self.focused_fg);
        fg(&mut theme.button, &self.button_fg);
        fg(&mut theme.summary, &self.summary_fg);
        fg(&mut theme.notice, &self.notice_fg);
        fg(&mut theme.status, &self.status_fg);

        let bg = |style: &mut Style, value: &Option<String>| {
            if let Some(c) = value.as_deref().and_then(parse_color) {
                *style = style.bg(c);
            }
        };
        bg(&mut theme.focused, &self.focused_bg);
        bg(&mut theme.button, &self.button_bg);
        bg(&mut theme.notice, &self.notice_bg);
        bg(&mut theme.status, &self.status_bg);

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#88c0d0"), Some(Color::Rgb(0x88, 0xc0, 0xd0)));
        assert_eq!(parse_color(" Cyan "), Some(Color::Cyan));
        assert_eq!(parse_color("grey"), Some(Color::Gray));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let cfg = ThemeConfig {
            preset: Some("nord".to_string()),
            notice_bg: Some("red".to_string()),
            ..Default::default()
        };
        let theme = cfg.to_theme();
        assert_eq!(theme.name, "nord");
        assert_eq!(theme.notice.bg, Some(Color::Red));
        assert_eq!(theme.focused, Theme::preset("nord").focused);
    }

    #[test]
    fn unknown_preset_falls_back_to_default() {
        assert_eq!(Theme::preset("solarized"), Theme::default());
    }
}
