use ratatui::style::Color;

use crate::config::settings::ThemePreference;

/// Palette shared by every pane
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Operators, focused titles
    pub secondary: Color, // Memory indicator
    pub comment: Color,   // Hints, empty-pane text
    pub success: Color,
    pub error: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color, // Selected list row, status bar
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(249, 226, 175),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    highlight_bg: Color::Rgb(50, 50, 70),
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(239, 241, 245),
    fg: Color::Rgb(76, 79, 105),
    primary: Color::Rgb(30, 102, 245),  // Blue
    secondary: Color::Rgb(254, 100, 11), // Orange
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    error: Color::Rgb(210, 15, 57),
    number: Color::Rgb(76, 79, 105),
    border_focused: Color::Rgb(223, 142, 29),
    border_normal: Color::Rgb(172, 176, 190),
    highlight_bg: Color::Rgb(220, 224, 232),
};

/// A concrete palette choice, after `System` has been resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    pub fn palette(self) -> &'static Theme {
        match self {
            ThemeKind::Light => &LIGHT_THEME,
            ThemeKind::Dark => &DARK_THEME,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    pub fn preference(self) -> ThemePreference {
        match self {
            ThemeKind::Light => ThemePreference::Light,
            ThemeKind::Dark => ThemePreference::Dark,
        }
    }
}

/// Resolve a preference, reading `COLORFGBG` for `System`
pub fn resolve(preference: ThemePreference) -> ThemeKind {
    match preference {
        ThemePreference::Light => ThemeKind::Light,
        ThemePreference::Dark => ThemeKind::Dark,
        ThemePreference::System => {
            theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
        }
    }
}

/// `COLORFGBG` is `"<fg>;<bg>"` (sometimes with a middle field). Background
/// indices 0-6 and 8 are dark ANSI colours; unknown values count as dark.
pub fn theme_from_colorfgbg(value: Option<&str>) -> ThemeKind {
    let background = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(0..=6) | Some(8) | None => ThemeKind::Dark,
        Some(_) => ThemeKind::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorfgbg() {
        assert_eq!(theme_from_colorfgbg(Some("15;0")), ThemeKind::Dark);
        assert_eq!(theme_from_colorfgbg(Some("0;15")), ThemeKind::Light);
        assert_eq!(theme_from_colorfgbg(Some("0;default;7")), ThemeKind::Light);
        assert_eq!(theme_from_colorfgbg(Some("garbage")), ThemeKind::Dark);
        assert_eq!(theme_from_colorfgbg(None), ThemeKind::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeKind::Light.toggled(), ThemeKind::Dark);
        assert_eq!(ThemeKind::Dark.toggled().preference(), ThemePreference::Light);
    }

    #[test]
    fn test_explicit_preferences() {
        assert_eq!(resolve(ThemePreference::Light), ThemeKind::Light);
        assert_eq!(resolve(ThemePreference::Dark), ThemeKind::Dark);
    }
}
