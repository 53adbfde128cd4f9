// Theme system for the TUI
//
// Themes use explicit RGB colors so the toolbar title can be alpha-blended
// toward the background, which is how "opacity" renders in a terminal.

use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Nord]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Parse a theme name from config/CLI; unknown names fall back to Dark
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "nord" => ThemeKind::Nord,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    /// Large header title and the compact toolbar title
    pub title: Color,
    /// Underline rule and action button icons
    pub accent: Color,
    pub status_bar: Color,
    /// Secondary list text
    pub muted: Color,
    pub highlight: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 24),
            foreground: Color::Rgb(220, 220, 228),
            border: Color::Rgb(70, 70, 90),
            title: Color::Rgb(240, 240, 250),
            accent: Color::Rgb(120, 160, 255),
            status_bar: Color::Rgb(140, 140, 160),
            muted: Color::Rgb(120, 120, 140),
            highlight: Color::Rgb(255, 200, 100),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 240),
            foreground: Color::Rgb(40, 40, 48),
            border: Color::Rgb(180, 180, 170),
            title: Color::Rgb(20, 20, 28),
            accent: Color::Rgb(40, 90, 200),
            status_bar: Color::Rgb(110, 110, 120),
            muted: Color::Rgb(130, 130, 140),
            highlight: Color::Rgb(190, 120, 20),
        }
    }

    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            title: Color::Rgb(236, 239, 244),
            accent: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(129, 161, 193),
            muted: Color::Rgb(115, 129, 153),
            highlight: Color::Rgb(235, 203, 139),
        }
    }
}

/// Blend `fg` toward `bg` by `alpha` (1.0 = fully fg, 0.0 = fully bg).
///
/// Terminal cells have no real opacity; interpolating the foreground toward
/// the background produces the same visual effect. Non-RGB colors cannot be
/// interpolated and are returned as-is for alpha > 0.5, background otherwise.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let lerp = |f: u8, b: u8| -> u8 {
                (b as f32 + (f as f32 - b as f32) * alpha).round() as u8
            };
            Color::Rgb(lerp(fr, br), lerp(fg_, bg_), lerp(fb, bb))
        }
        _ => {
            if alpha > 0.5 {
                fg
            } else {
                bg
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(20, 20, 20);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
    }

    #[test]
    fn blend_midpoint_interpolates() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn blend_clamps_alpha() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(20, 20, 20);
        assert_eq!(blend(fg, bg, 2.0), fg);
        assert_eq!(blend(fg, bg, -1.0), bg);
    }

    #[test]
    fn non_rgb_colors_snap_to_nearest_side() {
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(Color::Yellow, bg, 0.9), Color::Yellow);
        assert_eq!(blend(Color::Yellow, bg, 0.1), bg);
    }

    #[test]
    fn theme_cycle_wraps() {
        assert_eq!(ThemeKind::Dark.next(), ThemeKind::Light);
        assert_eq!(ThemeKind::Light.next(), ThemeKind::Nord);
        assert_eq!(ThemeKind::Nord.next(), ThemeKind::Dark);
    }

    #[test]
    fn theme_names_parse_case_insensitively() {
        assert_eq!(ThemeKind::from_name("Nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("LIGHT"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("unknown"), ThemeKind::Dark);
    }
}
