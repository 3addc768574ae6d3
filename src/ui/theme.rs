//! Light and dark colour schemes.
//!
//! Colours follow an emerald/cyan scheme. Every palette entry is an RGB
//! colour so two palettes can be blended during the theme fade.

use ratatui::style::Color;

/// The single piece of UI state: which palette is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark => Palette::DARK,
        }
    }
}

/// Accent colours available to widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Emerald,
    Cyan,
    Teal,
    Green,
}

impl ColorToken {
    /// Stroke and fill shade, shared by both themes.
    pub fn fill(self) -> Color {
        match self {
            ColorToken::Emerald => Color::Rgb(16, 185, 129),
            ColorToken::Cyan => Color::Rgb(6, 182, 212),
            ColorToken::Teal => Color::Rgb(20, 184, 166),
            ColorToken::Green => Color::Rgb(34, 197, 94),
        }
    }

    /// Text shade: darker on light backgrounds, lighter on dark ones.
    pub fn text(self, mode: ThemeMode) -> Color {
        match (self, mode) {
            (ColorToken::Emerald, ThemeMode::Light) => Color::Rgb(5, 150, 105),
            (ColorToken::Emerald, ThemeMode::Dark) => Color::Rgb(52, 211, 153),
            (ColorToken::Cyan, ThemeMode::Light) => Color::Rgb(8, 145, 178),
            (ColorToken::Cyan, ThemeMode::Dark) => Color::Rgb(34, 211, 238),
            (ColorToken::Teal, ThemeMode::Light) => Color::Rgb(13, 148, 136),
            (ColorToken::Teal, ThemeMode::Dark) => Color::Rgb(45, 212, 191),
            (ColorToken::Green, ThemeMode::Light) => Color::Rgb(22, 163, 74),
            (ColorToken::Green, ThemeMode::Dark) => Color::Rgb(74, 222, 128),
        }
    }
}

/// Concrete colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub card_background: Color,
    pub border: Color,
    pub title: Color,
    pub text: Color,
    pub muted: Color,
    /// Neutral track behind rings and bars.
    pub track: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(255, 255, 255),
        card_background: Color::Rgb(240, 253, 250),
        border: Color::Rgb(209, 250, 229),
        title: Color::Rgb(4, 120, 87),
        text: Color::Rgb(17, 24, 39),
        muted: Color::Rgb(107, 114, 128),
        track: Color::Rgb(229, 231, 235),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(15, 23, 42),
        card_background: Color::Rgb(23, 32, 48),
        border: Color::Rgb(22, 50, 48),
        title: Color::Rgb(110, 231, 183),
        text: Color::Rgb(243, 244, 246),
        muted: Color::Rgb(156, 163, 175),
        track: Color::Rgb(55, 65, 81),
    };

    /// Channel-wise blend from `self` (t = 0) to `other` (t = 1).
    pub fn blend(&self, other: &Palette, t: f64) -> Palette {
        Palette {
            background: blend_color(self.background, other.background, t),
            card_background: blend_color(self.card_background, other.card_background, t),
            border: blend_color(self.border, other.border, t),
            title: blend_color(self.title, other.title, t),
            text: blend_color(self.text, other.text, t),
            muted: blend_color(self.muted, other.muted, t),
            track: blend_color(self.track, other.track, t),
        }
    }
}

/// Linear RGB interpolation. Non-RGB colours snap to the nearer endpoint.
pub fn blend_color(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_starts_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
            assert_eq!(mode.toggled().toggled().palette(), mode.palette());
        }
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let light = Palette::LIGHT;
        let dark = Palette::DARK;
        assert_eq!(light.blend(&dark, 0.0), light);
        assert_eq!(light.blend(&dark, 1.0), dark);

        assert_eq!(
            blend_color(Color::Rgb(0, 100, 200), Color::Rgb(100, 200, 0), 0.5),
            Color::Rgb(50, 150, 100)
        );
    }

    #[test]
    fn test_blend_named_colors_snap() {
        assert_eq!(blend_color(Color::Red, Color::Blue, 0.2), Color::Red);
        assert_eq!(blend_color(Color::Red, Color::Blue, 0.8), Color::Blue);
    }

    #[test]
    fn test_text_shades_differ_per_mode() {
        for token in [
            ColorToken::Emerald,
            ColorToken::Cyan,
            ColorToken::Teal,
            ColorToken::Green,
        ] {
            assert_ne!(token.text(ThemeMode::Light), token.text(ThemeMode::Dark));
        }
    }
}
