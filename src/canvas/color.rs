//! Bar fill colors

use crate::config::PaletteConfig;
use crate::engine::Tag;

/// RGB color with f32 components (0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit RGB values (0-255)
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }

    /// Create from hex color (e.g., 0xD6FFB7)
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgb8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Convert to 8-bit RGB tuple
    #[inline]
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Convert to ratatui Color
    #[inline]
    pub fn to_ratatui(&self) -> ratatui::style::Color {
        let (r, g, b) = self.to_rgb8();
        ratatui::style::Color::Rgb(r, g, b)
    }

    /// Perceived brightness
    #[inline]
    pub fn luminance(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Euclidean distance to another color
    #[inline]
    pub fn distance(&self, other: &Color) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Background plus one fill per tag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub default_bar: Color,
    pub active_bar: Color,
    pub pivot_bar: Color,
}

impl Palette {
    pub fn fill_for(&self, tag: Tag) -> Color {
        match tag {
            Tag::Default => self.default_bar,
            Tag::ActiveRange => self.active_bar,
            Tag::Pivot => self.pivot_bar,
        }
    }
}

impl From<&PaletteConfig> for Palette {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            background: Color::from_hex(config.background),
            default_bar: Color::from_hex(config.default_bar),
            active_bar: Color::from_hex(config.active_bar),
            pivot_bar: Color::from_hex(config.pivot_bar),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from(&PaletteConfig::default())
    }
}
