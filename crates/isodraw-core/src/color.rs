//! Color handling for isometric scenes
//!
//! This module provides the [`Color`] type, four independent 8-bit channels,
//! together with the channel extraction helpers for packed ARGB integers.
//! CSS color strings are parsed with the `color` crate.
//!
//! Packed values use the standard ARGB layout:
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │  alpha   │   red    │  green   │   blue   │
//! └──────────┴──────────┴──────────┴──────────┘
//! ```

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// Extracts the alpha channel from a packed ARGB color.
pub fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// Extracts the red channel from a packed ARGB color.
pub fn red(argb: u32) -> u8 {
    (argb >> 16) as u8
}

/// Extracts the green channel from a packed ARGB color.
pub fn green(argb: u32) -> u8 {
    (argb >> 8) as u8
}

/// Extracts the blue channel from a packed ARGB color.
pub fn blue(argb: u32) -> u8 {
    argb as u8
}

/// An RGBA color with 8 bits per channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Creates a color from all four channels
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    /// Creates a color from a packed ARGB value, alpha included.
    ///
    /// # Examples
    ///
    /// ```
    /// use isodraw_core::color::Color;
    ///
    /// let color = Color::from_argb(0x80FF8000);
    /// assert_eq!(color.alpha(), 0x80);
    /// assert_eq!(color.red(), 0xFF);
    /// assert_eq!(color.green(), 0x80);
    /// assert_eq!(color.blue(), 0x00);
    /// ```
    pub fn from_argb(argb: u32) -> Self {
        Self::rgba(red(argb), green(argb), blue(argb), alpha(argb))
    }

    /// Creates an opaque color from a packed value, ignoring its alpha bits.
    pub fn from_rgb(argb: u32) -> Self {
        Self::rgb(red(argb), green(argb), blue(argb))
    }

    /// Parses a CSS color string such as `"#ff0000"`, `"rgb(255 0 0)"` or
    /// `"red"`.
    ///
    /// Channels outside the sRGB gamut are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use isodraw_core::color::Color;
    ///
    /// let red = Color::parse("red").unwrap();
    /// assert_eq!(red, Color::rgb(255, 0, 0));
    /// assert!(Color::parse("not-a-color").is_err());
    /// ```
    pub fn parse(color_str: &str) -> Result<Self, String> {
        let color = DynamicColor::from_str(color_str)
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))?;
        let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
        Ok(Self::rgba(rgba.r, rgba.g, rgba.b, rgba.a))
    }

    /// Packs the color into an ARGB value
    pub fn to_argb(self) -> u32 {
        u32::from(self.alpha) << 24
            | u32::from(self.red) << 16
            | u32::from(self.green) << 8
            | u32::from(self.blue)
    }

    pub fn red(self) -> u8 {
        self.red
    }

    pub fn green(self) -> u8 {
        self.green
    }

    pub fn blue(self) -> u8 {
        self.blue
    }

    pub fn alpha(self) -> u8 {
        self.alpha
    }

    /// Creates a new color with the specified alpha channel
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats as `#rrggbbaa`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_extraction() {
        let argb = 0x11223344;
        assert_eq!(alpha(argb), 0x11);
        assert_eq!(red(argb), 0x22);
        assert_eq!(green(argb), 0x33);
        assert_eq!(blue(argb), 0x44);
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        let color = Color::from_rgb(0x00336699);
        assert_eq!(color, Color::rgb(0x33, 0x66, 0x99));
        assert_eq!(color.alpha(), 255);
    }

    #[test]
    fn test_argb_roundtrip() {
        let argb = 0xDEADBEEF;
        assert_eq!(Color::from_argb(argb).to_argb(), argb);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(Color::parse("#00ff00").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(
            Color::parse("rgba(0, 0, 255, 0)").unwrap(),
            Color::rgba(0, 0, 255, 0)
        );
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "#000000ff");
        assert_eq!(Color::TRANSPARENT.alpha(), 0);
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::rgb(10, 20, 30).with_alpha(128);
        assert_eq!(color.to_argb(), 0x800A141E);
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Color::parse("red").unwrap());
        assert!(set.contains(&Color::rgb(255, 0, 0)));
        assert!(!set.contains(&Color::rgb(0, 0, 255)));
    }
}
