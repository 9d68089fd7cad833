//! Color specifications attached to features.
//!
//! A feature's color is a free-form string: either hex (`#F00`, `#F00F`,
//! `FF0000`, `#0000FF80`) or one of the [`ColorName`] tokens. Nothing here
//! fails; unresolvable values fall back to the colors in [`ColorFallbacks`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::RecapError;

/// An 8-bit-per-channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#?([0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
            .expect("hex color pattern is a valid regex")
    })
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from three channels
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Rgba::new(red, green, blue, 0xFF)
    }

    /// Decode a 3, 4, 6 or 8 digit hex string, with or without a leading `#`.
    ///
    /// Short forms duplicate each nibble (`#F00` is `#FF0000FF`). Returns
    /// `None` for any other length or for non-hex content.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        if !hex_pattern().is_match(hex) {
            return None;
        }
        let digits = hex.trim_start_matches('#');
        let value = u32::from_str_radix(digits, 16).ok()?;

        // Short forms: a nibble n becomes the byte 0xnn.
        let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 0x11;
        let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;

        match digits.len() {
            3 => Some(Rgba::rgb(nibble(8), nibble(4), nibble(0))),
            4 => Some(Rgba::new(nibble(12), nibble(8), nibble(4), nibble(0))),
            6 => Some(Rgba::rgb(byte(16), byte(8), byte(0))),
            8 => Some(Rgba::new(byte(24), byte(16), byte(8), byte(0))),
            _ => None,
        }
    }

    /// Decode hex, substituting `fallback` when the string is not valid hex
    pub fn from_hex_or(hex: &str, fallback: Rgba) -> Self {
        Rgba::from_hex(hex).unwrap_or(fallback)
    }

    /// Decode hex with the default fallback (opaque white)
    pub fn decode_hex(hex: &str) -> Self {
        Rgba::from_hex_or(hex, ColorFallbacks::default().invalid_hex)
    }

    /// Canonical `#RRGGBBAA` form, uppercase
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgba {
    type Error = RecapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgba::from_hex(&value)
            .ok_or_else(|| RecapError::config(format!("'{}' is not a hex color", value)))
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

/// The fixed set of color names a feature may use instead of hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Black,
    Blue,
    Brown,
    Cyan,
    Gray,
    Green,
    Indigo,
    Mint,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    White,
    Yellow,
}

impl ColorName {
    pub const ALL: [ColorName; 15] = [
        ColorName::Black,
        ColorName::Blue,
        ColorName::Brown,
        ColorName::Cyan,
        ColorName::Gray,
        ColorName::Green,
        ColorName::Indigo,
        ColorName::Mint,
        ColorName::Orange,
        ColorName::Pink,
        ColorName::Purple,
        ColorName::Red,
        ColorName::Teal,
        ColorName::White,
        ColorName::Yellow,
    ];

    /// Lowercase token as written in release notes
    pub fn as_str(self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Blue => "blue",
            ColorName::Brown => "brown",
            ColorName::Cyan => "cyan",
            ColorName::Gray => "gray",
            ColorName::Green => "green",
            ColorName::Indigo => "indigo",
            ColorName::Mint => "mint",
            ColorName::Orange => "orange",
            ColorName::Pink => "pink",
            ColorName::Purple => "purple",
            ColorName::Red => "red",
            ColorName::Teal => "teal",
            ColorName::White => "white",
            ColorName::Yellow => "yellow",
        }
    }

    /// Lenient lookup: surrounding whitespace and case are ignored
    pub fn lookup(name: &str) -> Option<Self> {
        name.trim().to_lowercase().parse().ok()
    }

    pub fn to_rgba(self) -> Rgba {
        match self {
            ColorName::Black => Rgba::rgb(0x00, 0x00, 0x00),
            ColorName::Blue => Rgba::rgb(0x00, 0x7A, 0xFF),
            ColorName::Brown => Rgba::rgb(0xA2, 0x84, 0x5E),
            ColorName::Cyan => Rgba::rgb(0x32, 0xAD, 0xE6),
            ColorName::Gray => Rgba::rgb(0x8E, 0x8E, 0x93),
            ColorName::Green => Rgba::rgb(0x34, 0xC7, 0x59),
            ColorName::Indigo => Rgba::rgb(0x58, 0x56, 0xD6),
            ColorName::Mint => Rgba::rgb(0x00, 0xC7, 0xBE),
            ColorName::Orange => Rgba::rgb(0xFF, 0x95, 0x00),
            ColorName::Pink => Rgba::rgb(0xFF, 0x2D, 0x55),
            ColorName::Purple => Rgba::rgb(0xAF, 0x52, 0xDE),
            ColorName::Red => Rgba::rgb(0xFF, 0x3B, 0x30),
            ColorName::Teal => Rgba::rgb(0x30, 0xB0, 0xC7),
            ColorName::White => Rgba::rgb(0xFF, 0xFF, 0xFF),
            ColorName::Yellow => Rgba::rgb(0xFF, 0xCC, 0x00),
        }
    }
}

/// Exact parsing: only the lowercase token is accepted. Use
/// [`ColorName::lookup`] for user-written values.
impl FromStr for ColorName {
    type Err = RecapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RecapError::config(format!("unknown color name '{}'", s)))
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors used when a feature's color specification cannot be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFallbacks {
    /// Used for `#`-prefixed values that are not valid hex
    #[serde(default = "default_invalid_hex", rename = "invalid_hex_fallback")]
    pub invalid_hex: Rgba,

    /// Used for values that are neither hex nor a known name
    #[serde(default = "default_unknown_name", rename = "unknown_name_fallback")]
    pub unknown_name: Rgba,
}

fn default_invalid_hex() -> Rgba {
    Rgba::WHITE
}

fn default_unknown_name() -> Rgba {
    Rgba::BLACK
}

impl Default for ColorFallbacks {
    fn default() -> Self {
        ColorFallbacks {
            invalid_hex: default_invalid_hex(),
            unknown_name: default_unknown_name(),
        }
    }
}

/// Resolve a feature color specification.
///
/// `#`-prefixed values always decode as hex. A bare value decodes as hex
/// when it looks like 3/4/6/8 hex digits, otherwise it is looked up by name.
pub fn resolve(spec: &str, fallbacks: &ColorFallbacks) -> Rgba {
    if spec.starts_with('#') {
        return Rgba::from_hex_or(spec, fallbacks.invalid_hex);
    }
    if let Some(color) = Rgba::from_hex(spec) {
        return color;
    }
    ColorName::lookup(spec)
        .map(ColorName::to_rgba)
        .unwrap_or(fallbacks.unknown_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_pattern_shapes() {
        let pattern = hex_pattern();
        for hex in ["#F00", "F00F", "#FF0000", "0000FF80"] {
            assert!(pattern.is_match(hex), "{hex}");
        }
        for hex in ["#FF", "#FF000", "#GGG", "#FF0000FF0"] {
            assert!(!pattern.is_match(hex), "{hex}");
        }
    }

    #[test]
    fn test_three_digit_hex() {
        assert_eq!(Rgba::decode_hex("#F00").to_hex(), "#FF0000FF");
    }

    #[test]
    fn test_four_digit_hex() {
        assert_eq!(Rgba::decode_hex("#F00F").to_hex(), "#FF0000FF");
        assert_eq!(Rgba::decode_hex("#0F08").to_hex(), "#00FF0088");
    }

    #[test]
    fn test_six_and_eight_digit_hex() {
        assert_eq!(Rgba::decode_hex("#00FF00").to_hex(), "#00FF00FF");
        assert_eq!(Rgba::decode_hex("#0000FF80").to_hex(), "#0000FF80");
        assert_eq!(Rgba::decode_hex("FF0000").to_hex(), "#FF0000FF");
    }

    #[test]
    fn test_hex_is_case_insensitive() {
        assert_eq!(Rgba::decode_hex("#00ff00"), Rgba::decode_hex("#00FF00"));
        assert_eq!(Rgba::decode_hex("#00Ff00").to_hex(), "#00FF00FF");
    }

    #[test]
    fn test_invalid_hex_uses_fallback() {
        assert_eq!(Rgba::decode_hex("INVALID").to_hex(), "#FFFFFFFF");
        assert_eq!(Rgba::decode_hex("").to_hex(), "#FFFFFFFF");
        assert_eq!(Rgba::decode_hex("#12345").to_hex(), "#FFFFFFFF");
        assert_eq!(Rgba::decode_hex("#12G").to_hex(), "#FFFFFFFF");
        assert_eq!(Rgba::decode_hex("##FFF").to_hex(), "#FFFFFFFF");
        assert_eq!(Rgba::from_hex_or("nope", Rgba::BLACK), Rgba::BLACK);
    }

    #[test]
    fn test_hex_surrounding_whitespace_is_trimmed() {
        assert_eq!(Rgba::from_hex("  #abc "), Some(Rgba::rgb(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn test_color_name_exact_parse() {
        for name in ColorName::ALL {
            assert_eq!(name.as_str().parse::<ColorName>().ok(), Some(name));
        }
        assert!("Black".parse::<ColorName>().is_err());
        assert!("blue ".parse::<ColorName>().is_err());
        assert!("aquamarine".parse::<ColorName>().is_err());
    }

    #[test]
    fn test_color_name_lookup_is_lenient() {
        assert_eq!(ColorName::lookup(" grEEn"), Some(ColorName::Green));
        assert_eq!(ColorName::lookup("Purple "), Some(ColorName::Purple));
        assert_eq!(ColorName::lookup("CYAN"), Some(ColorName::Cyan));
        assert_eq!(ColorName::lookup("vantablack"), None);
    }

    #[test]
    fn test_resolve_prefers_hex_then_names() {
        let fallbacks = ColorFallbacks::default();
        assert_eq!(resolve("#FF0000", &fallbacks), Rgba::rgb(0xFF, 0, 0));
        assert_eq!(resolve("00FF00", &fallbacks), Rgba::rgb(0, 0xFF, 0));
        assert_eq!(resolve(" Red ", &fallbacks), ColorName::Red.to_rgba());
        assert_eq!(resolve("#red", &fallbacks), fallbacks.invalid_hex);
        assert_eq!(resolve("aquamarine", &fallbacks), fallbacks.unknown_name);
    }

    #[test]
    fn test_resolve_honours_configured_fallbacks() {
        let fallbacks = ColorFallbacks {
            invalid_hex: Rgba::rgb(1, 2, 3),
            unknown_name: Rgba::rgb(4, 5, 6),
        };
        assert_eq!(resolve("#zz", &fallbacks), Rgba::rgb(1, 2, 3));
        assert_eq!(resolve("chartreuse", &fallbacks), Rgba::rgb(4, 5, 6));
    }

    #[test]
    fn test_rgba_string_conversions() {
        assert_eq!(Rgba::try_from("#abc".to_string()).ok(), Some(Rgba::rgb(0xAA, 0xBB, 0xCC)));
        assert!(Rgba::try_from("white".to_string()).is_err());
        assert_eq!(String::from(Rgba::BLACK), "#000000FF");
    }
}
