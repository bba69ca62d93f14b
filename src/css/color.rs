//! Color handling for resolved variable values
//!
//! Two separate concerns live here:
//!
//! - [`is_color`] and [`ColorClassifier`] decide whether a resolved literal should
//!   be shown as a color. The default heuristic only looks at the shape of the text.
//! - [`Color`] turns a literal into RGBA components for editor color decorations.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::css::color_keywords::create_color_keywords;

static COLOR_KEYWORDS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(create_color_keywords);

/// How bare words are classified as colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorHeuristic {
    /// Any run of letters counts as a color, so `inherit` or `solid` do too
    #[default]
    Permissive,
    /// Only the standard named color keywords count
    Named,
}

/// Classifies resolved values as color literals
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorClassifier {
    heuristic: ColorHeuristic,
}

impl ColorClassifier {
    pub fn new(heuristic: ColorHeuristic) -> Self {
        Self { heuristic }
    }

    /// Check whether the whole literal looks like a color
    pub fn is_color(&self, literal: &str) -> bool {
        if is_hex_color(literal) || is_color_function(literal) {
            return true;
        }
        match self.heuristic {
            ColorHeuristic::Permissive => {
                !literal.is_empty() && literal.chars().all(|ch| ch.is_ascii_alphabetic())
            }
            ColorHeuristic::Named => is_named_color(literal),
        }
    }
}

/// Check whether a literal is a color using the permissive heuristic
///
/// Accepts `#rgb` and `#rrggbb`, anything starting with `rgb(`, `rgba(`, `hsl(` or
/// `hsla(`, and any bare word made of letters.
pub fn is_color(literal: &str) -> bool {
    ColorClassifier::new(ColorHeuristic::Permissive).is_color(literal)
}

/// `#` followed by exactly 3 or 6 hex digits
fn is_hex_color(literal: &str) -> bool {
    match literal.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|ch| ch.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Prefix check for `rgb(`, `rgba(`, `hsl(` and `hsla(`, ignoring case
fn is_color_function(literal: &str) -> bool {
    ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|prefix| starts_with_ignore_case(literal, prefix))
}

/// Check whether a word is a standard named color, ignoring case
pub fn is_named_color(word: &str) -> bool {
    COLOR_KEYWORDS.contains_key(word.to_ascii_lowercase().as_str())
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Represents a color with RGBA components
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0.0-1.0)
    pub a: f32,
}

impl Color {
    /// Create a new color with RGB components and full opacity
    pub fn new_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with RGBA components
    pub fn new_rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse any supported color literal: hex, `rgb[a]()`, `hsl[a]()` or a named color
    pub fn parse(literal: &str) -> Option<Self> {
        let literal = literal.trim();
        if literal.starts_with('#') {
            return Self::from_hex(literal);
        }
        if let Some(args) = function_arguments(literal, &["rgba(", "rgb("]) {
            return Self::from_rgb_arguments(args);
        }
        if let Some(args) = function_arguments(literal, &["hsla(", "hsl("]) {
            return Self::from_hsl_arguments(args);
        }
        Self::from_keyword(literal)
    }

    /// Parse a hex color string and return a Color
    /// Supports 3-digit (#rgb), 6-digit (#rrggbb), and 8-digit (#rrggbbaa) hex formats
    pub fn from_hex(hex_value: &str) -> Option<Self> {
        let hex_part = hex_value.strip_prefix('#').unwrap_or(hex_value);
        if !hex_part.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }

        match hex_part.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = u8::from_str_radix(&hex_part[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex_part[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex_part[2..3].repeat(2), 16).ok()?;
                Some(Self::new_rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex_part[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex_part[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex_part[4..6], 16).ok()?;
                Some(Self::new_rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex_part[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex_part[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex_part[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex_part[6..8], 16).ok()?;
                Some(Self::new_rgba(r, g, b, a as f32 / 255.0))
            }
            _ => None,
        }
    }

    /// Look up a named color keyword, ignoring case
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let hex = COLOR_KEYWORDS.get(keyword.to_ascii_lowercase().as_str())?;
        Self::from_hex(hex)
    }

    /// Parse the argument list of `rgb()`/`rgba()`, comma or space separated
    fn from_rgb_arguments(args: &str) -> Option<Self> {
        let parts = split_arguments(args);
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }

        let r = parse_channel(parts[0])?;
        let g = parse_channel(parts[1])?;
        let b = parse_channel(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => parse_alpha(alpha)?,
            None => 1.0,
        };
        Some(Self::new_rgba(r, g, b, a))
    }

    /// Parse the argument list of `hsl()`/`hsla()`
    fn from_hsl_arguments(args: &str) -> Option<Self> {
        let parts = split_arguments(args);
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }

        let hue = parts[0].trim_end_matches("deg").parse::<f32>().ok()?;
        let saturation = parse_percentage(parts[1])?;
        let lightness = parse_percentage(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => parse_alpha(alpha)?,
            None => 1.0,
        };

        let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
        Some(Self::new_rgba(r, g, b, a))
    }

    /// Get RGB components as a tuple
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to hex string format (#rrggbb)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to hex string with alpha (#rrggbbaa)
    pub fn to_hex_with_alpha(&self) -> String {
        let alpha = (self.a * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Arguments of `name(...)` for the first matching function name, ignoring case
fn function_arguments<'a>(literal: &'a str, names: &[&str]) -> Option<&'a str> {
    let prefix = names
        .iter()
        .find(|name| starts_with_ignore_case(literal, name))?;
    literal[prefix.len()..].strip_suffix(')')
}

/// Split on commas, whitespace and the `/` alpha separator
fn split_arguments(args: &str) -> Vec<&str> {
    args.split(|ch: char| ch == ',' || ch == '/' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

fn parse_channel(text: &str) -> Option<u8> {
    let value = match text.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? * 2.55,
        None => text.parse::<f32>().ok()?,
    };
    Some(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_alpha(text: &str) -> Option<f32> {
    let value = match text.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? / 100.0,
        None => text.parse::<f32>().ok()?,
    };
    Some(value.clamp(0.0, 1.0))
}

fn parse_percentage(text: &str) -> Option<f32> {
    let value = text.strip_suffix('%').unwrap_or(text).parse::<f32>().ok()?;
    Some((value / 100.0).clamp(0.0, 1.0))
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(360.0) / 360.0;
    if saturation == 0.0 {
        let gray = (lightness * 255.0).round() as u8;
        return (gray, gray, gray);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let channel = |offset: f32| {
        let mut t = hue + offset;
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let value = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (value * 255.0).round() as u8
    };

    (channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}
