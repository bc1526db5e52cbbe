//! Color type — the public color representation for chromapick.
//!
//! Stores linear RGBA as f64 values in the 0.0–1.0 range and pivots all
//! format conversions (Hex, integer RGB, HSV, CMYK, HSL) through it.

use crate::error::ParseHexError;
use crate::math;

/// Linear RGBA color with components in the 0.0–1.0 range.
///
/// This is the canonical interchange representation: every format
/// conversion goes to or from it. Components are clamped to range at
/// construction, so a `Color` always holds valid values. Alpha rides
/// along unchanged through RGB/HSV/HSL/CMYK conversions and defaults to
/// 1.0 when the source format has no alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl Color {
    /// Create from f64 RGBA components; each is clamped to 0.0–1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The same color with a different alpha (clamped to 0.0–1.0).
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Create from 0–255 RGB values with full opacity.
    ///
    /// Out-of-range inputs are clamped, matching the tolerant contract of
    /// an interactive picker where transient drag states can overshoot.
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as f64 / 255.0,
            g: g.clamp(0, 255) as f64 / 255.0,
            b: b.clamp(0, 255) as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to a 0–255 RGB tuple, alpha dropped.
    ///
    /// Channels are scaled and rounded half-away-from-zero at this 8-bit
    /// boundary; all internal math stays in floating point.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex string (with or without `#`; 3, 6, or 8 digits).
    ///
    /// The 3-digit form expands each nibble by duplication (`"F0A"` →
    /// `"FF00AA"`). 8-digit hex is interpreted as RRGGBBAA; the shorter
    /// forms default to full opacity. Malformed input is an error — the
    /// caller decides the fallback color, not this crate.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(bad));
        }
        match stripped.len() {
            3 => {
                let r = parse_nibble(&stripped[0..1])?;
                let g = parse_nibble(&stripped[1..2])?;
                let b = parse_nibble(&stripped[2..3])?;
                Ok(Self {
                    r: r as f64 / 255.0,
                    g: g as f64 / 255.0,
                    b: b as f64 / 255.0,
                    a: 1.0,
                })
            }
            6 => {
                let r = parse_byte(&stripped[0..2])?;
                let g = parse_byte(&stripped[2..4])?;
                let b = parse_byte(&stripped[4..6])?;
                Ok(Self {
                    r: r as f64 / 255.0,
                    g: g as f64 / 255.0,
                    b: b as f64 / 255.0,
                    a: 1.0,
                })
            }
            8 => {
                let r = parse_byte(&stripped[0..2])?;
                let g = parse_byte(&stripped[2..4])?;
                let b = parse_byte(&stripped[4..6])?;
                let a = parse_byte(&stripped[6..8])?;
                Ok(Self {
                    r: r as f64 / 255.0,
                    g: g as f64 / 255.0,
                    b: b as f64 / 255.0,
                    a: a as f64 / 255.0,
                })
            }
            len => Err(ParseHexError::InvalidLength(len)),
        }
    }

    /// Format as `#RRGGBB` (uppercase). Alpha is not encoded.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Create from hue (degrees, taken modulo 360 — negative values wrap
    /// positive), saturation, and value (both clamped to 0.0–1.0). Alpha
    /// is 1.0.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = math::hsv_to_rgb(h, s, v);
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to HSV: hue in degrees [0.0, 360.0), saturation and value
    /// in 0.0–1.0. Achromatic colors report hue 0.
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        math::rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Create from hue (degrees, modulo 360), saturation, and lightness
    /// (both clamped to 0.0–1.0). Alpha is 1.0.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = math::hsl_to_rgb(h, s, l);
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to HSL: hue in degrees [0.0, 360.0), saturation and
    /// lightness in 0.0–1.0. Achromatic colors report hue 0.
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        math::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Create from CMYK components, each clamped to 0.0–1.0. Alpha is 1.0.
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        let (r, g, b) = math::cmyk_to_rgb(c, m, y, k);
        Self { r, g, b, a: 1.0 }
    }

    /// Convert to CMYK components in 0.0–1.0. Pure black reports
    /// C = M = Y = 0, K = 1.
    pub fn to_cmyk(&self) -> (f64, f64, f64, f64) {
        math::rgb_to_cmyk(self.r, self.g, self.b)
    }

    /// Render the color as a display string in the requested format.
    pub fn format_as(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.to_hex(),
            ColorFormat::Rgb => {
                let (r, g, b) = self.to_rgb();
                format!("{}, {}, {}", r, g, b)
            }
            ColorFormat::Hsv => {
                let (h, s, v) = self.to_hsv();
                format!("{:.0}°, {:.0}%, {:.0}%", h, s * 100.0, v * 100.0)
            }
            ColorFormat::Cmyk => {
                let (c, m, y, k) = self.to_cmyk();
                format!(
                    "{:.0}%, {:.0}%, {:.0}%, {:.0}%",
                    c * 100.0,
                    m * 100.0,
                    y * 100.0,
                    k * 100.0
                )
            }
            ColorFormat::Hsl => {
                let (h, s, l) = self.to_hsl();
                format!("{:.0}°, {:.0}%, {:.0}%", h, s * 100.0, l * 100.0)
            }
        }
    }
}

fn parse_byte(s: &str) -> Result<u8, ParseHexError> {
    u8::from_str_radix(s, 16).map_err(|_| invalid_digit(s))
}

fn parse_nibble(s: &str) -> Result<u8, ParseHexError> {
    // Shorthand digit duplicated: 0xF → 0xFF.
    u8::from_str_radix(s, 16)
        .map(|n| n * 17)
        .map_err(|_| invalid_digit(s))
}

fn invalid_digit(s: &str) -> ParseHexError {
    // Unreachable after the up-front hexdigit scan, but keeps parsing total.
    ParseHexError::InvalidDigit(s.chars().next().unwrap_or('\0'))
}

/// Human-facing color encodings supported by [`Color::format_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsv,
    Cmyk,
    Hsl,
}

/// Serializes as a hex string (`"#RRGGBB"`, or `"#RRGGBBAA"` when alpha
/// is not 1.0) for human-readable formats. The round-trip has 8-bit
/// quantization, which is acceptable since hex colors are inherently
/// 8-bit.
#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.a == 1.0 {
            serializer.serialize_str(&self.to_hex())
        } else {
            let (r, g, b) = self.to_rgb();
            let a = (self.a * 255.0).round() as u8;
            serializer.serialize_str(&format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a))
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
