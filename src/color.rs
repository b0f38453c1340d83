use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// 8-bit RGBA color.
///
/// The canonical string form is `0xrrggbbaa` (lowercase, always eight hex
/// digits); that is what `Display` produces and what scene documents store.
/// Parsing also accepts `0xrrggbb`, `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
/// and a small table of CSS color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Error produced when a color string is not in any accepted form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color string: {0:?}")]
pub struct ColorParseError(pub String);

// Names accepted on input. The basic CSS-2 palette plus the few extras the
// editor itself uses for defaults and highlights.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("aqua", Color::from_rgb(0x00, 0xff, 0xff)),
    ("bisque", Color::from_rgb(0xff, 0xe4, 0xc4)),
    ("black", Color::from_rgb(0x00, 0x00, 0x00)),
    ("blue", Color::from_rgb(0x00, 0x00, 0xff)),
    ("cyan", Color::from_rgb(0x00, 0xff, 0xff)),
    ("fuchsia", Color::from_rgb(0xff, 0x00, 0xff)),
    ("gray", Color::from_rgb(0x80, 0x80, 0x80)),
    ("green", Color::from_rgb(0x00, 0x80, 0x00)),
    ("grey", Color::from_rgb(0x80, 0x80, 0x80)),
    ("lime", Color::from_rgb(0x00, 0xff, 0x00)),
    ("magenta", Color::from_rgb(0xff, 0x00, 0xff)),
    ("maroon", Color::from_rgb(0x80, 0x00, 0x00)),
    ("navy", Color::from_rgb(0x00, 0x00, 0x80)),
    ("olive", Color::from_rgb(0x80, 0x80, 0x00)),
    ("orange", Color::from_rgb(0xff, 0xa5, 0x00)),
    ("purple", Color::from_rgb(0x80, 0x00, 0x80)),
    ("red", Color::from_rgb(0xff, 0x00, 0x00)),
    ("silver", Color::from_rgb(0xc0, 0xc0, 0xc0)),
    ("teal", Color::from_rgb(0x00, 0x80, 0x80)),
    ("transparent", Color::new(0x00, 0x00, 0x00, 0x00)),
    ("white", Color::from_rgb(0xff, 0xff, 0xff)),
    ("yellow", Color::from_rgb(0xff, 0xff, 0x00)),
];

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    pub const YELLOW: Self = Self::from_rgb(0xff, 0xff, 0x00);

    /// Source-over composite of `self` onto `dst`, both straight-alpha.
    pub fn over(self, dst: Self) -> Self {
        if self.a == 0xff {
            return self;
        }
        if self.a == 0 {
            return dst;
        }
        let sa = f64::from(self.a) / 255.0;
        let da = f64::from(dst.a) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Self::new(0, 0, 0, 0);
        }
        let blend = |s: u8, d: u8| -> u8 {
            let s = f64::from(s) / 255.0;
            let d = f64::from(d) / 255.0;
            let c = (s * sa + d * da * (1.0 - sa)) / out_a;
            (c * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            blend(self.r, dst.r),
            blend(self.g, dst.g),
            blend(self.b, dst.b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

fn from_hex_digits(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        // Shorthand forms: each digit doubles, `#f80` == `#ff8800`.
        3 | 4 => {
            let mut ch = [0u8; 4];
            for (slot, i) in ch.iter_mut().zip(0..digits.len()) {
                let n = nibble(i)?;
                *slot = n << 4 | n;
            }
            if digits.len() == 3 {
                ch[3] = 0xff;
            }
            Some(Color::new(ch[0], ch[1], ch[2], ch[3]))
        }
        6 => Some(Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(digits) = trimmed.strip_prefix("0x") {
            from_hex_digits(digits)
        } else if let Some(digits) = trimmed.strip_prefix('#') {
            from_hex_digits(digits)
        } else {
            let lower = trimmed.to_ascii_lowercase();
            NAMED_COLORS
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, color)| *color)
        };
        parsed.ok_or_else(|| ColorParseError(s.to_owned()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
