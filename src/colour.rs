//! Colour values for grids, markers and win lines.
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB colour.
///
/// Channels are 8-bit integers so colours compare exactly.  The `Display`
/// form is lowercase `#rrggbb`, which is also what the SVG surface emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl Colour {
    /// CSS `black`.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// CSS `white`.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// CSS `red`.
    pub const RED: Self = Self::new(255, 0, 0);
    /// CSS `green`.
    pub const GREEN: Self = Self::new(0, 128, 0);
    /// CSS `blue`.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// CSS `yellow`.
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// CSS `cyan`.
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// CSS `magenta`.
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    /// CSS `orange`.
    pub const ORANGE: Self = Self::new(255, 165, 0);
    /// CSS `grey`.
    pub const GREY: Self = Self::new(128, 128, 128);

    /// Creates a colour from its RGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The red channel.
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// The green channel.
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// The blue channel.
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Looks up a CSS colour name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        let colour = match name.as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" => Self::CYAN,
            "magenta" => Self::MAGENTA,
            "orange" => Self::ORANGE,
            "grey" | "gray" => Self::GREY,
            _ => return None,
        };
        Some(colour)
    }

    /// Parses a `#rrggbb` hex triplet.
    fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| ParseColourError::new(s))
    }
}

impl TryFrom<String> for Colour {
    type Error = ParseColourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

/// Error for colour strings that are neither a known name nor `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unrecognised colour '{}': expected a CSS name or #rrggbb", input)]
pub struct ParseColourError {
    /// The rejected input.
    pub input: String,
}

impl ParseColourError {
    /// Creates a parse error recording the rejected input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
