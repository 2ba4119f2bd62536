//! Rendering style: sizes, margins and the marker palette.
use crate::board::{Marker, Square};
use crate::colour::Colour;
use crate::geometry::BoardGeometry;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

fn default_size() -> u32 {
    180
}

fn default_margin() -> u32 {
    30
}

fn default_board_colour() -> Colour {
    Colour::WHITE
}

fn default_x_colour() -> Colour {
    Colour::RED
}

fn default_o_colour() -> Colour {
    Colour::GREEN
}

fn default_empty_colour() -> Colour {
    Colour::WHITE
}

/// Colour assignment per square value.
///
/// Empty squares get their own colour so that drawing one is visually
/// inert against the background.  Values are immutable; derive a changed
/// palette with the `with_` setters rather than mutating a shared one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize,
)]
#[setters(prefix = "with_")]
pub struct MarkerPalette {
    /// Colour for X markers.
    #[serde(default = "default_x_colour")]
    x: Colour,
    /// Colour for O markers.
    #[serde(default = "default_o_colour")]
    o: Colour,
    /// Colour for empty squares.
    #[serde(default = "default_empty_colour")]
    empty: Colour,
}

impl MarkerPalette {
    /// Creates a palette from explicit colours.
    pub fn new(x: Colour, o: Colour, empty: Colour) -> Self {
        Self { x, o, empty }
    }

    /// The colour assigned to a marker.
    pub fn colour_of(&self, marker: Marker) -> Colour {
        match marker {
            Marker::X => self.x,
            Marker::O => self.o,
        }
    }

    /// The colour assigned to a square value.
    pub fn colour_for(&self, square: Square) -> Colour {
        match square {
            Square::Empty => self.empty,
            Square::Marked(marker) => self.colour_of(marker),
        }
    }
}

impl Default for MarkerPalette {
    fn default() -> Self {
        Self::new(
            default_x_colour(),
            default_o_colour(),
            default_empty_colour(),
        )
    }
}

/// Style parameters for a rendered board.
///
/// Defaults to a 180-pixel board with a 30-pixel margin, a white grid and
/// the default palette.  Loadable from a TOML file where omitted fields
/// keep their defaults.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize,
)]
#[setters(prefix = "with_")]
pub struct BoardStyle {
    /// Board edge length in pixels.
    #[serde(default = "default_size")]
    size: u32,
    /// Border padding around the board in pixels.
    #[serde(default = "default_margin")]
    margin: u32,
    /// Grid line colour.
    #[serde(default = "default_board_colour")]
    board_colour: Colour,
    /// Marker colours.
    #[serde(default)]
    palette: MarkerPalette,
}

impl BoardStyle {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a style from a TOML file.  Omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| StyleError::new(format!("Failed to read style file: {e}")))?;
        let style: Self = toml::from_str(&content)
            .map_err(|e| StyleError::new(format!("Failed to parse style file: {e}")))?;
        info!(size = style.size, margin = style.margin, "Style loaded");
        Ok(style)
    }

    /// The pixel geometry this style produces.
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.size, self.margin)
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            size: default_size(),
            margin: default_margin(),
            board_colour: default_board_colour(),
            palette: MarkerPalette::default(),
        }
    }
}

/// Style-file failure: unreadable or unparsable TOML.
#[derive(Debug, Clone, Display, Error)]
#[display("Style error: {} at {}:{}", message, file, line)]
pub struct StyleError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl StyleError {
    /// Creates a style error recording the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_style() {
        let style = BoardStyle::default();
        assert_eq!(*style.size(), 180);
        assert_eq!(*style.margin(), 30);
        assert_eq!(*style.board_colour(), Colour::WHITE);
        assert_eq!(*style.palette().x(), Colour::RED);
        assert_eq!(*style.palette().o(), Colour::GREEN);
        assert_eq!(*style.palette().empty(), Colour::WHITE);
    }

    #[test]
    fn test_setters_derive_new_values() {
        let base = BoardStyle::default();
        let style = base.with_size(90).with_margin(5);
        assert_eq!(*style.size(), 90);
        assert_eq!(*style.margin(), 5);
        // The original is untouched.
        assert_eq!(*base.size(), 180);
    }

    #[test]
    fn test_palette_covers_every_marker() {
        let palette = MarkerPalette::default();
        for marker in Marker::iter() {
            assert_eq!(
                palette.colour_for(Square::Marked(marker)),
                palette.colour_of(marker)
            );
        }
        assert_eq!(palette.colour_for(Square::Empty), Colour::WHITE);
    }

    #[test]
    fn test_geometry_follows_style() {
        let style = BoardStyle::default().with_size(90).with_margin(10);
        let geometry = style.geometry();
        assert_eq!(*geometry.cell_size(), 30);
        assert_eq!(geometry.canvas_size(), (110, 110));
    }
}
