//! An SVG-producing turtle surface.
//!
//! [`SvgCanvas`] tracks the pen (position, heading, colour, up/down) and
//! collects each pen-down run as a polyline; [`SvgCanvas::to_svg`] emits
//! the session as a standalone SVG document.  Coordinates are floored to
//! whole pixels on emission, matching the renderer's integer geometry.
use crate::canvas::{Canvas, CanvasError};
use crate::colour::Colour;
use std::path::Path;
use tracing::{debug, instrument};

/// Default stroke width in pixels.
const DEFAULT_STROKE_WIDTH: u32 = 4;

/// One pen-down run: a coloured polyline.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stroke {
    colour: Colour,
    points: Vec<(i64, i64)>,
}

/// A turtle surface that renders to an SVG document.
///
/// Heading convention: 0 degrees points up and positive turns are
/// clockwise, so a pen facing up that turns right 90 degrees then moves
/// forward travels towards +x.  A fresh session starts at the canvas
/// centre, facing up, pen down; callers lift the pen before their first
/// positioning move.
///
/// Drawing before [`initialise`](Canvas::initialise) is an error: there is
/// no session to draw into.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    size: Option<(u32, u32)>,
    background: Colour,
    stroke_width: u32,
    colour: Colour,
    position: (f64, f64),
    heading: f64,
    pen_down: bool,
    current: Vec<(i64, i64)>,
    strokes: Vec<Stroke>,
}

impl SvgCanvas {
    /// Creates a surface with a black background and width-4 strokes.
    pub fn new() -> Self {
        Self {
            size: None,
            background: Colour::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            colour: Colour::WHITE,
            position: (0.0, 0.0),
            heading: 0.0,
            pen_down: false,
            current: Vec::new(),
            strokes: Vec::new(),
        }
    }

    /// Sets the background colour.
    pub fn with_background(mut self, colour: Colour) -> Self {
        self.background = colour;
        self
    }

    /// Sets the stroke width in pixels.
    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// The background colour.
    pub fn background(&self) -> Colour {
        self.background
    }

    /// The stroke width in pixels.
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// The session's canvas size, if a session has started.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// The pen's current position, unfloored.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// The pen's heading in degrees: 0 is up, clockwise positive.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// The SVG document for the session so far.
    ///
    /// An unfinished pen-down run is included; calling this mid-session is
    /// fine.  Runs of fewer than two distinct pixels draw nothing and are
    /// omitted.
    pub fn to_svg(&self) -> String {
        let (width, height) = self.size.unwrap_or((0, 0));
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        ));
        svg.push_str(&format!(
            "  <rect width=\"{width}\" height=\"{height}\" fill=\"{}\"/>\n",
            self.background
        ));
        let pending = (self.current.len() >= 2).then(|| Stroke {
            colour: self.colour,
            points: self.current.clone(),
        });
        for stroke in self.strokes.iter().chain(pending.iter()) {
            svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>\n",
                path_data(&stroke.points),
                stroke.colour,
                self.stroke_width,
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Writes the SVG document to `path`.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        std::fs::write(path.as_ref(), self.to_svg())?;
        debug!("SVG document written");
        Ok(())
    }

    fn ensure_initialised(&self) -> Result<(), CanvasError> {
        if self.size.is_none() {
            return Err(CanvasError::new("drawing surface not initialised"));
        }
        Ok(())
    }

    fn floored(&self) -> (i64, i64) {
        (self.position.0.floor() as i64, self.position.1.floor() as i64)
    }

    /// Closes the active run, keeping it only if it spans two pixels.
    fn flush_stroke(&mut self) {
        if self.current.len() >= 2 {
            self.strokes.push(Stroke {
                colour: self.colour,
                points: std::mem::take(&mut self.current),
            });
        } else {
            self.current.clear();
        }
    }

    /// Starts a fresh run anchored at the pen's current pixel.
    fn begin_stroke_here(&mut self) {
        self.current.clear();
        let anchor = self.floored();
        self.current.push(anchor);
    }

    /// Moves the pen, extending the active run if the pen is down.
    fn advance_to(&mut self, x: f64, y: f64) {
        self.position = (x, y);
        if self.pen_down {
            let point = self.floored();
            if self.current.last() != Some(&point) {
                self.current.push(point);
            }
        }
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SvgCanvas {
    fn initialise(&mut self, _speed: u32, size: (u32, u32)) -> Result<(), CanvasError> {
        debug!(width = size.0, height = size.1, "initialising SVG session");
        self.size = Some(size);
        self.strokes.clear();
        self.current.clear();
        self.colour = Colour::WHITE;
        self.position = (f64::from(size.0) / 2.0, f64::from(size.1) / 2.0);
        self.heading = 0.0;
        self.pen_down = true;
        self.begin_stroke_here();
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), CanvasError> {
        // Static surface: nothing shows a cursor, but the session must exist.
        self.ensure_initialised()
    }

    fn set_colour(&mut self, colour: Colour) -> Result<(), CanvasError> {
        self.ensure_initialised()?;
        self.flush_stroke();
        self.colour = colour;
        if self.pen_down {
            self.begin_stroke_here();
        }
        Ok(())
    }

    fn pen_up(&mut self) -> Result<(), CanvasError> {
        self.ensure_initialised()?;
        self.flush_stroke();
        self.pen_down = false;
        Ok(())
    }

    fn pen_down(&mut self) -> Result<(), CanvasError> {
        self.ensure_initialised()?;
        if !self.pen_down {
            self.pen_down = true;
            self.begin_stroke_here();
        }
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), CanvasError> {
        self.ensure_initialised()?;
        self.advance_to(x, y);
        Ok(())
    }

    fn forward(&mut self, distance: f64) -> Result<(), CanvasError> {
        self.ensure_initialised()?;
        let radians = self.heading.to_radians();
        let (x, y) = self.position;
        self.advance_to(x + distance * radians.sin(), y - distance * radians.cos());
        Ok(())
    }

    fn turn_right(&mut self, degrees: f64) -> Result<(), CanvasError> {
        self.ensure_initialised()?;
        self.heading = (self.heading + degrees).rem_euclid(360.0);
        Ok(())
    }
}

fn path_data(points: &[(i64, i64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            if i == 0 {
                format!("M {x} {y}")
            } else {
                format!(" L {x} {y}")
            }
        })
        .collect()
}
