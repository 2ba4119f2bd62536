//! The drawing seam: a turtle-style pen vocabulary.
//!
//! [`BoardRenderer`](crate::BoardRenderer) speaks only this trait, so any
//! surface that can follow pen commands can carry a board.  The crate
//! ships two: [`RecordingCanvas`] here, which captures the command stream,
//! and [`SvgCanvas`](crate::SvgCanvas), which renders it.
use crate::colour::Colour;
use derive_more::{Display, Error};

/// A turtle-style drawing surface.
///
/// The pen has a position, a heading (0 degrees points up, positive turns
/// are clockwise) and an up/down state.  Implementations floor coordinates
/// to whole pixels when they emit anything; the renderer always passes
/// integer-valued coordinates anyway.
pub trait Canvas {
    /// Starts a fresh drawing session of the given pixel size.
    ///
    /// `speed` is an animation hint for surfaces that animate pen
    /// movement; static surfaces ignore it.
    fn initialise(&mut self, speed: u32, size: (u32, u32)) -> Result<(), CanvasError>;

    /// Hides the pen cursor, if the surface shows one.
    fn hide_cursor(&mut self) -> Result<(), CanvasError>;

    /// Sets the pen colour for subsequent strokes.
    fn set_colour(&mut self, colour: Colour) -> Result<(), CanvasError>;

    /// Lifts the pen: movement stops drawing.
    fn pen_up(&mut self) -> Result<(), CanvasError>;

    /// Lowers the pen: movement draws.
    fn pen_down(&mut self) -> Result<(), CanvasError>;

    /// Moves the pen to absolute coordinates, drawing if the pen is down.
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), CanvasError>;

    /// Moves the pen forward along its heading, drawing if the pen is down.
    fn forward(&mut self, distance: f64) -> Result<(), CanvasError>;

    /// Turns the pen's heading clockwise by the given degrees.
    fn turn_right(&mut self, degrees: f64) -> Result<(), CanvasError>;
}

/// Drawing-surface failure, propagated unchanged through draw calls.
#[derive(Debug, Clone, Display, Error)]
#[display("Canvas error: {} at {}:{}", message, file, line)]
pub struct CanvasError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl CanvasError {
    /// Creates a canvas error recording the caller's location.
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

impl From<std::io::Error> for CanvasError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {err}"))
    }
}

/// One recorded pen command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenCommand {
    /// Session start with speed hint and canvas size.
    Initialise {
        /// Animation speed hint.
        speed: u32,
        /// Canvas width and height in pixels.
        size: (u32, u32),
    },
    /// Cursor hidden.
    HideCursor,
    /// Pen colour change.
    SetColour(Colour),
    /// Pen lifted.
    PenUp,
    /// Pen lowered.
    PenDown,
    /// Absolute movement.
    MoveTo {
        /// Target x coordinate.
        x: f64,
        /// Target y coordinate.
        y: f64,
    },
    /// Forward movement along the current heading.
    Forward(f64),
    /// Clockwise turn in degrees.
    TurnRight(f64),
}

/// A surface that records every command instead of drawing.
///
/// This is the headless canvas: tests assert on the exact command stream a
/// draw call produces, and callers that want commands rather than pixels
/// consume it directly.  Recording cannot fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<PenCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in order.
    pub fn commands(&self) -> &[PenCommand] {
        &self.commands
    }

    /// Consumes the recorder, returning the recorded commands.
    pub fn into_commands(self) -> Vec<PenCommand> {
        self.commands
    }

    /// Discards all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn push(&mut self, command: PenCommand) -> Result<(), CanvasError> {
        self.commands.push(command);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn initialise(&mut self, speed: u32, size: (u32, u32)) -> Result<(), CanvasError> {
        self.push(PenCommand::Initialise { speed, size })
    }

    fn hide_cursor(&mut self) -> Result<(), CanvasError> {
        self.push(PenCommand::HideCursor)
    }

    fn set_colour(&mut self, colour: Colour) -> Result<(), CanvasError> {
        self.push(PenCommand::SetColour(colour))
    }

    fn pen_up(&mut self) -> Result<(), CanvasError> {
        self.push(PenCommand::PenUp)
    }

    fn pen_down(&mut self) -> Result<(), CanvasError> {
        self.push(PenCommand::PenDown)
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), CanvasError> {
        self.push(PenCommand::MoveTo { x, y })
    }

    fn forward(&mut self, distance: f64) -> Result<(), CanvasError> {
        self.push(PenCommand::Forward(distance))
    }

    fn turn_right(&mut self, degrees: f64) -> Result<(), CanvasError> {
        self.push(PenCommand::TurnRight(degrees))
    }
}
