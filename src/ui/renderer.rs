//! Terminal renderer using crossterm
//!
//! Animation frames overwrite the current line in place with a carriage
//! return; everything else is a normal line. The terminal is in raw mode
//! while the game runs, so line breaks are written as `\r\n` explicitly.
//! Every frame is flushed immediately so a frame is never held back past
//! its tick.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::config::ColorScheme;
use crate::wheel::Slot;

/// Marker shown next to the pocket while the wheel spins freely.
const SPIN_MARKER: &str = "\u{23f3}"; // ⏳
/// Marker shown while the wheel coasts to a stop.
const COAST_MARKER: &str = "\u{1f3b2}"; // 🎲

/// Terminal renderer
///
/// Cheap to clone; a clone is handed to the spinner thread so both sides
/// can draw frames with the same scheme.
#[derive(Debug, Clone)]
pub struct Renderer {
    scheme: ColorScheme,
}

impl Renderer {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }

    /// Startup banner with key help.
    pub fn banner(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "\u{1f3b0} European Roulette CLI\r\n")?;
        write!(stdout, "Press SPACE to start spinning, SPACE again to stop.\r\n")?;
        write!(stdout, "Press q or Ctrl+C to exit.\r\n\r\n")?;
        stdout.flush()
    }

    /// Prompt shown before each round.
    pub fn ready(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "\u{1f3af} Ready to spin. Press SPACE to start.\r\n")?;
        stdout.flush()
    }

    /// One free-spin animation frame, overwriting the previous one.
    pub fn spin_frame(&self, slot: Slot) -> io::Result<()> {
        self.frame(SPIN_MARKER, slot)
    }

    /// One deceleration animation frame, overwriting the previous one.
    pub fn coast_frame(&self, slot: Slot) -> io::Result<()> {
        self.frame(COAST_MARKER, slot)
    }

    /// Transition line between the free spin and the coast-down.
    pub fn slowing_down(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "\r\n\u{1f300} Slowing down...\r\n")?;
        stdout.flush()
    }

    /// Final result line for a round.
    pub fn result(&self, slot: Slot) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "\r\n\u{2705} Landed on: ")?;
        self.pocket(&mut stdout, slot)?;
        write!(stdout, "\r\n\r\n")?;
        stdout.flush()
    }

    /// Farewell line, printed after the terminal has been restored.
    pub fn goodbye(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "\r\n\u{1f44b} Goodbye!\r\n")?;
        stdout.flush()
    }

    fn frame(&self, marker: &str, slot: Slot) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "\r{} ", marker)?;
        self.pocket(&mut stdout, slot)?;
        write!(stdout, " ")?;
        stdout.flush()
    }

    /// Write one pocket label with its class colors.
    fn pocket(&self, out: &mut impl Write, slot: Slot) -> io::Result<()> {
        let background = self.scheme.background_for(slot.color());
        queue!(
            out,
            SetBackgroundColor(background.to_crossterm()),
            SetForegroundColor(self.scheme.label_fg.to_crossterm()),
            Print(slot.label()),
            ResetColor,
        )?;
        Ok(())
    }
}
