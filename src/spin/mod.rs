//! Wheel animation phases
//!
//! A round animates in two phases. The free spin runs on a background
//! thread at a fixed cadence until the player asks it to stop; the
//! coast-down then continues from wherever the wheel was, taking a random
//! number of steps with a growing delay between them.
//!
//! The stopping position crosses the thread boundary exactly once, through
//! the spinner's join. There is no shared position state between the two
//! phases beyond that handoff.

pub mod free;
pub mod inertia;

use std::time::Duration;

use thiserror::Error;

pub use free::FreeSpin;

/// Interval between free-spin frames.
pub const FREE_SPIN_TICK: Duration = Duration::from_millis(80);

/// Delay after the first coast-down step.
pub const COAST_BASE_DELAY: Duration = Duration::from_millis(40);

/// Added to the coast-down delay after every step.
pub const COAST_DELAY_INCREMENT: Duration = Duration::from_millis(10);

/// Fewest pockets the wheel coasts past after a stop request.
pub const COAST_MIN_STEPS: usize = 25;

/// Most pockets the wheel coasts past after a stop request.
pub const COAST_MAX_STEPS: usize = 39;

#[derive(Error, Debug)]
pub enum SpinError {
    #[error("Failed to draw an animation frame: {0}")]
    Render(#[from] std::io::Error),

    #[error("Spinner thread panicked")]
    SpinnerPanicked,
}
