//! The free-spin phase
//!
//! An unbounded animation on a background thread: draw the current pocket,
//! advance one position, sleep one tick, repeat. It never stops on its own;
//! the controller cancels it through a flag that the loop checks at the top
//! of every tick, never mid-frame, so the worst-case stop latency is one
//! tick. The position at which the loop observed the cancellation is
//! returned through the thread's join.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::ui::Renderer;
use crate::wheel;

use super::{SpinError, FREE_SPIN_TICK};

/// The spinner loop body. Checks the stop flag before each iteration and
/// reports the index it was at when the flag was observed, without
/// advancing past it.
fn run_spinner(
    start_index: usize,
    stop: &AtomicBool,
    renderer: &Renderer,
) -> io::Result<usize> {
    let mut index = start_index;
    while !stop.load(Ordering::SeqCst) {
        renderer.spin_frame(wheel::slot_at(index))?;
        index = wheel::advance(index, 1);
        thread::sleep(FREE_SPIN_TICK);
    }
    debug!(index, pocket = wheel::slot_at(index).number(), "free spin stopped");
    Ok(index)
}

/// A running free spin
///
/// At most one exists per round. Dropping it cancels the spin and waits
/// for the thread, so an abandoned round cannot leave frames being drawn
/// over whatever the terminal shows next.
pub struct FreeSpin {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<io::Result<usize>>>,
}

impl FreeSpin {
    /// Start spinning from the given position on a background thread.
    pub fn launch(start_index: usize, renderer: Renderer) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let handle = thread::spawn(move || run_spinner(start_index, &flag, &renderer));
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Cancel the spin and wait for the stopping position. The join is the
    /// synchronization point: the index is read only after the thread has
    /// observed the cancellation and exited.
    pub fn stop(mut self) -> Result<usize, SpinError> {
        self.stop.store(true, Ordering::SeqCst);
        match self.handle.take() {
            Some(handle) => match handle.join() {
                Ok(result) => Ok(result?),
                Err(_) => Err(SpinError::SpinnerPanicked),
            },
            None => Err(SpinError::SpinnerPanicked),
        }
    }
}

impl Drop for FreeSpin {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::ColorScheme;

    fn renderer() -> Renderer {
        Renderer::new(ColorScheme::default_scheme())
    }

    #[test]
    fn test_cancel_before_first_tick_reports_start() {
        let stop = AtomicBool::new(true);
        let index = run_spinner(0, &stop, &renderer()).unwrap();
        assert_eq!(index, 0);

        let index = run_spinner(36, &stop, &renderer()).unwrap();
        assert_eq!(index, 36);
    }

    #[test]
    fn test_stop_reports_forward_position() {
        let start = 36;
        let spinner = FreeSpin::launch(start, renderer());
        thread::sleep(Duration::from_millis(200));
        let index = spinner.stop().unwrap();

        assert!(index < wheel::SLOT_COUNT);
        // Roughly 2-3 ticks elapsed; the wheel only ever steps forward one
        // pocket at a time, so the distance travelled stays small.
        let travelled = (index + wheel::SLOT_COUNT - start) % wheel::SLOT_COUNT;
        assert!(travelled >= 1);
        assert!(travelled <= 6, "travelled {} pockets", travelled);
    }

    #[test]
    fn test_drop_cancels_the_spinner() {
        let spinner = FreeSpin::launch(0, renderer());
        drop(spinner);
    }
}
