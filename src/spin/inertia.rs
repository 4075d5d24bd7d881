//! The coast-down phase
//!
//! Continues the spin from the stopping position for a randomly chosen
//! number of steps, waiting a little longer after each one. The trajectory
//! is fully determined by the starting position and the step count; the
//! step count is the only random input. Once coasting starts it always
//! runs to completion.

use std::io;
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::ui::Renderer;
use crate::wheel::{self, Slot};

use super::{COAST_BASE_DELAY, COAST_DELAY_INCREMENT, COAST_MAX_STEPS, COAST_MIN_STEPS};

/// Pick how many pockets the wheel keeps moving after a stop request.
pub fn pick_step_count(rng: &mut impl Rng) -> usize {
    rng.gen_range(COAST_MIN_STEPS..=COAST_MAX_STEPS)
}

/// Delay after the k-th coast-down step, 0-indexed. Grows linearly, which
/// is what makes the wheel look like it is losing momentum.
pub fn step_delay(step: usize) -> Duration {
    COAST_BASE_DELAY + COAST_DELAY_INCREMENT * step as u32
}

/// The position the wheel settles at after coasting.
pub fn landing_index(start_index: usize, steps: usize) -> usize {
    wheel::advance(start_index, steps)
}

/// Run the coast-down to completion and return the pocket the wheel
/// settles on. Each step draws the current pocket, advances one position
/// and waits; the step count is at least one, so the wheel never settles
/// without moving off the pickup position first.
pub fn run(start_index: usize, steps: usize, renderer: &Renderer) -> io::Result<Slot> {
    debug!(steps, "coasting to a stop");

    let mut index = start_index;
    for step in 0..steps {
        renderer.coast_frame(wheel::slot_at(index))?;
        index = wheel::advance(index, 1);
        thread::sleep(step_delay(step));
    }
    Ok(wheel::slot_at(index))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::ColorScheme;

    #[test]
    fn test_delays_grow_by_fixed_increment() {
        assert_eq!(step_delay(0), Duration::from_millis(40));
        for step in 0..COAST_MAX_STEPS {
            assert_eq!(
                step_delay(step + 1) - step_delay(step),
                Duration::from_millis(10)
            );
        }
        assert_eq!(step_delay(24), Duration::from_millis(280));
    }

    #[test]
    fn test_step_count_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let steps = pick_step_count(&mut rng);
            assert!((COAST_MIN_STEPS..=COAST_MAX_STEPS).contains(&steps));
        }
    }

    #[test]
    fn test_step_count_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(pick_step_count(&mut a), pick_step_count(&mut b));
        }
    }

    #[test]
    fn test_landing_is_start_plus_steps() {
        assert_eq!(landing_index(2, 25), 27);
        assert_eq!(wheel::slot_at(landing_index(2, 25)).number(), 9);
        assert_eq!(landing_index(36, 3), 2);
        for steps in COAST_MIN_STEPS..=COAST_MAX_STEPS {
            assert_eq!(landing_index(10, steps), (10 + steps) % wheel::SLOT_COUNT);
        }
    }

    #[test]
    fn test_run_settles_past_the_start() {
        let renderer = Renderer::new(ColorScheme::default_scheme());
        let result = run(4, 3, &renderer).unwrap();
        assert_eq!(result, wheel::slot_at(7));
        // A single step still moves the wheel off the pickup position.
        let result = run(0, 1, &renderer).unwrap();
        assert_eq!(result, wheel::slot_at(1));
    }
}
