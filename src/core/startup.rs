//! Startup animation progression
//!
//! The boot scene shows four markers orbiting a center orb. Progression is
//! a pure discrete-time transition (`RotationState::tick`) so the sequence
//! is testable without a terminal; scheduling and drawing live elsewhere.

use std::time::Duration;

/// Degrees added to the rotation each tick
pub const ANGLE_STEP: u16 = 2;

/// Delay between animation ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Pause between the final frame and the dashboard appearing
pub const HANDOFF_DELAY: Duration = Duration::from_millis(1000);

/// Number of markers orbiting the orb (one per 90 degrees)
pub const MARKER_COUNT: usize = 4;

/// Orbit radius of the markers, in scene units
pub const RING_RADIUS: f64 = 120.0;

/// Radius of each orbiting marker, in scene units
pub const MARKER_RADIUS: f64 = 10.0;

/// Radius of the center orb, in scene units
pub const ORB_RADIUS: f64 = 40.0;

/// Rotation state of the boot animation. Single pass: once `done` is set
/// the state never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    /// Current rotation in degrees, always in [0, 360)
    pub angle: u16,
    /// Set when the rotation wraps back to zero after a full turn
    pub done: bool,
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            angle: 0,
            done: false,
        }
    }

    /// Advance one frame: step the angle, wrap at 360, and mark the
    /// animation done the first time the wrapped value lands on zero.
    pub fn tick(&mut self) {
        if self.done {
            return;
        }
        self.angle += ANGLE_STEP;
        if self.angle >= 360 {
            self.angle = 0;
        }
        if self.angle == 0 {
            self.done = true;
        }
    }

    /// Scene positions of the orbiting markers relative to the center,
    /// at 90-degree spacing from the current angle.
    pub fn marker_positions(&self) -> [(f64, f64); MARKER_COUNT] {
        let mut positions = [(0.0, 0.0); MARKER_COUNT];
        for (i, pos) in positions.iter_mut().enumerate() {
            let rad = f64::from(self.angle + (i as u16) * 90).to_radians();
            *pos = (RING_RADIUS * rad.cos(), RING_RADIUS * rad.sin());
        }
        positions
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_follows_step_modulo_full_turn() {
        let mut state = RotationState::new();
        for n in 1u32..=360 {
            state.tick();
            if !state.done {
                assert_eq!(u32::from(state.angle), (2 * n) % 360, "after {} ticks", n);
            }
        }
    }

    #[test]
    fn done_exactly_after_one_full_rotation() {
        let mut state = RotationState::new();
        for n in 1..=180 {
            assert!(!state.done, "done too early at tick {}", n - 1);
            state.tick();
        }
        assert!(state.done);
        assert_eq!(state.angle, 0);
    }

    #[test]
    fn ticking_past_done_is_a_no_op() {
        let mut state = RotationState::new();
        for _ in 0..180 {
            state.tick();
        }
        let finished = state;
        state.tick();
        state.tick();
        assert_eq!(state, finished);
    }

    #[test]
    fn markers_sit_at_quarter_turns() {
        let state = RotationState::new();
        let positions = state.marker_positions();
        let expected = [
            (RING_RADIUS, 0.0),
            (0.0, RING_RADIUS),
            (-RING_RADIUS, 0.0),
            (0.0, -RING_RADIUS),
        ];
        for (got, want) in positions.iter().zip(expected.iter()) {
            assert!((got.0 - want.0).abs() < 1e-9);
            assert!((got.1 - want.1).abs() < 1e-9);
        }
    }
}
