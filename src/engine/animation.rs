//! Ping-pong animation phase driving the second-hand/digit pulse.

use std::f64::consts::PI;

/// Phase increment applied on every render tick.
const STEP: f64 = 0.1;

/// A triangular (ping-pong) waveform over roughly [0, 1].
///
/// Each [`advance`](Self::advance) moves the phase by [`STEP`] in the current
/// direction; the direction flips once the phase crosses either bound. The
/// phase is deliberately not clamped, so it overshoots the bound by one step
/// before turning around — harmless for a pulse ratio, and it keeps the flip
/// condition a single comparison.
#[derive(Debug, Clone)]
pub struct AnimationPhase {
    phase: f64,
    direction: f64,
}

impl Default for AnimationPhase {
    fn default() -> Self {
        Self {
            phase: 0.0,
            direction: 1.0,
        }
    }
}

impl AnimationPhase {
    /// Step the phase once and flip direction at the bounds.
    pub fn advance(&mut self) {
        self.phase += STEP * self.direction;
        if self.phase > 1.0 || self.phase < 0.0 {
            self.direction = -self.direction;
        }
    }

    /// Current raw phase value.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Pulse intensity in [0, 1]: `0.5 + sin(phase·π)·0.5`.
    ///
    /// Fed as the ratio into [`crate::ui::color::blend`] for the second
    /// hand/digit highlight.
    pub fn pulse(&self) -> f64 {
        0.5 + (self.phase * PI).sin() * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run `n` advances and return the resulting state.
    fn advanced(n: usize) -> AnimationPhase {
        let mut p = AnimationPhase::default();
        for _ in 0..n {
            p.advance();
        }
        p
    }

    #[test]
    fn ascends_by_step() {
        let p = advanced(3);
        assert!((p.phase() - 0.3).abs() < 1e-9);
        assert_eq!(p.direction, 1.0);
    }

    #[test]
    fn overshoots_then_flips() {
        // Ten steps land exactly on 1.0 — still ascending.
        let p = advanced(10);
        assert!((p.phase() - 1.0).abs() < 1e-9);
        assert_eq!(p.direction, 1.0);

        // The eleventh step overshoots to 1.1 and flips the direction.
        let p = advanced(11);
        assert!((p.phase() - 1.1).abs() < 1e-9);
        assert_eq!(p.direction, -1.0);

        // Descending afterwards.
        let p = advanced(12);
        assert!((p.phase() - 1.0).abs() < 1e-9);
        assert_eq!(p.direction, -1.0);
    }

    #[test]
    fn flips_again_at_lower_bound() {
        // 11 steps up (flip at 1.1), 12 steps down to -0.1 (second flip).
        let p = advanced(23);
        assert!((p.phase() - (-0.1)).abs() < 1e-9);
        assert_eq!(p.direction, 1.0);
    }

    #[test]
    fn pulse_stays_in_unit_range_over_many_ticks() {
        let mut p = AnimationPhase::default();
        for _ in 0..1000 {
            p.advance();
            let pulse = p.pulse();
            assert!((0.0..=1.0).contains(&pulse), "pulse out of range: {pulse}");
        }
    }
}
