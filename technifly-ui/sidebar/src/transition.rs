use std::time::Duration;

use iced::time::Instant;

/// Duration of the open/close transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Scalar value eased towards a target over [`TRANSITION_DURATION`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Transition {
    /// Create a transition resting at `value`.
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration: TRANSITION_DURATION,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Start moving towards `target`, beginning at the value shown at `now`.
    ///
    /// Retargeting to the value already shown settles immediately.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        self.from = self.value(now);
        self.to = target;
        self.started_at = if self.from == target { None } else { Some(now) };
    }

    /// Interpolated value at `now`.
    pub fn value(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
