// Cross-fade animation
//
// The compact toolbar title fades between fully transparent and fully opaque
// over a fixed duration with an ease-in-ease-out curve. Time is passed in
// explicitly so the curve is a pure function and tests can inject instants.

use std::time::{Duration, Instant};

/// Cosine ease-in-ease-out over [0, 1]. Clamps outside the range.
pub fn ease_in_out(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        0.5 - (std::f32::consts::PI * t).cos() / 2.0
    }
}

/// An opacity animation toward a target value.
///
/// `retarget` starts a new segment from the current interpolated opacity, so
/// reversing mid-fade picks up where the fade is rather than jumping.
/// Retargeting to the current target is a no-op; the animation does not
/// restart.
#[derive(Debug, Clone)]
pub struct Fade {
    from: f32,
    target: f32,
    started: Instant,
    duration: Duration,
}

impl Fade {
    pub fn new(initial: f32, duration: Duration) -> Self {
        Self {
            from: initial,
            target: initial,
            started: Instant::now(),
            duration,
        }
    }

    /// Begin animating toward `target` starting at `now`.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value_at(now);
        self.target = target;
        self.started = now;
    }

    /// Opacity at the given instant.
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.target;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            self.target
        } else {
            self.from + (self.target - self.from) * ease_in_out(t)
        }
    }

    /// Whether the fade is still in flight at `now`.
    #[allow(dead_code)] // Part of the fade API; exercised in tests
    pub fn is_animating(&self, now: Instant) -> bool {
        (self.value_at(now) - self.target).abs() > f32::EPSILON
    }

    #[allow(dead_code)] // Part of the fade API; exercised in tests
    pub fn target(&self) -> f32 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        // Clamped outside the unit interval
        assert_eq!(ease_in_out(-2.0), 0.0);
        assert_eq!(ease_in_out(3.0), 1.0);
    }

    #[test]
    fn easing_is_slow_at_the_edges() {
        // Ease-in-ease-out lags a linear ramp early and leads it late
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
    }

    #[test]
    fn fade_reaches_target_after_duration() {
        let mut fade = Fade::new(0.0, Duration::from_millis(250));
        let start = Instant::now();
        fade.retarget(1.0, start);

        assert_eq!(fade.value_at(start), 0.0);
        let mid = fade.value_at(start + Duration::from_millis(125));
        assert!((mid - 0.5).abs() < 0.01);
        assert_eq!(fade.value_at(start + Duration::from_millis(250)), 1.0);
        assert_eq!(fade.value_at(start + Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn retarget_to_same_target_does_not_restart() {
        let mut fade = Fade::new(0.0, Duration::from_millis(100));
        let start = Instant::now();
        fade.retarget(1.0, start);

        let mid = start + Duration::from_millis(50);
        let before = fade.value_at(mid);
        fade.retarget(1.0, mid);
        // A restart would snap progress back toward zero
        assert_eq!(fade.value_at(mid), before);
        assert_eq!(fade.value_at(start + Duration::from_millis(100)), 1.0);
    }

    #[test]
    fn reversing_mid_fade_starts_from_current_opacity() {
        let mut fade = Fade::new(0.0, Duration::from_millis(100));
        let start = Instant::now();
        fade.retarget(1.0, start);

        let mid = start + Duration::from_millis(50);
        let at_reversal = fade.value_at(mid);
        fade.retarget(0.0, mid);

        assert_eq!(fade.value_at(mid), at_reversal);
        assert_eq!(fade.target(), 0.0);
        assert_eq!(fade.value_at(mid + Duration::from_millis(100)), 0.0);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let mut fade = Fade::new(0.0, Duration::ZERO);
        let now = Instant::now();
        fade.retarget(1.0, now);
        assert_eq!(fade.value_at(now), 1.0);
        assert!(!fade.is_animating(now));
    }

    #[test]
    fn settled_fade_is_not_animating() {
        let mut fade = Fade::new(0.0, Duration::from_millis(100));
        let start = Instant::now();
        assert!(!fade.is_animating(start));

        fade.retarget(1.0, start);
        assert!(fade.is_animating(start + Duration::from_millis(50)));
        assert!(!fade.is_animating(start + Duration::from_millis(150)));
    }
}
