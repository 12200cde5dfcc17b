use crate::color::Color;
use crate::math;

/// Linear interpolation between `a` and `b` by `frac`
pub fn lerp(a: f32, b: f32, frac: f32) -> f32 {
    a + (b - a) * frac
}

/// Linear interpolation rounded to the nearest integer value
pub fn lerp_rounded(a: f32, b: f32, frac: f32) -> f32 {
    lerp(a, b, frac).round()
}

/// Independent per-channel linear interpolation over RGBA, no gamma
pub fn lerp_color(a: Color, b: Color, frac: f32) -> Color {
    Color::new(
        lerp(a.r, b.r, frac),
        lerp(a.g, b.g, frac),
        lerp(a.b, b.b, frac),
        lerp(a.a, b.a, frac),
    )
}

/// Truncate `s` to `floor(chars * frac)` characters, for reveal effects
pub fn lerp_string(s: &str, frac: f32) -> String {
    let keep = (s.chars().count() as f32 * frac).floor() as usize;
    s.chars().take(keep).collect()
}

/// Move `a` toward `b` by a frame-time-scaled step
pub fn approximate(a: f32, b: f32, speed: f32, frame_time: f32) -> f32 {
    lerp(a, b, frame_time * speed)
}

/// Move `a` toward `b` per channel by a frame-time-scaled step
pub fn approximate_color(a: Color, b: Color, speed: f32, frame_time: f32) -> Color {
    lerp_color(a, b, frame_time * speed)
}

/// Sine wave of the current time, stretched by `duration`
pub fn sin_wave(time: f32, duration: f32) -> f32 {
    (time / duration).sin()
}

/// Absolute sine wave, for pulse effects that never go negative
pub fn abs_sin_wave(time: f32, duration: f32) -> f32 {
    sin_wave(time, duration).abs()
}

/// Cosine wave of the current time, stretched by `duration`
pub fn cos_wave(time: f32, duration: f32) -> f32 {
    (time / duration).cos()
}

/// Absolute cosine wave
pub fn abs_cos_wave(time: f32, duration: f32) -> f32 {
    cos_wave(time, duration).abs()
}

/// Scalar progress animator driven by per-frame time deltas
///
/// Owns a weight in [0, 1] that is nudged toward 1 while active and toward 0
/// otherwise, so that traversing the full range takes exactly `duration`
/// accumulated frame time regardless of frame rate. The eased value is the
/// weight cubed; every instance lerp helper blends by the eased value, not
/// the raw weight.
///
/// Frame time is passed in explicitly with each update and must be in the
/// same units as the configured duration.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Time to traverse the full range, in the caller's time units
    duration: f32,
    /// Raw progress, always within [0, 1]
    weight: f32,
}

impl Animation {
    /// Create an animator that traverses the full range in `duration` time
    /// units, starting fully shrunk (weight 0).
    ///
    /// # Panics
    ///
    /// Panics if `duration` is not positive. A zero or negative duration
    /// would make every step infinite or backwards; it is a configuration
    /// error and is caught loudly here instead.
    pub fn new(duration: f32) -> Self {
        assert!(
            duration > 0.0,
            "animation duration must be positive, got {duration}"
        );

        Self {
            duration,
            weight: 0.0,
        }
    }

    /// Raw progress weight in [0, 1]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Overwrite the raw weight, clamped to [0, 1]
    pub fn set_weight(&mut self, weight: f32) {
        self.weight = math::clamp(weight, 0.0, 1.0);
    }

    /// Eased blend fraction: the weight cubed
    pub fn value(&self) -> f32 {
        self.weight.powi(3)
    }

    /// Advance the weight toward 1 when `active`, toward 0 otherwise
    ///
    /// `frame_time` is the time elapsed since the previous update. The step
    /// is `frame_time / duration`, clamped so the weight never leaves
    /// [0, 1]; the animator may oscillate between the rails indefinitely.
    pub fn update(&mut self, active: bool, frame_time: f32) {
        let amount = frame_time / self.duration;
        let step = if active { amount } else { -amount };

        self.weight = math::clamp(self.weight + step, 0.0, 1.0);
    }

    /// Interpolate between `a` and `b` by the eased value
    pub fn lerp(&self, a: f32, b: f32) -> f32 {
        lerp(a, b, self.value())
    }

    /// Interpolate between `a` and `b` by the eased value, rounded
    pub fn lerp_rounded(&self, a: f32, b: f32) -> f32 {
        lerp_rounded(a, b, self.value())
    }

    /// Interpolate between two colors by the eased value, per channel
    pub fn lerp_color(&self, a: Color, b: Color) -> Color {
        lerp_color(a, b, self.value())
    }

    /// Reveal a prefix of `s` proportional to the eased value
    pub fn lerp_string(&self, s: &str) -> String {
        lerp_string(s, self.value())
    }
}
