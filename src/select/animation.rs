//! Label animation: a lift/reset pair of tweened scalars.
//!
//! Time is always passed in explicitly so callers decide the clock. A new
//! target re-starts the tween from the currently sampled value, superseding
//! whatever trajectory was in flight.

use std::time::{Duration, Instant};

use serde::Deserialize;

/// Resting vertical offset of the label.
pub const REST_TRANSLATION: f32 = 0.0;
/// Vertical offset of the label while the picker is open.
pub const OPEN_TRANSLATION: f32 = -30.0;
/// Resting scale of the label.
pub const REST_SCALE: f32 = 1.0;
/// Scale of the label while the picker is open.
pub const OPEN_SCALE: f32 = 0.8;
/// Default duration of both tweens.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Easing function for tweens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Damped oscillation that overshoots before settling
    Spring,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Spring => 1.0 - (1.0 - t).powi(3) * (std::f32::consts::PI * 2.5 * t).cos(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn sample(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }
}

/// A single scalar driven by at most one tween at a time.
#[derive(Debug, Clone)]
pub struct AnimatedScalar {
    value: f32,
    tween: Option<Tween>,
}

impl AnimatedScalar {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    /// Last sampled value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value the scalar is heading to (or resting at)
    pub fn target(&self) -> f32 {
        self.tween.map(|t| t.to).unwrap_or(self.value)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Re-target the scalar, starting from its value at `now`.
    pub fn animate_to(&mut self, to: f32, duration: Duration, easing: Easing, now: Instant) {
        self.tick(now);
        if duration.is_zero() {
            self.value = to;
            self.tween = None;
            return;
        }
        self.tween = Some(Tween {
            from: self.value,
            to,
            start: now,
            duration,
            easing,
        });
    }

    /// Advance to `now`. Returns `true` if the tween finished on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        if tween.progress(now) >= 1.0 {
            self.value = tween.to;
            self.tween = None;
            true
        } else {
            self.value = tween.sample(now);
            false
        }
    }
}

/// Where the label animation is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTarget {
    /// Shrink and lift, used while the picker opens
    Lift,
    /// Back to rest position and full scale
    Reset,
}

/// Emitted when both scalars reach the current target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    Finished(AnimationTarget),
}

/// Timing knobs for the label animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub translation_easing: Easing,
    pub scale_easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            translation_easing: Easing::Spring,
            scale_easing: Easing::EaseOut,
        }
    }
}

/// The translation/scale pair owned by one select field.
#[derive(Debug, Clone)]
pub struct LabelAnimation {
    translation: AnimatedScalar,
    scale: AnimatedScalar,
    config: AnimationConfig,
    pending: Option<AnimationTarget>,
}

impl Default for LabelAnimation {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl LabelAnimation {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            translation: AnimatedScalar::new(REST_TRANSLATION),
            scale: AnimatedScalar::new(REST_SCALE),
            config,
            pending: None,
        }
    }

    pub fn translation(&self) -> f32 {
        self.translation.value()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Target of the trajectory in flight, if any
    pub fn in_flight(&self) -> Option<AnimationTarget> {
        self.pending
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Launch both tweens in parallel towards `target`.
    pub fn start(&mut self, target: AnimationTarget, now: Instant) {
        let (translation, scale) = match target {
            AnimationTarget::Lift => (OPEN_TRANSLATION, OPEN_SCALE),
            AnimationTarget::Reset => (REST_TRANSLATION, REST_SCALE),
        };
        self.translation
            .animate_to(translation, self.config.duration, self.config.translation_easing, now);
        self.scale
            .animate_to(scale, self.config.duration, self.config.scale_easing, now);
        self.pending = Some(target);
    }

    /// Advance both scalars; reports completion once per launched target.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationEvent> {
        self.translation.tick(now);
        self.scale.tick(now);

        if self.translation.is_animating() || self.scale.is_animating() {
            return None;
        }
        self.pending.take().map(AnimationEvent::Finished)
    }
}
