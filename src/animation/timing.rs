use serde::{Deserialize, Serialize};

use crate::{
    animation::{
        color::{ColorValue, lerp_color},
        ease::Ease,
        keyframes::Keyframes,
    },
    eval::time_ref::TimeRef,
    foundation::core::{Point, Vec2},
    foundation::error::{FlowsceneError, FlowsceneResult},
};

/// Values that a [`TimingSpec`] can drive.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

/// `a + (b - a) * t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for ColorValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        ColorValue(lerp_color(a.as_str(), b.as_str(), t))
    }
}

/// The value-independent half of a timing spec: when, how long, how often, how eased.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    /// Duration in milliseconds; `<= 0` applies the target value immediately.
    pub duration: f64,
    /// Repeat forever with period `duration + repeat_delay`.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Start reference. `prev.end` resolves against `0` for leaf attributes.
    pub start: TimeRef,
    /// Extra delay after `start`.
    pub delay: f64,
    /// Hold time between loop iterations.
    pub repeat_delay: f64,
    /// Easing applied to normalized progress.
    pub ease: Ease,
    /// Per-unit time shift multiplied by the unit index.
    pub stagger: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: 0.0,
            looping: false,
            start: TimeRef::default(),
            delay: 0.0,
            repeat_delay: 0.0,
            ease: Ease::Linear,
            stagger: 0.0,
        }
    }
}

impl Timing {
    /// Non-looping linear timing of the given duration.
    pub fn over(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Absolute start in milliseconds.
    pub fn start_ms(&self) -> f64 {
        self.start.resolve(0.0)
    }

    /// Time elapsed since this attribute (for unit `index`) started; may be negative.
    pub fn local_time(&self, time: f64, index: usize) -> f64 {
        time - self.start_ms() - self.delay - index as f64 * self.stagger
    }

    /// Return `true` once the start, delay and stagger offset have elapsed.
    pub fn has_started(&self, time: f64, index: usize) -> bool {
        self.local_time(time, index) >= 0.0
    }

    /// Loop period; a negative period is clamped to `duration`.
    pub fn cycle(&self) -> f64 {
        let cycle = self.duration + self.repeat_delay;
        if cycle < 0.0 { self.duration } else { cycle }
    }

    /// Local time wrapped for keyframe lookup.
    ///
    /// Looping specs wrap into `[0, duration]` and hold at `duration` during the repeat gap.
    pub fn keyframe_time(&self, time: f64, index: usize) -> f64 {
        let local = self.local_time(time, index);
        if local <= 0.0 {
            return 0.0;
        }
        if !self.looping || self.duration <= 0.0 {
            return local;
        }
        let cycle = self.cycle();
        let in_cycle = if cycle > 0.0 { local % cycle } else { local };
        in_cycle.min(self.duration)
    }

    /// Time at which a single pass completes for unit `index`.
    ///
    /// Looping specs contribute exactly one cycle.
    pub fn end_time(&self, index: usize) -> f64 {
        let active = if self.looping {
            self.cycle().max(0.0)
        } else {
            self.duration.max(0.0)
        };
        self.start_ms() + self.delay + index as f64 * self.stagger + active
    }

    /// Reject non-finite numeric fields.
    pub fn validate(&self) -> FlowsceneResult<()> {
        let fields = [
            ("duration", self.duration),
            ("delay", self.delay),
            ("repeatDelay", self.repeat_delay),
            ("stagger", self.stagger),
            ("start", self.start_ms()),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(FlowsceneError::timing(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

/// Normalized, eased progress in `[0, 1]` at `time` for unit `index`.
pub fn phase(time: f64, timing: &Timing, index: usize) -> f64 {
    let local = timing.local_time(time, index);
    if local <= 0.0 {
        return 0.0;
    }
    if timing.duration <= 0.0 {
        return 1.0;
    }

    if timing.looping {
        let cycle = timing.cycle();
        let in_cycle = if cycle > 0.0 { local % cycle } else { local };
        if in_cycle > timing.duration {
            return 1.0;
        }
        return timing.ease.apply(in_cycle / timing.duration);
    }

    let t = (local / timing.duration).clamp(0.0, 1.0);
    timing.ease.apply(t)
}

/// Declarative description of how one attribute changes over time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Default"
))]
pub struct TimingSpec<T> {
    /// Value before the attribute starts.
    #[serde(default)]
    pub from: T,
    /// Value once the attribute completes.
    #[serde(default)]
    pub to: T,
    /// Timing parameters.
    #[serde(flatten)]
    pub timing: Timing,
    /// Keyframes; when present they replace the `from`/`to` pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<Keyframes<T>>,
}

impl<T> TimingSpec<T> {
    /// Animate from `from` to `to` over `duration` milliseconds.
    pub fn new(from: T, to: T, duration: f64) -> Self {
        Self {
            from,
            to,
            timing: Timing::over(duration),
            keyframes: None,
        }
    }

    /// Enable or disable looping.
    pub fn looping(mut self, looping: bool) -> Self {
        self.timing.looping = looping;
        self
    }

    /// Set the start reference.
    pub fn start(mut self, start: impl Into<TimeRef>) -> Self {
        self.timing.start = start.into();
        self
    }

    /// Set the delay in milliseconds.
    pub fn delay(mut self, delay: f64) -> Self {
        self.timing.delay = delay;
        self
    }

    /// Set the hold between loop iterations.
    pub fn repeat_delay(mut self, repeat_delay: f64) -> Self {
        self.timing.repeat_delay = repeat_delay;
        self
    }

    /// Set the easing.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.timing.ease = ease;
        self
    }

    /// Set the per-unit stagger.
    pub fn stagger(mut self, stagger: f64) -> Self {
        self.timing.stagger = stagger;
        self
    }

    /// Normalized progress at `time`.
    pub fn phase(&self, time: f64, index: usize) -> f64 {
        phase(time, &self.timing, index)
    }

    /// Time at which one pass completes, honoring keyframes that outlast `duration`.
    pub fn end_time(&self, index: usize) -> f64 {
        let base = self.timing.end_time(index);
        match &self.keyframes {
            Some(kf) if !self.timing.looping => {
                let offset =
                    self.timing.start_ms() + self.timing.delay + index as f64 * self.timing.stagger;
                base.max(offset + kf.last().time)
            }
            _ => base,
        }
    }
}

impl<T: Clone> TimingSpec<T> {
    /// A spec that always yields `value`.
    pub fn constant(value: T) -> Self {
        Self::new(value.clone(), value, 0.0)
    }

    /// Keyframe-driven spec; `from`/`to` mirror the first and last keys and the duration
    /// spans the last key time.
    pub fn from_keyframes(keyframes: Keyframes<T>) -> Self {
        Self {
            from: keyframes.first().value.clone(),
            to: keyframes.last().value.clone(),
            timing: Timing::over(keyframes.last().time),
            keyframes: Some(keyframes),
        }
    }
}

impl<T> TimingSpec<T>
where
    T: Lerp + Clone,
{
    /// Resolve the value at `time` for unit `index`.
    pub fn value_at(&self, time: f64, index: usize) -> T {
        match &self.keyframes {
            Some(kf) => kf.sample(self.timing.keyframe_time(time, index), self.timing.ease),
            None => match self.phase(time, index) {
                // Eases may overshoot; only the exact endpoints short-circuit.
                0.0 => self.from.clone(),
                1.0 => self.to.clone(),
                p => T::lerp(&self.from, &self.to, p),
            },
        }
    }
}

impl From<f64> for TimingSpec<f64> {
    fn from(v: f64) -> Self {
        Self::constant(v)
    }
}

impl From<&str> for TimingSpec<ColorValue> {
    fn from(s: &str) -> Self {
        Self::constant(ColorValue::new(s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
