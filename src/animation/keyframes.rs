use serde::{Deserialize, Serialize};

use crate::{
    animation::{ease::Ease, timing::Lerp},
    foundation::error::{FlowsceneError, FlowsceneResult},
};

/// A value pinned to a local time (milliseconds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<T> {
    /// Local time in milliseconds.
    pub time: f64,
    /// Value at `time`.
    pub value: T,
}

impl<T> Keyframe<T> {
    /// Construct a keyframe.
    pub fn new(time: f64, value: T) -> Self {
        Self { time, value }
    }
}

/// Non-empty keyframe list ordered by ascending time.
///
/// The invariants are enforced by [`Keyframes::new`], so sampling never has to handle an
/// empty list.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes<T> {
    keys: Vec<Keyframe<T>>,
}

impl<T> Keyframes<T> {
    /// Validate and wrap a keyframe list.
    pub fn new(keys: Vec<Keyframe<T>>) -> FlowsceneResult<Self> {
        if keys.is_empty() {
            return Err(FlowsceneError::validation(
                "keyframes must contain at least one entry",
            ));
        }
        if keys.iter().any(|k| !k.time.is_finite()) {
            return Err(FlowsceneError::validation("keyframe times must be finite"));
        }
        if !keys.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(FlowsceneError::validation(
                "keyframes must be sorted by ascending time",
            ));
        }
        Ok(Self { keys })
    }

    /// Keyframes in time order.
    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    /// First keyframe.
    pub fn first(&self) -> &Keyframe<T> {
        &self.keys[0]
    }

    /// Last keyframe.
    pub fn last(&self) -> &Keyframe<T> {
        &self.keys[self.keys.len() - 1]
    }
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Sample at an already-adjusted local time, easing each segment with `ease`.
    pub fn sample(&self, local: f64, ease: Ease) -> T {
        let idx = self.keys.partition_point(|k| k.time <= local);

        if idx == 0 {
            return self.first().value.clone();
        }
        if idx >= self.keys.len() {
            return self.last().value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        if local == a.time {
            return a.value.clone();
        }

        let span = b.time - a.time;
        let u = if span <= 0.0 {
            1.0
        } else {
            (local - a.time) / span
        };
        T::lerp(&a.value, &b.value, ease.apply(u))
    }
}

impl<T: Serialize> Serialize for Keyframes<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.keys.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Keyframes<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let keys = Vec::<Keyframe<T>>::deserialize(deserializer)?;
        Self::new(keys).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
