use std::ops::{Add, Sub};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// An instant on the scene timeline, in seconds since the scene epoch.
///
/// Instants are totally ordered and hashable so they can serve as interval
/// bounds and as keys of sorted sample lists. A non-finite instant (NaN or
/// infinite) denotes "no time" and is rejected by evaluation preconditions.
#[derive(
    Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default,
)]
#[serde(transparent)]
pub struct SimTime(OrderedFloat<f64>);

impl SimTime {
    /// The scene epoch.
    pub const EPOCH: SimTime = SimTime(OrderedFloat(0.0));

    pub fn from_seconds(seconds: f64) -> Self {
        Self(OrderedFloat(seconds))
    }

    pub fn seconds(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Seconds elapsed from `earlier` to this instant. Negative when this
    /// instant precedes `earlier`.
    pub fn seconds_since(&self, earlier: SimTime) -> f64 {
        self.seconds() - earlier.seconds()
    }
}

impl From<f64> for SimTime {
    fn from(seconds: f64) -> Self {
        Self::from_seconds(seconds)
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;

    fn add(self, seconds: f64) -> SimTime {
        SimTime::from_seconds(self.seconds() + seconds)
    }
}

impl Sub<f64> for SimTime {
    type Output = SimTime;

    fn sub(self, seconds: f64) -> SimTime {
        SimTime::from_seconds(self.seconds() - seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instants_are_totally_ordered() {
        let a = SimTime::from_seconds(1.0);
        let b = SimTime::from_seconds(2.0);
        assert!(a < b);
        assert_eq!(a, SimTime::from_seconds(1.0));
        assert!((b.seconds_since(a) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn arithmetic_shifts_along_the_timeline() {
        let t = SimTime::from_seconds(10.0);
        assert_eq!(t + 5.0, SimTime::from_seconds(15.0));
        assert_eq!(t - 5.0, SimTime::from_seconds(5.0));
    }

    #[test]
    fn non_finite_instants_are_flagged() {
        assert!(SimTime::from_seconds(0.0).is_finite());
        assert!(!SimTime::from_seconds(f64::NAN).is_finite());
        assert!(!SimTime::from_seconds(f64::INFINITY).is_finite());
    }
}
