//! Time intervals and the ordered collection backing composited properties.
//!
//! A [`TimeIntervalCollection`] holds non-overlapping, start-ordered
//! intervals. Insertion is newest-wins: an incoming interval carves its time
//! range out of whatever it overlaps, so at most one interval contains any
//! given instant. All boundary tie-breaking for containment queries lives
//! here; consumers only ask "which interval contains this time".

use log::warn;
use serde::{Deserialize, Serialize};

use crate::model::time::SimTime;

fn default_included() -> bool {
    true
}

/// A time range with inclusivity flags and an optional payload.
///
/// The payload is opaque to the interval; an interval may cover a time range
/// while carrying no data at all.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TimeInterval<T> {
    start: SimTime,
    stop: SimTime,
    #[serde(default = "default_included")]
    is_start_included: bool,
    #[serde(default = "default_included")]
    is_stop_included: bool,
    #[serde(default)]
    data: Option<T>,
}

impl<T> TimeInterval<T> {
    /// An interval closed at both ends.
    pub fn new(start: SimTime, stop: SimTime, data: Option<T>) -> Self {
        Self::with_bounds(start, stop, true, true, data)
    }

    pub fn with_bounds(
        start: SimTime,
        stop: SimTime,
        is_start_included: bool,
        is_stop_included: bool,
        data: Option<T>,
    ) -> Self {
        Self {
            start,
            stop,
            is_start_included,
            is_stop_included,
            data,
        }
    }

    pub fn start(&self) -> SimTime {
        self.start
    }

    pub fn stop(&self) -> SimTime {
        self.stop
    }

    pub fn is_start_included(&self) -> bool {
        self.is_start_included
    }

    pub fn is_stop_included(&self) -> bool {
        self.is_stop_included
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn set_data(&mut self, data: Option<T>) {
        self.data = data;
    }

    /// An interval is empty when its range contains no instant at all.
    pub fn is_empty(&self) -> bool {
        self.start > self.stop
            || (self.start == self.stop && !(self.is_start_included && self.is_stop_included))
    }

    pub fn contains(&self, time: SimTime) -> bool {
        if self.is_empty() {
            return false;
        }
        if time > self.start && time < self.stop {
            return true;
        }
        (time == self.start && self.is_start_included)
            || (time == self.stop && self.is_stop_included)
    }

    fn overlaps(&self, other: &TimeInterval<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.start > other.stop || other.start > self.stop {
            return false;
        }
        if self.start == other.stop && !(self.is_start_included && other.is_stop_included) {
            return false;
        }
        if other.start == self.stop && !(other.is_start_included && self.is_stop_included) {
            return false;
        }
        true
    }

    /// Splits this interval around `range`, keeping the payload on every
    /// surviving piece. Caller has already established that the two overlap.
    fn subtract(self, range: &TimeInterval<T>) -> (Option<TimeInterval<T>>, Option<TimeInterval<T>>)
    where
        T: Clone,
    {
        let left = TimeInterval {
            start: self.start,
            stop: range.start,
            is_start_included: self.is_start_included,
            is_stop_included: !range.is_start_included,
            data: self.data.clone(),
        };
        let right = TimeInterval {
            start: range.stop,
            stop: self.stop,
            is_start_included: !range.is_stop_included,
            is_stop_included: self.is_stop_included,
            data: self.data,
        };
        (
            (!left.is_empty()).then_some(left),
            (!right.is_empty()).then_some(right),
        )
    }
}

/// An ordered set of non-overlapping intervals.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TimeIntervalCollection<T> {
    intervals: Vec<TimeInterval<T>>,
}

impl<T> Default for TimeIntervalCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimeIntervalCollection<T> {
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimeInterval<T>> {
        self.intervals.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeInterval<T>> {
        self.intervals.iter()
    }

    /// Earliest instant covered by any interval.
    pub fn start(&self) -> Option<SimTime> {
        self.intervals.first().map(|interval| interval.start())
    }

    /// Latest instant covered by any interval.
    pub fn stop(&self) -> Option<SimTime> {
        self.intervals.last().map(|interval| interval.stop())
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// The interval whose bounds contain `time`, if any.
    ///
    /// Boundary instants follow the inclusivity flags of each interval; since
    /// intervals never overlap, at most one can match.
    pub fn find_interval_containing(&self, time: SimTime) -> Option<&TimeInterval<T>> {
        let mut index = self.intervals.partition_point(|interval| interval.start() <= time);
        while index > 0 {
            index -= 1;
            let candidate = &self.intervals[index];
            if candidate.contains(time) {
                return Some(candidate);
            }
            if candidate.stop() < time {
                break;
            }
        }
        None
    }

    /// Inserts `interval`, carving its range out of every interval it
    /// overlaps. The newest data wins over the carved range; an interval
    /// overlapped in the middle survives as two pieces sharing its payload.
    pub fn add_interval(&mut self, interval: TimeInterval<T>)
    where
        T: Clone,
    {
        if interval.is_empty() {
            warn!("ignoring empty time interval");
            return;
        }
        self.carve(&interval);
        let index = self.intervals.partition_point(|existing| {
            existing.start() < interval.start()
                || (existing.start() == interval.start()
                    && existing.is_start_included()
                    && !interval.is_start_included())
        });
        self.intervals.insert(index, interval);
    }

    /// Removes the time range of `range` from the collection, trimming or
    /// splitting whatever it overlaps. The payload of `range` is ignored.
    /// Returns whether any interval changed.
    pub fn remove_interval(&mut self, range: &TimeInterval<T>) -> bool
    where
        T: Clone,
    {
        if range.is_empty() {
            return false;
        }
        self.carve(range)
    }

    fn carve(&mut self, range: &TimeInterval<T>) -> bool
    where
        T: Clone,
    {
        if !self.intervals.iter().any(|existing| existing.overlaps(range)) {
            return false;
        }
        let mut carved = Vec::with_capacity(self.intervals.len() + 1);
        for existing in self.intervals.drain(..) {
            if existing.overlaps(range) {
                let (left, right) = existing.subtract(range);
                carved.extend(left);
                carved.extend(right);
            } else {
                carved.push(existing);
            }
        }
        self.intervals = carved;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: f64, stop: f64, data: &str) -> TimeInterval<String> {
        TimeInterval::new(
            SimTime::from_seconds(start),
            SimTime::from_seconds(stop),
            Some(data.to_string()),
        )
    }

    fn data_at(collection: &TimeIntervalCollection<String>, time: f64) -> Option<&str> {
        collection
            .find_interval_containing(SimTime::from_seconds(time))
            .and_then(|interval| interval.data())
            .map(|data| data.as_str())
    }

    #[test]
    fn contains_honors_inclusivity() {
        let closed = interval(0.0, 10.0, "a");
        assert!(closed.contains(SimTime::from_seconds(0.0)));
        assert!(closed.contains(SimTime::from_seconds(10.0)));

        let half_open = TimeInterval::with_bounds(
            SimTime::from_seconds(0.0),
            SimTime::from_seconds(10.0),
            true,
            false,
            Some("a".to_string()),
        );
        assert!(half_open.contains(SimTime::from_seconds(0.0)));
        assert!(half_open.contains(SimTime::from_seconds(5.0)));
        assert!(!half_open.contains(SimTime::from_seconds(10.0)));
    }

    #[test]
    fn single_point_and_empty_intervals() {
        let point = interval(5.0, 5.0, "p");
        assert!(!point.is_empty());
        assert!(point.contains(SimTime::from_seconds(5.0)));

        let empty: TimeInterval<String> = TimeInterval::with_bounds(
            SimTime::from_seconds(5.0),
            SimTime::from_seconds(5.0),
            false,
            true,
            None,
        );
        assert!(empty.is_empty());
        assert!(!empty.contains(SimTime::from_seconds(5.0)));
    }

    #[test]
    fn newest_interval_wins_over_overlap() {
        let mut collection = TimeIntervalCollection::new();
        collection.add_interval(interval(0.0, 10.0, "old"));
        collection.add_interval(interval(4.0, 6.0, "new"));

        assert_eq!(collection.len(), 3);
        assert_eq!(data_at(&collection, 2.0), Some("old"));
        assert_eq!(data_at(&collection, 5.0), Some("new"));
        assert_eq!(data_at(&collection, 8.0), Some("old"));
    }

    #[test]
    fn carving_respects_boundary_inclusivity() {
        let mut collection = TimeIntervalCollection::new();
        collection.add_interval(interval(0.0, 10.0, "old"));
        collection.add_interval(TimeInterval::with_bounds(
            SimTime::from_seconds(10.0),
            SimTime::from_seconds(20.0),
            true,
            true,
            Some("new".to_string()),
        ));

        // The shared instant 10 now belongs to the newer interval.
        assert_eq!(data_at(&collection, 10.0), Some("new"));
        assert_eq!(data_at(&collection, 9.999), Some("old"));
    }

    #[test]
    fn lookup_at_excluded_boundary_falls_back_to_neighbor() {
        let mut collection = TimeIntervalCollection::new();
        collection.add_interval(interval(0.0, 5.0, "a"));
        collection.add_interval(TimeInterval::with_bounds(
            SimTime::from_seconds(5.0),
            SimTime::from_seconds(10.0),
            false,
            true,
            Some("b".to_string()),
        ));

        // 5 is excluded from "b" but "a" kept its closed stop bound.
        assert_eq!(data_at(&collection, 5.0), Some("a"));
        assert_eq!(data_at(&collection, 5.001), Some("b"));
    }

    #[test]
    fn uncovered_times_find_nothing() {
        let mut collection = TimeIntervalCollection::new();
        collection.add_interval(interval(0.0, 1.0, "a"));
        collection.add_interval(interval(3.0, 4.0, "b"));

        assert!(collection
            .find_interval_containing(SimTime::from_seconds(2.0))
            .is_none());
        assert!(collection
            .find_interval_containing(SimTime::from_seconds(-1.0))
            .is_none());
        assert!(collection
            .find_interval_containing(SimTime::from_seconds(9.0))
            .is_none());
    }

    #[test]
    fn empty_intervals_are_ignored_on_insert() {
        let mut collection = TimeIntervalCollection::new();
        collection.add_interval(interval(5.0, 1.0, "backwards"));
        assert!(collection.is_empty());
    }

    #[test]
    fn remove_carves_a_hole() {
        let mut collection = TimeIntervalCollection::new();
        collection.add_interval(interval(0.0, 10.0, "a"));

        let changed = collection.remove_interval(&interval(4.0, 6.0, "ignored"));
        assert!(changed);
        assert_eq!(collection.len(), 2);
        assert_eq!(data_at(&collection, 2.0), Some("a"));
        assert!(data_at(&collection, 5.0).is_none());
        assert_eq!(data_at(&collection, 8.0), Some("a"));

        let unchanged = collection.remove_interval(&interval(20.0, 30.0, "ignored"));
        assert!(!unchanged);
    }

    #[test]
    fn interval_may_cover_time_with_no_payload() {
        let mut collection: TimeIntervalCollection<String> = TimeIntervalCollection::new();
        collection.add_interval(TimeInterval::new(
            SimTime::from_seconds(0.0),
            SimTime::from_seconds(10.0),
            None,
        ));

        let found = collection
            .find_interval_containing(SimTime::from_seconds(5.0))
            .expect("interval covers 5.0");
        assert!(found.data().is_none());
    }

    #[test]
    fn collection_bounds_span_all_intervals() {
        let mut collection = TimeIntervalCollection::new();
        assert!(collection.start().is_none());
        collection.add_interval(interval(3.0, 4.0, "b"));
        collection.add_interval(interval(0.0, 1.0, "a"));
        assert_eq!(collection.start(), Some(SimTime::from_seconds(0.0)));
        assert_eq!(collection.stop(), Some(SimTime::from_seconds(4.0)));
    }
}
