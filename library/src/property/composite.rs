use std::sync::Arc;

use log::debug;

use crate::error::OrreryError;
use crate::frame::{convert_to_frame, ReferenceFrame};
use crate::model::interval::TimeIntervalCollection;
use crate::model::time::SimTime;
use crate::model::vector::Cartesian3;

use super::{require_time, PositionProperty};

/// A position source that changes identity over time.
///
/// Each interval of the owned collection carries another
/// [`PositionProperty`]. A query first asks the collection which interval
/// contains the requested time, then delegates evaluation to that interval's
/// source and normalizes the raw sample from the source's native frame into
/// the requested one. Times covered by no interval, and intervals carrying no
/// source, both evaluate to no value.
///
/// The composite never caches: every query re-resolves against the current
/// collection contents, so interval membership changed through
/// [`intervals_mut`](Self::intervals_mut) is visible on the next query.
pub struct CompositePositionProperty {
    intervals: TimeIntervalCollection<Arc<dyn PositionProperty>>,
    reference_frame: ReferenceFrame,
}

impl CompositePositionProperty {
    /// An empty composite whose nominal frame is [`ReferenceFrame::Fixed`].
    pub fn new() -> Self {
        Self::with_reference_frame(ReferenceFrame::Fixed)
    }

    pub fn with_reference_frame(reference_frame: ReferenceFrame) -> Self {
        Self {
            intervals: TimeIntervalCollection::new(),
            reference_frame,
        }
    }

    /// The owned interval collection.
    pub fn intervals(&self) -> &TimeIntervalCollection<Arc<dyn PositionProperty>> {
        &self.intervals
    }

    /// Mutable handle to the owned collection. Interval membership is managed
    /// by the caller through this accessor; the composite itself never
    /// mutates it.
    pub fn intervals_mut(&mut self) -> &mut TimeIntervalCollection<Arc<dyn PositionProperty>> {
        &mut self.intervals
    }

    /// Sets the nominal frame of the composite itself. This does not change
    /// the native frame of any interval's source, nor the outcome of already
    /// evaluated queries.
    pub fn set_reference_frame(&mut self, reference_frame: ReferenceFrame) {
        self.reference_frame = reference_frame;
    }
}

impl Default for CompositePositionProperty {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionProperty for CompositePositionProperty {
    /// Always true, even while the collection is empty: the set of applicable
    /// sources itself varies with time, so results must never be cached.
    fn is_time_varying(&self) -> bool {
        true
    }

    /// The nominal frame. Advisory only: plain [`value`](Self::value) queries
    /// normalize into the fixed frame regardless of this setting.
    fn reference_frame(&self) -> ReferenceFrame {
        self.reference_frame
    }

    /// Equivalent to `value_in_frame(time, ReferenceFrame::Fixed)`. The
    /// nominal `reference_frame` is deliberately not consulted here.
    fn value(&self, time: SimTime) -> Result<Option<Cartesian3>, OrreryError> {
        self.value_in_frame(time, ReferenceFrame::Fixed)
    }

    fn value_in_frame(
        &self,
        time: SimTime,
        frame: ReferenceFrame,
    ) -> Result<Option<Cartesian3>, OrreryError> {
        require_time(time)?;
        let Some(interval) = self.intervals.find_interval_containing(time) else {
            debug!("no interval contains time {:?}", time);
            return Ok(None);
        };
        let Some(source) = interval.data() else {
            return Ok(None);
        };
        let Some(raw) = source.value(time)? else {
            return Ok(None);
        };
        Ok(Some(convert_to_frame(
            time,
            raw,
            source.reference_frame(),
            frame,
        )))
    }
}
