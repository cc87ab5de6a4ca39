use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;
use crate::frame::ReferenceFrame;
use crate::model::time::SimTime;
use crate::model::vector::Cartesian3;

use super::{require_time, PositionProperty};

/// A single time-tagged position sample.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct PositionSample {
    pub time: SimTime,
    pub position: Cartesian3,
}

/// A position source interpolating linearly between time-tagged samples.
///
/// Samples are kept sorted by time. Queries outside the sampled window yield
/// no value; a position source does not extrapolate.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SampledPositionProperty {
    samples: Vec<PositionSample>,
    reference_frame: ReferenceFrame,
}

impl SampledPositionProperty {
    pub fn new() -> Self {
        Self::in_frame(ReferenceFrame::Fixed)
    }

    pub fn in_frame(reference_frame: ReferenceFrame) -> Self {
        Self {
            samples: Vec::new(),
            reference_frame,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Adds a sample, keeping the list sorted. A sample at an identical time
    /// is replaced.
    pub fn add_sample(&mut self, time: SimTime, position: Cartesian3) -> Result<(), OrreryError> {
        require_time(time)?;
        match self.samples.binary_search_by(|sample| sample.time.cmp(&time)) {
            Ok(index) => self.samples[index].position = position,
            Err(index) => self.samples.insert(index, PositionSample { time, position }),
        }
        Ok(())
    }

    pub fn add_samples(
        &mut self,
        samples: impl IntoIterator<Item = (SimTime, Cartesian3)>,
    ) -> Result<(), OrreryError> {
        for (time, position) in samples {
            self.add_sample(time, position)?;
        }
        Ok(())
    }
}

impl PositionProperty for SampledPositionProperty {
    fn is_time_varying(&self) -> bool {
        true
    }

    fn reference_frame(&self) -> ReferenceFrame {
        self.reference_frame
    }

    fn value(&self, time: SimTime) -> Result<Option<Cartesian3>, OrreryError> {
        require_time(time)?;
        if self.samples.is_empty() {
            return Ok(None);
        }
        let first = &self.samples[0];
        let last = &self.samples[self.samples.len() - 1];
        if time < first.time || time > last.time {
            debug!("time {:?} outside sampled window", time);
            return Ok(None);
        }
        match self.samples.binary_search_by(|sample| sample.time.cmp(&time)) {
            Ok(index) => Ok(Some(self.samples[index].position)),
            Err(index) => {
                // Inside the window, so both neighbors exist.
                let before = &self.samples[index - 1];
                let after = &self.samples[index];
                let t = time.seconds_since(before.time) / after.time.seconds_since(before.time);
                Ok(Some(before.position.lerp(&after.position, t)))
            }
        }
    }
}
