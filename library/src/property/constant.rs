use serde::{Deserialize, Serialize};

use crate::error::OrreryError;
use crate::frame::ReferenceFrame;
use crate::model::time::SimTime;
use crate::model::vector::Cartesian3;

use super::{require_time, PositionProperty};

/// A position source holding a single sample, valid at every time.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct ConstantPositionProperty {
    value: Cartesian3,
    reference_frame: ReferenceFrame,
}

impl ConstantPositionProperty {
    pub fn new(value: Cartesian3) -> Self {
        Self::in_frame(value, ReferenceFrame::Fixed)
    }

    pub fn in_frame(value: Cartesian3, reference_frame: ReferenceFrame) -> Self {
        Self {
            value,
            reference_frame,
        }
    }

    pub fn set_value(&mut self, value: Cartesian3) {
        self.value = value;
    }

    pub fn set_reference_frame(&mut self, reference_frame: ReferenceFrame) {
        self.reference_frame = reference_frame;
    }
}

impl PositionProperty for ConstantPositionProperty {
    fn is_time_varying(&self) -> bool {
        false
    }

    fn reference_frame(&self) -> ReferenceFrame {
        self.reference_frame
    }

    fn value(&self, time: SimTime) -> Result<Option<Cartesian3>, OrreryError> {
        require_time(time)?;
        Ok(Some(self.value))
    }
}
