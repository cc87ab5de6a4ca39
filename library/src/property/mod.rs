//! Position sources evaluated over simulation time.
//!
//! Every source implements [`PositionProperty`]: it produces spatial samples
//! at requested times, natively expressed in the frame it reports through
//! [`PositionProperty::reference_frame`]. Sources are composed as shared
//! trait objects (`Arc<dyn PositionProperty>`), so a
//! [`CompositePositionProperty`] can delegate to any of them per interval.

pub mod composite;
pub mod constant;
pub mod sampled;

pub use composite::CompositePositionProperty;
pub use constant::ConstantPositionProperty;
pub use sampled::SampledPositionProperty;

use crate::error::OrreryError;
use crate::frame::{convert_to_frame, ReferenceFrame};
use crate::model::time::SimTime;
use crate::model::vector::Cartesian3;

/// A value that can be evaluated to a spatial position at a given time.
pub trait PositionProperty: Send + Sync {
    /// Whether consumers must re-evaluate this property as time advances.
    fn is_time_varying(&self) -> bool;

    /// Frame in which raw samples from [`value`](Self::value) are expressed.
    fn reference_frame(&self) -> ReferenceFrame;

    /// Raw sample at `time`, in this property's native frame.
    ///
    /// `Ok(None)` means no data applies at `time`. Absence is a first-class
    /// outcome and never interchangeable with a zero position.
    fn value(&self, time: SimTime) -> Result<Option<Cartesian3>, OrreryError>;

    /// Sample at `time`, normalized into `frame`.
    fn value_in_frame(
        &self,
        time: SimTime,
        frame: ReferenceFrame,
    ) -> Result<Option<Cartesian3>, OrreryError> {
        let raw = self.value(time)?;
        Ok(raw.map(|value| convert_to_frame(time, value, self.reference_frame(), frame)))
    }
}

/// Rejects the non-finite instants that stand in for a missing time argument.
pub(crate) fn require_time(time: SimTime) -> Result<(), OrreryError> {
    if time.is_finite() {
        Ok(())
    } else {
        Err(OrreryError::InvalidArgument("time is required".to_string()))
    }
}
