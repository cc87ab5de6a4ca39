//! Core library for the Orrery scene animator: positions that vary over
//! simulation time, expressed in convertible reference frames.

pub mod error;
pub mod frame;
pub mod model;
pub mod property;

pub use crate::error::OrreryError;
pub use crate::frame::{convert_to_frame, ReferenceFrame, EARTH_ROTATION_RATE};
pub use crate::model::interval::{TimeInterval, TimeIntervalCollection};
pub use crate::model::time::SimTime;
pub use crate::model::vector::Cartesian3;
pub use crate::property::{
    CompositePositionProperty, ConstantPositionProperty, PositionProperty,
    SampledPositionProperty,
};
