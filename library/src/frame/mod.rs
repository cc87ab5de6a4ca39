//! Reference frames and per-time frame conversion.

use serde::{Deserialize, Serialize};

use crate::model::time::SimTime;
use crate::model::vector::Cartesian3;

/// Mean Earth rotation rate, in radians per second.
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5;

/// Coordinate frame a position sample is expressed in.
///
/// `Fixed` rotates with the Earth, `Inertial` does not. The two are related
/// by a rotation about the Z axis whose angle depends on the evaluation time,
/// so converting between them requires knowing when the sample was taken.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceFrame {
    #[default]
    Fixed,
    Inertial,
}

/// Rotation angle of the fixed frame relative to the inertial frame at
/// `time`. Zero at the scene epoch.
fn rotation_angle(time: SimTime) -> f64 {
    EARTH_ROTATION_RATE * time.seconds()
}

fn rotate_z(value: Cartesian3, angle: f64) -> Cartesian3 {
    let (sin, cos) = angle.sin_cos();
    Cartesian3::new(
        cos * value.x - sin * value.y,
        sin * value.x + cos * value.y,
        value.z,
    )
}

/// Converts `value`, expressed in `from` at `time`, into `to`.
///
/// A pure function of its arguments with no hidden state; when the frames are
/// equal the input is returned unchanged.
pub fn convert_to_frame(
    time: SimTime,
    value: Cartesian3,
    from: ReferenceFrame,
    to: ReferenceFrame,
) -> Cartesian3 {
    match (from, to) {
        (ReferenceFrame::Fixed, ReferenceFrame::Inertial) => rotate_z(value, rotation_angle(time)),
        (ReferenceFrame::Inertial, ReferenceFrame::Fixed) => rotate_z(value, -rotation_angle(time)),
        _ => value,
    }
}
