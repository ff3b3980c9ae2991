use heapless::String;
#[allow(unused_imports)]
use micromath::F32Ext;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uom::si::f32::{Acceleration, Angle, Length, Velocity};

use crate::NAME_CAPACITY;

/// A type for 2D positions on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: Length,
    pub y: Length,
}

/// One control point of an authored path.
///
/// Produced by the path parser and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Waypoint {
    pub anchor: Position,
    /// Incoming spline tangent handle; `None` at the path's first waypoint.
    #[builder(default, setter(strip_option))]
    pub prev_control: Option<Position>,
    /// Outgoing spline tangent handle; `None` at the path's last waypoint.
    #[builder(default, setter(strip_option))]
    pub next_control: Option<Position>,
    /// Target speed at this waypoint; `None` means no override.
    #[builder(default, setter(strip_option))]
    pub velocity_override: Option<Velocity>,
    /// Target heading at this waypoint.
    #[builder(default)]
    pub holonomic_angle: Angle,
    /// The path direction flips at this waypoint.
    #[builder(default)]
    pub is_reversal: bool,
    /// This waypoint terminates the current segment.
    #[builder(default)]
    pub is_stop_point: bool,
}

/// A named event at a fractional position along the original waypoint
/// sequence.
///
/// `floor(position)` is the index of the waypoint immediately preceding the
/// event and the fractional part is interpolation progress toward the next
/// waypoint. Positions stay in the original sequence's index space until a
/// segment rebases them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    pub name: String<NAME_CAPACITY>,
    pub position: f32,
}

impl EventMarker {
    /// Returns `None` if `name` exceeds [`NAME_CAPACITY`].
    pub fn new(name: &str, position: f32) -> Option<Self> {
        let mut marker_name = String::new();
        marker_name.push_str(name).ok()?;
        Some(Self {
            name: marker_name,
            position,
        })
    }

    /// Index of the waypoint immediately preceding the event.
    pub fn waypoint_index(&self) -> usize {
        self.position.floor() as usize
    }

    /// Interpolation progress toward the next waypoint, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        self.position.fract()
    }

    /// A copy of this marker with its position expressed relative to the
    /// waypoint at `start` in the original sequence.
    pub fn rebased(&self, start: usize) -> Self {
        Self {
            name: self.name.clone(),
            position: self.position - start as f32,
        }
    }
}

/// Motion limits applied while generating one segment's trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathConstraints {
    pub max_velocity: Velocity,
    pub max_acceleration: Acceleration,
}

impl PathConstraints {
    pub fn new(max_velocity: Velocity, max_acceleration: Acceleration) -> Self {
        Self {
            max_velocity,
            max_acceleration,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{f32::Length, length::meter};

    use super::*;

    #[test]
    fn test_marker_position_parts() {
        let marker = EventMarker::new("intake_down", 2.25).unwrap();
        assert_eq!(marker.waypoint_index(), 2);
        assert_relative_eq!(marker.progress(), 0.25);
    }

    #[test]
    fn test_marker_rebase_keeps_original() {
        let marker = EventMarker::new("shoot", 3.5).unwrap();
        let rebased = marker.rebased(2);
        assert_relative_eq!(rebased.position, 1.5);
        assert_eq!(rebased.name, marker.name);
        // The original marker value is untouched.
        assert_relative_eq!(marker.position, 3.5);
    }

    #[test]
    fn test_marker_name_capacity() {
        assert!(EventMarker::new(&"x".repeat(NAME_CAPACITY + 1), 0.0).is_none());
    }

    #[test]
    fn test_waypoint_builder_defaults() {
        let waypoint = Waypoint::builder()
            .anchor(Position {
                x: Length::new::<meter>(1.0),
                y: Length::new::<meter>(2.0),
            })
            .build();
        assert_eq!(waypoint.prev_control, None);
        assert_eq!(waypoint.next_control, None);
        assert_eq!(waypoint.velocity_override, None);
        assert!(!waypoint.is_reversal);
        assert!(!waypoint.is_stop_point);
    }
}
