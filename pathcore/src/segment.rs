use core::fmt;
use core::mem::take;

use heapless::Vec;

use crate::path::{EventMarker, Waypoint};

/// A contiguous run of waypoints between stop points.
///
/// `start` and `end` are the indices of the run's first and last waypoint in
/// the original sequence, recorded while splitting. Marker selection uses
/// these indices, never value lookup in the original sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct WaypointGroup<const N: usize> {
    pub waypoints: Vec<Waypoint, N>,
    pub start: usize,
    pub end: usize,
}

/// Error on splitting a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentError {
    EmptyPath,
    CapacityExceeded,
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "the path contains no waypoints."),
            Self::CapacityExceeded => write!(f, "the path exceeds the chosen capacity."),
        }
    }
}

/// Splits `waypoints` into contiguous groups at stop points.
///
/// A group closes at a waypoint with `is_stop_point` set, or at the end of
/// the sequence. Every closing waypoint except the last of the whole path is
/// duplicated as the first waypoint of the next group, so adjacent groups
/// share their boundary anchor as spline continuity requires. A path without
/// stop points yields exactly one group equal to the input.
pub fn split<const N: usize>(
    waypoints: &[Waypoint],
) -> Result<Vec<WaypointGroup<N>, N>, SegmentError> {
    if waypoints.is_empty() {
        return Err(SegmentError::EmptyPath);
    }

    let mut groups = Vec::new();
    let mut current = Vec::new();
    let mut start = 0;
    for (i, waypoint) in waypoints.iter().enumerate() {
        current
            .push(*waypoint)
            .map_err(|_| SegmentError::CapacityExceeded)?;

        let is_last = i == waypoints.len() - 1;
        if waypoint.is_stop_point || is_last {
            groups
                .push(WaypointGroup {
                    waypoints: take(&mut current),
                    start,
                    end: i,
                })
                .map_err(|_| SegmentError::CapacityExceeded)?;
            if !is_last {
                // The boundary waypoint opens the next group as well.
                current
                    .push(*waypoint)
                    .map_err(|_| SegmentError::CapacityExceeded)?;
                start = i;
            }
        }
    }
    Ok(groups)
}

impl<const N: usize> WaypointGroup<N> {
    /// Markers whose original position falls inside this group's index
    /// range, rewritten relative to the group's first waypoint.
    ///
    /// The range check is inclusive on both ends: a marker sitting exactly
    /// on a shared boundary waypoint belongs to both adjacent groups.
    pub fn markers_within<const M: usize>(
        &self,
        markers: &[EventMarker],
    ) -> Result<Vec<EventMarker, M>, SegmentError> {
        let mut selected = Vec::new();
        for marker in markers {
            if marker.position >= self.start as f32 && marker.position <= self.end as f32 {
                selected
                    .push(marker.rebased(self.start))
                    .map_err(|_| SegmentError::CapacityExceeded)?;
            }
        }
        Ok(selected)
    }
}
