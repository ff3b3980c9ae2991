use core::fmt;

use heapless::Vec;

use crate::constraint::ConstraintSchedule;
use crate::path::{EventMarker, PathConstraints, Waypoint};
use crate::segment::{split, SegmentError};

/// One segment's worth of input to a trajectory generator: a contiguous
/// waypoint run, its rebased markers, the motion limits to generate under,
/// and whether the path is followed reversed.
#[derive(Clone, Copy, Debug)]
pub struct PathSegment<'a> {
    pub waypoints: &'a [Waypoint],
    pub markers: &'a [EventMarker],
    pub constraints: PathConstraints,
    pub reversed: bool,
}

/// Downstream trajectory generation, invoked once per segment in path order.
///
/// Tunables of a concrete generator (e.g. its sampling resolution) belong to
/// the implementing type, not to any ambient state of this crate.
pub trait TrajectoryGenerator {
    type Trajectory;

    fn generate(&mut self, segment: PathSegment<'_>) -> Self::Trajectory;
}

/// Error on building a path group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupError {
    EmptyPath,
    EmptyConstraints,
    CapacityExceeded,
}

impl From<SegmentError> for GroupError {
    fn from(error: SegmentError) -> Self {
        match error {
            SegmentError::EmptyPath => Self::EmptyPath,
            SegmentError::CapacityExceeded => Self::CapacityExceeded,
        }
    }
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "the path contains no waypoints."),
            Self::EmptyConstraints => write!(f, "at least one constraint is required."),
            Self::CapacityExceeded => write!(f, "the path exceeds the chosen capacity."),
        }
    }
}

/// Splits the path at stop points and generates one trajectory per segment,
/// in original path order.
///
/// `N` bounds the waypoint count and `M` the marker count of one segment.
/// Constraints are assigned in order, repeating the last entry once the
/// supplied list is exhausted; `reversed` applies uniformly to every
/// segment.
pub fn build_group<G, const N: usize, const M: usize>(
    waypoints: &[Waypoint],
    markers: &[EventMarker],
    constraints: &[PathConstraints],
    reversed: bool,
    generator: &mut G,
) -> Result<Vec<G::Trajectory, N>, GroupError>
where
    G: TrajectoryGenerator,
{
    let schedule = ConstraintSchedule::new(constraints).ok_or(GroupError::EmptyConstraints)?;
    let groups = split::<N>(waypoints)?;

    let mut marker_groups: Vec<Vec<EventMarker, M>, N> = Vec::new();
    for group in &groups {
        marker_groups
            .push(group.markers_within(markers)?)
            .map_err(|_| GroupError::CapacityExceeded)?;
    }
    // One marker group per waypoint group; divergence is a logic defect in
    // the splitting pass, not a caller error.
    assert_eq!(
        groups.len(),
        marker_groups.len(),
        "waypoint group count diverged from marker group count"
    );

    let mut trajectories = Vec::new();
    for (i, (group, group_markers)) in groups.iter().zip(marker_groups.iter()).enumerate() {
        let trajectory = generator.generate(PathSegment {
            waypoints: &group.waypoints,
            markers: group_markers,
            constraints: schedule.get(i),
            reversed,
        });
        trajectories
            .push(trajectory)
            .map_err(|_| GroupError::CapacityExceeded)?;
    }
    Ok(trajectories)
}

/// Generates a single trajectory from the whole path, ignoring stop points.
pub fn build_path<G>(
    waypoints: &[Waypoint],
    markers: &[EventMarker],
    constraints: PathConstraints,
    reversed: bool,
    generator: &mut G,
) -> Result<G::Trajectory, GroupError>
where
    G: TrajectoryGenerator,
{
    if waypoints.is_empty() {
        return Err(GroupError::EmptyPath);
    }
    Ok(generator.generate(PathSegment {
        waypoints,
        markers,
        constraints,
        reversed,
    }))
}
