use crate::path::PathConstraints;

/// An ordered, non-empty list of constraints applied to segments in order.
///
/// Segment `i` receives the `i`-th entry; once the list is exhausted every
/// remaining segment receives the last entry. Constraints are never
/// interpolated. A two-element list therefore gives the first segment its
/// own limits and every later segment a uniform one.
#[derive(Clone, Copy, Debug)]
pub struct ConstraintSchedule<'a> {
    constraints: &'a [PathConstraints],
}

impl<'a> ConstraintSchedule<'a> {
    pub fn new(constraints: &'a [PathConstraints]) -> Option<Self> {
        if constraints.is_empty() {
            return None;
        }
        Some(Self { constraints })
    }

    /// Constraints assigned to the `index`-th segment.
    pub fn get(&self, index: usize) -> PathConstraints {
        self.constraints[index.min(self.constraints.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use uom::si::{
        acceleration::meter_per_second_squared, f32::Acceleration, f32::Velocity,
        velocity::meter_per_second,
    };

    use super::*;

    fn constraints(max_velocity: f32, max_acceleration: f32) -> PathConstraints {
        PathConstraints::new(
            Velocity::new::<meter_per_second>(max_velocity),
            Acceleration::new::<meter_per_second_squared>(max_acceleration),
        )
    }

    #[test]
    fn test_last_constraint_repeats_for_excess_segments() {
        let supplied = [constraints(4.0, 3.0), constraints(2.0, 1.5)];
        let schedule = ConstraintSchedule::new(&supplied).unwrap();
        let assigned: std::vec::Vec<_> = (0..4).map(|i| schedule.get(i)).collect();
        assert_eq!(
            assigned,
            std::vec![supplied[0], supplied[1], supplied[1], supplied[1]],
        );
    }

    #[test]
    fn test_single_constraint_single_segment() {
        let supplied = [constraints(4.0, 3.0)];
        let schedule = ConstraintSchedule::new(&supplied).unwrap();
        assert_eq!(schedule.get(0), supplied[0]);
    }

    #[test]
    fn test_empty_constraint_list_is_rejected() {
        assert!(ConstraintSchedule::new(&[]).is_none());
    }
}
