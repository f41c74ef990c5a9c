use tribune_types::{FlightRecord, RailingPanel};

/// Horizontal clearance between railing faces and the stair nosings that
/// follow them.
///
/// Not computed yet: always returns zero.
// TODO: define the clearance once the railing face / nosing pairing is settled
// (inner vs outer railing face, and whether disabled railings count).
pub fn compute_gap(_railings: &[RailingPanel], _flights: &[FlightRecord]) -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_is_zero() {
        let panel = RailingPanel::anchored(1, 1.0, 0.0, 1.2, 0.05);
        let flight = FlightRecord {
            row: 0,
            step_count: 2,
            inset: 0.0,
            start_x: 0.7,
            end_x: 1.0,
            base_z: 0.0,
            landing_z: 0.2,
        };
        assert_eq!(compute_gap(&[panel], &[flight]), 0.0);
        assert_eq!(compute_gap(&[], &[]), 0.0);
    }
}
