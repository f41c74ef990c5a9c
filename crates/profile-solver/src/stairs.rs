use tracing::debug;
use tribune_types::{FlightRecord, Point2d, RailingConfig, StairConfig, Tolerance, TribuneConfig};

/// Raw output of the stair pass.
#[derive(Debug, Clone, Default)]
pub struct StairTrace {
    pub points: Vec<Point2d>,
    pub flights: Vec<FlightRecord>,
}

/// Trace one stair flight per elevated row.
///
/// Flight `r` climbs `step_counts[r]` risers and ends horizontally at the
/// landing edge of tribune row `r + 1`, so its start is found by backing off
/// `(count - 1) × tread_w` from that edge. Inset flights then move forward by
/// `rail_w` to clear the railing. A connecting point is emitted at the
/// flight's foot unless the previous flight already ended there.
///
/// Flights that overlap the previous one, or start behind the origin, are
/// traced as-is.
pub fn trace_stairs(
    tribune: &TribuneConfig,
    stairs: &StairConfig,
    railings: &RailingConfig,
    step_counts: &[u32],
    tolerance: &Tolerance,
) -> StairTrace {
    let mut trace = StairTrace::default();
    let mut base_x = tribune.row_width;
    let mut base_z = 0.0;

    for (row, &count) in step_counts.iter().enumerate() {
        let landing_z = base_z + f64::from(count) * stairs.tread_h;
        let flight_run = f64::from(count - 1) * stairs.tread_w;
        let inset = if tribune.is_inset(row) {
            railings.rail_w
        } else {
            0.0
        };
        let start = Point2d::new(base_x - flight_run + inset, base_z);

        let bridged = match trace.points.last() {
            Some(last) => !tolerance.points_coincident(last, &start),
            None => true,
        };
        if bridged {
            trace.points.push(start);
        }

        let mut cursor = start;
        for step in 0..count {
            cursor.z += stairs.tread_h;
            trace.points.push(cursor);
            if step + 1 < count {
                cursor.x += stairs.tread_w;
                trace.points.push(cursor);
            }
        }

        debug!(
            row,
            count,
            start_x = start.x,
            inset,
            landing_z,
            bridged,
            "stair flight traced"
        );
        trace.flights.push(FlightRecord {
            row,
            step_count: count,
            inset,
            start_x: start.x,
            end_x: cursor.x,
            base_z,
            landing_z,
        });

        base_x += tribune.row_width;
        base_z = landing_z;
    }

    trace
}
