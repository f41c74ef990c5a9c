use tracing::debug;
use tribune_types::{Point2d, RailingConfig, RailingPanel, RowLine, StairConfig, TribuneConfig};

use crate::railing::railing_at_riser;

/// Raw output of the tribune pass, before it is assembled into a solution.
#[derive(Debug, Clone, Default)]
pub struct TribuneTrace {
    /// Ground row, then one riser vertex and one tread vertex per row.
    pub points: Vec<Point2d>,
    pub railings: Vec<RailingPanel>,
    pub row_points: Vec<Point2d>,
    pub row_lines: Vec<RowLine>,
    pub railing_midpoints: Vec<Point2d>,
    pub railing_toggles: Vec<bool>,
}

/// Walk the tribune silhouette: the ground row first, then for every elevated
/// row a riser of `count × tread_h` followed by a tread of `row_width`.
///
/// `step_counts[r]` is the resolved step count of elevated row `r + 1`.
/// Railings are placed at each riser as the walk passes it.
pub fn trace_tribune(
    tribune: &TribuneConfig,
    stairs: &StairConfig,
    railings: &RailingConfig,
    step_counts: &[u32],
) -> TribuneTrace {
    let mut trace = TribuneTrace::default();
    let mut x = 0.0;
    let mut z = 0.0;

    trace.points.push(Point2d::new(x, z));
    trace.row_points.push(Point2d::new(x + railings.rail_w, z));
    trace.railing_toggles.push(true);
    trace.row_lines.push(row_line(0, x, z, tribune.row_width));

    x += tribune.row_width;
    trace.points.push(Point2d::new(x, z));

    for (index, &count) in step_counts.iter().enumerate() {
        let row = index + 1;
        let row_rise = f64::from(count) * stairs.tread_h;

        // Riser
        z += row_rise;
        trace.points.push(Point2d::new(x, z));
        trace.row_points.push(Point2d::new(x + railings.rail_w, z));
        trace.row_lines.push(row_line(row, x, z, tribune.row_width));

        let enabled = railings.is_enabled(row);
        trace.railing_toggles.push(enabled);
        if enabled {
            if let Some(panel) = railing_at_riser(row, x, z, row_rise, tribune, railings) {
                trace.railing_midpoints.push(panel.top_midpoint());
                trace.railings.push(panel);
            }
        }
        debug!(row, count, row_rise, elevation = z, railing = enabled, "tribune row traced");

        // Tread
        x += tribune.row_width;
        trace.points.push(Point2d::new(x, z));
    }

    trace
}

fn row_line(row: usize, riser_x: f64, z: f64, row_width: f64) -> RowLine {
    RowLine {
        row,
        start: Point2d::new(riser_x, z),
        end: Point2d::new(riser_x + row_width, z),
    }
}
