use tracing::debug;
use tribune_types::{RailingConfig, RailingPanel, TribuneConfig};

/// Railing panel for elevated row `row`, anchored at the riser edge `riser_x`.
///
/// The panel runs from the foot of the riser up to `rail_h` above its top.
/// Panels at least as wide as the row are dropped.
pub fn railing_at_riser(
    row: usize,
    riser_x: f64,
    riser_top_z: f64,
    row_rise: f64,
    tribune: &TribuneConfig,
    railings: &RailingConfig,
) -> Option<RailingPanel> {
    if railings.rail_w < tribune.row_width {
        Some(RailingPanel::anchored(
            row,
            riser_x,
            riser_top_z - row_rise,
            riser_top_z + railings.rail_h,
            railings.rail_w,
        ))
    } else {
        debug!(
            row,
            rail_w = railings.rail_w,
            row_width = tribune.row_width,
            "railing wider than row, omitted"
        );
        None
    }
}
