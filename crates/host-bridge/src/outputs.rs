use serde::{Deserialize, Serialize};

use profile_solver::{
    Diagnostic, Point2d, ProfileSolution, RailingConfig, SolutionSummary, StairConfig,
    TribuneConfig,
};

/// Host coordinates: `[x, lateral, z]` with the lateral axis always zero.
pub type HostPoint = [f64; 3];

/// Everything published back to the host after a solve, plus echoes of the
/// configuration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileOutputs {
    /// Open polyline, absent when the tribune has no rows.
    pub tribune_profile: Option<Vec<HostPoint>>,
    /// Open polyline, absent when the tribune has no rows.
    pub stairs_profile: Option<Vec<HostPoint>>,
    /// One closed loop (first point repeated last) per railing panel.
    pub railings_profile: Vec<Vec<HostPoint>>,
    pub gaps: f64,
    pub row_points: Vec<HostPoint>,
    /// Start and end of each row's floor line, ground row first.
    pub row_lines: Vec<[HostPoint; 2]>,
    pub railing_midpoints: Vec<HostPoint>,
    pub railing_toggles: Vec<bool>,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: SolutionSummary,
    pub tribune_setup: TribuneConfig,
    pub stair_setup: StairConfig,
    pub rail_setup: RailingConfig,
}

impl ProfileOutputs {
    pub fn new(
        solution: ProfileSolution,
        tribune: TribuneConfig,
        stairs: StairConfig,
        railings: RailingConfig,
    ) -> Self {
        let summary = solution.summary();
        Self {
            tribune_profile: solution.tribune_profile.map(|line| to_host(line.points())),
            stairs_profile: solution.stair_profile.map(|line| to_host(line.points())),
            railings_profile: solution
                .railings
                .iter()
                .map(|panel| to_host(&panel.closed_loop()))
                .collect(),
            gaps: solution.gap,
            row_points: to_host(&solution.row_points),
            row_lines: solution
                .row_lines
                .iter()
                .map(|line| [line.start.to_array3(), line.end.to_array3()])
                .collect(),
            railing_midpoints: to_host(&solution.railing_midpoints),
            railing_toggles: solution.railing_toggles,
            diagnostics: solution.diagnostics,
            summary,
            tribune_setup: tribune,
            stair_setup: stairs,
            rail_setup: railings,
        }
    }
}

fn to_host(points: &[Point2d]) -> Vec<HostPoint> {
    points.iter().map(Point2d::to_array3).collect()
}
