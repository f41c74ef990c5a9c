use thiserror::Error;
use tracing::{info, instrument};
use tribune_types::{
    validate_configs, ConfigError, Polyline, ProfileSolution, RailingConfig, StairConfig,
    Tolerance, TribuneConfig,
};

use crate::diagnostics::{check_landings, landing_lengths};
use crate::gap::compute_gap;
use crate::placement::Placement;
use crate::stairs::trace_stairs;
use crate::steps::resolve_step_counts;
use crate::tribune::trace_tribune;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Generates tribune, stair and railing geometry from the three
/// configuration groups.
#[derive(Debug, Clone)]
pub struct ProfileSolver {
    pub tribune: TribuneConfig,
    pub stairs: StairConfig,
    pub railings: RailingConfig,
    pub tolerance: Tolerance,
    pub placement: Placement,
}

impl ProfileSolver {
    pub fn new(tribune: TribuneConfig, stairs: StairConfig, railings: RailingConfig) -> Self {
        Self {
            tribune,
            stairs,
            railings,
            tolerance: Tolerance::default(),
            placement: Placement::default(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Validate the configuration, then solve.
    pub fn solve(&self) -> Result<ProfileSolution, SolveError> {
        validate_configs(&self.tribune, &self.stairs, &self.railings)?;
        let solution = solve_with_tolerance(
            &self.tribune,
            &self.stairs,
            &self.railings,
            &self.tolerance,
        );
        Ok(self.placement.apply(solution))
    }
}

/// Solve without validating. A non-positive row count yields an empty
/// solution; every other input is traced as given.
pub fn solve_profile(
    tribune: &TribuneConfig,
    stairs: &StairConfig,
    railings: &RailingConfig,
) -> ProfileSolution {
    solve_with_tolerance(tribune, stairs, railings, &Tolerance::default())
}

#[instrument(skip_all, fields(rows = tribune.rows))]
fn solve_with_tolerance(
    tribune: &TribuneConfig,
    stairs: &StairConfig,
    railings: &RailingConfig,
    tolerance: &Tolerance,
) -> ProfileSolution {
    if tribune.rows <= 0 {
        info!("no elevated rows, returning empty solution");
        return ProfileSolution::empty();
    }

    let step_counts = resolve_step_counts(tribune);
    let tribune_trace = trace_tribune(tribune, stairs, railings, &step_counts);
    let stair_trace = trace_stairs(tribune, stairs, railings, &step_counts, tolerance);

    let gap = compute_gap(&tribune_trace.railings, &stair_trace.flights);
    let lengths = landing_lengths(&stair_trace.flights);
    let diagnostics = check_landings(&stair_trace.flights, &lengths);

    let solution = ProfileSolution {
        tribune_profile: Polyline::from_points(tribune_trace.points),
        stair_profile: Polyline::from_points(stair_trace.points),
        railings: tribune_trace.railings,
        gap,
        step_counts,
        flights: stair_trace.flights,
        row_points: tribune_trace.row_points,
        row_lines: tribune_trace.row_lines,
        railing_midpoints: tribune_trace.railing_midpoints,
        railing_toggles: tribune_trace.railing_toggles,
        landing_lengths: lengths,
        diagnostics,
    };

    let summary = solution.summary();
    info!(
        tribune_points = summary.tribune_points,
        stair_points = summary.stair_points,
        railings = summary.railing_count,
        total_rise = summary.total_rise,
        diagnostics = summary.diagnostic_count,
        "profile solved"
    );
    solution
}
