use serde::{Deserialize, Serialize};

use crate::geometry::{Point2d, Polyline, RailingPanel, RowLine};

/// One stair flight, climbing from `base_z` to `landing_z` and ending
/// horizontally at the landing edge of its tribune row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Zero-based flight index; flight `r` lands on elevated row `r + 1`.
    pub row: usize,
    pub step_count: u32,
    /// Horizontal shift applied to clear the railing, zero when not inset.
    pub inset: f64,
    pub start_x: f64,
    pub end_x: f64,
    pub base_z: f64,
    pub landing_z: f64,
}

/// Non-fatal findings about a generated profile. Geometry is never altered
/// because of a diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Diagnostic {
    /// The flight starts before the previous flight ended (or before the
    /// origin, for the first flight).
    NegativeLanding { row: usize, length: f64 },
}

/// Everything a single solve produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSolution {
    /// Tribune silhouette: ground row, then riser/tread pairs.
    pub tribune_profile: Option<Polyline>,
    /// Stair silhouette across all flights.
    pub stair_profile: Option<Polyline>,
    pub railings: Vec<RailingPanel>,
    /// Railing-to-nosing clearance. Not computed yet, always zero.
    pub gap: f64,
    /// Resolved step count per elevated row.
    pub step_counts: Vec<u32>,
    pub flights: Vec<FlightRecord>,
    /// Nominal row start (riser edge plus railing thickness), ground row first.
    pub row_points: Vec<Point2d>,
    /// Floor line of each row, ground row first.
    pub row_lines: Vec<RowLine>,
    /// Top-edge midpoint of each emitted railing.
    pub railing_midpoints: Vec<Point2d>,
    /// Resolved railing switch per row, ground row first (always on).
    pub railing_toggles: Vec<bool>,
    /// Landing lengths between consecutive flights, one per flight.
    pub landing_lengths: Vec<f64>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Counts and extents of a solution, for logs and host display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub tribune_points: usize,
    pub stair_points: usize,
    pub railing_count: usize,
    pub total_rise: f64,
    pub total_run: f64,
    pub diagnostic_count: usize,
}

impl ProfileSolution {
    /// The solution for a tribune with no elevated rows.
    pub fn empty() -> Self {
        Self {
            tribune_profile: None,
            stair_profile: None,
            railings: Vec::new(),
            gap: 0.0,
            step_counts: Vec::new(),
            flights: Vec::new(),
            row_points: Vec::new(),
            row_lines: Vec::new(),
            railing_midpoints: Vec::new(),
            railing_toggles: Vec::new(),
            landing_lengths: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tribune_profile.is_none() && self.stair_profile.is_none() && self.railings.is_empty()
    }

    /// `total_run` is a magnitude, so a mirrored profile reports the same run.
    pub fn summary(&self) -> SolutionSummary {
        let (total_run, total_rise) = match &self.tribune_profile {
            Some(profile) => {
                let end = profile.end();
                let start = profile.start();
                ((end.x - start.x).abs(), end.z - start.z)
            }
            None => (0.0, 0.0),
        };
        SolutionSummary {
            tribune_points: self.tribune_profile.as_ref().map_or(0, Polyline::len),
            stair_points: self.stair_profile.as_ref().map_or(0, Polyline::len),
            railing_count: self.railings.len(),
            total_rise,
            total_run,
            diagnostic_count: self.diagnostics.len(),
        }
    }
}
