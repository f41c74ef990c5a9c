use serde::{Deserialize, Serialize};
use tribune_types::{Point2d, Polyline, ProfileSolution, RailingPanel, RowLine};

/// Where a solved profile sits in the host's section plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Mirror about the vertical axis through the local origin.
    #[serde(default)]
    pub flip: bool,
    /// Translation applied after mirroring.
    #[serde(default = "origin")]
    pub origin: Point2d,
}

fn origin() -> Point2d {
    Point2d::ORIGIN
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            flip: false,
            origin: Point2d::ORIGIN,
        }
    }
}

impl Placement {
    pub fn is_identity(&self) -> bool {
        !self.flip && self.origin == Point2d::ORIGIN
    }

    pub fn apply_point(&self, p: Point2d) -> Point2d {
        let x = if self.flip { -p.x } else { p.x };
        Point2d::new(x + self.origin.x, p.z + self.origin.z)
    }

    fn apply_polyline(&self, line: Polyline) -> Option<Polyline> {
        Polyline::from_points(line.into_points().into_iter().map(|p| self.apply_point(p)).collect())
    }

    fn apply_panel(&self, panel: RailingPanel) -> RailingPanel {
        RailingPanel {
            row: panel.row,
            corners: panel.corners.map(|p| self.apply_point(p)),
        }
    }

    fn apply_row_line(&self, line: RowLine) -> RowLine {
        RowLine {
            row: line.row,
            start: self.apply_point(line.start),
            end: self.apply_point(line.end),
        }
    }

    /// Move every generated point of `solution`. Flight records, landing
    /// lengths and diagnostics stay in local profile space.
    pub fn apply(&self, mut solution: ProfileSolution) -> ProfileSolution {
        if self.is_identity() {
            return solution;
        }
        solution.tribune_profile = solution
            .tribune_profile
            .and_then(|line| self.apply_polyline(line));
        solution.stair_profile = solution
            .stair_profile
            .and_then(|line| self.apply_polyline(line));
        solution.railings = solution
            .railings
            .into_iter()
            .map(|panel| self.apply_panel(panel))
            .collect();
        solution.row_points = solution
            .row_points
            .into_iter()
            .map(|p| self.apply_point(p))
            .collect();
        solution.row_lines = solution
            .row_lines
            .into_iter()
            .map(|line| self.apply_row_line(line))
            .collect();
        solution.railing_midpoints = solution
            .railing_midpoints
            .into_iter()
            .map(|p| self.apply_point(p))
            .collect();
        solution
    }
}
