use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A point in the section plane: `x` runs horizontally away from the front
/// row, `z` is elevation. The lateral axis is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub z: f64,
}

impl Point2d {
    pub const ORIGIN: Self = Self { x: 0.0, z: 0.0 };

    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            z: (self.z + other.z) * 0.5,
        }
    }

    /// Host-facing 3D coordinates with the lateral axis pinned to zero.
    pub fn to_array3(&self) -> [f64; 3] {
        [self.x, 0.0, self.z]
    }
}

/// Tolerance used when deciding whether two generated points coincide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tolerance {
    /// Per-axis distance under which two points are the same vertex.
    pub coincidence: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { coincidence: 1e-3 }
    }
}

impl Tolerance {
    /// True when both coordinates differ by at most `coincidence`.
    pub fn points_coincident(&self, a: &Point2d, b: &Point2d) -> bool {
        (a.x - b.x).abs() <= self.coincidence && (a.z - b.z).abs() <= self.coincidence
    }
}

/// An open polyline through an ordered point sequence. Always holds at least
/// two points, including when read back from serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolylineRepr", into = "PolylineRepr")]
pub struct Polyline {
    points: Vec<Point2d>,
}

#[derive(Serialize, Deserialize)]
struct PolylineRepr {
    points: Vec<Point2d>,
}

impl TryFrom<PolylineRepr> for Polyline {
    type Error = GeometryError;

    fn try_from(repr: PolylineRepr) -> Result<Self, Self::Error> {
        let count = repr.points.len();
        Self::from_points(repr.points).ok_or(GeometryError::TooFewPoints { count })
    }
}

impl From<Polyline> for PolylineRepr {
    fn from(line: Polyline) -> Self {
        Self {
            points: line.points,
        }
    }
}

impl Polyline {
    /// Build a polyline, or `None` when fewer than two points are given.
    pub fn from_points(points: Vec<Point2d>) -> Option<Self> {
        if points.len() < 2 {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Point2d {
        self.points.first().copied().unwrap_or(Point2d::ORIGIN)
    }

    pub fn end(&self) -> Point2d {
        self.points.last().copied().unwrap_or(Point2d::ORIGIN)
    }

    /// Consecutive vertex pairs, one per segment.
    pub fn segments(&self) -> impl Iterator<Item = (Point2d, Point2d)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance_to(&b)).sum()
    }

    pub fn into_points(self) -> Vec<Point2d> {
        self.points
    }
}

/// Closed axis-aligned railing rectangle. Corners run bottom-inner,
/// top-inner, top-outer, bottom-outer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailingPanel {
    /// Elevated row (1-indexed) whose riser anchors this panel.
    pub row: usize,
    pub corners: [Point2d; 4],
}

impl RailingPanel {
    /// Panel anchored at a riser edge `x`, spanning `bottom_z..top_z`
    /// vertically and `x..x + width` horizontally.
    pub fn anchored(row: usize, x: f64, bottom_z: f64, top_z: f64, width: f64) -> Self {
        Self {
            row,
            corners: [
                Point2d::new(x, bottom_z),
                Point2d::new(x, top_z),
                Point2d::new(x + width, top_z),
                Point2d::new(x + width, bottom_z),
            ],
        }
    }

    pub fn width(&self) -> f64 {
        (self.corners[2].x - self.corners[0].x).abs()
    }

    pub fn height(&self) -> f64 {
        self.corners[1].z - self.corners[0].z
    }

    /// Midpoint of the top edge.
    pub fn top_midpoint(&self) -> Point2d {
        self.corners[1].midpoint(&self.corners[2])
    }

    /// The outline as a closed loop: four corners followed by the first again.
    pub fn closed_loop(&self) -> Vec<Point2d> {
        let mut pts = self.corners.to_vec();
        pts.push(self.corners[0]);
        pts
    }
}

/// Usable floor of one row: from the riser edge to the far end of its tread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowLine {
    /// Row index, 0 for the ground row.
    pub row: usize,
    pub start: Point2d,
    pub end: Point2d,
}

impl RowLine {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}
