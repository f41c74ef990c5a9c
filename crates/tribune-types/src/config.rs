use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Base geometry of the tribune: how many elevated rows, how deep each row
/// is, and how many stair steps make up each row's riser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TribuneConfig {
    /// Elevated rows beyond the ground row. Zero or less produces no geometry.
    pub rows: i32,
    /// Horizontal depth of every row.
    pub row_width: f64,
    /// Step count per elevated row. The last entry repeats for the remaining
    /// rows; an empty list means one step per row.
    #[serde(default)]
    pub elev_counts: Vec<i32>,
    /// Cyclic per-flight switches, indexed by `flight % len`. An inset flight
    /// starts one railing thickness further back. Empty means no insets.
    #[serde(default)]
    pub stair_insets: Vec<bool>,
}

/// Riser height and tread depth of a single stair step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairConfig {
    pub tread_h: f64,
    pub tread_w: f64,
}

/// Railing panel dimensions, plus optional per-row on/off switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailingConfig {
    /// Height of the panel above the top of its riser.
    pub rail_h: f64,
    /// Horizontal thickness of the panel.
    pub rail_w: f64,
    /// Cyclic per-row toggles, indexed by `row % len`. Empty means every row
    /// gets a railing.
    #[serde(default)]
    pub toggles: Vec<bool>,
}

impl TribuneConfig {
    pub fn new(rows: i32, row_width: f64, elev_counts: Vec<i32>) -> Self {
        Self {
            rows,
            row_width,
            elev_counts,
            stair_insets: Vec::new(),
        }
    }

    pub fn with_stair_insets(mut self, stair_insets: Vec<bool>) -> Self {
        self.stair_insets = stair_insets;
        self
    }

    /// Whether flight `flight` (0-indexed) is inset behind its railing.
    pub fn is_inset(&self, flight: usize) -> bool {
        if self.stair_insets.is_empty() {
            return false;
        }
        self.stair_insets[flight % self.stair_insets.len()]
    }

    /// Number of elevated rows to generate, with negative counts treated as none.
    pub fn row_count(&self) -> usize {
        self.rows.max(0) as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 0 {
            return Err(ConfigError::NegativeRows { rows: self.rows });
        }
        check_finite("row_width", self.row_width)?;
        if self.row_width <= 0.0 {
            return Err(ConfigError::NonPositiveRowWidth {
                value: self.row_width,
            });
        }
        Ok(())
    }
}

impl Default for TribuneConfig {
    fn default() -> Self {
        Self::new(10, 0.8, vec![2])
    }
}

impl StairConfig {
    pub fn new(tread_h: f64, tread_w: f64) -> Self {
        Self { tread_h, tread_w }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("tread_h", self.tread_h)?;
        check_finite("tread_w", self.tread_w)?;
        if self.tread_h <= 0.0 {
            return Err(ConfigError::NonPositiveTreadHeight {
                value: self.tread_h,
            });
        }
        if self.tread_w <= 0.0 {
            return Err(ConfigError::NonPositiveTreadWidth {
                value: self.tread_w,
            });
        }
        Ok(())
    }
}

impl Default for StairConfig {
    fn default() -> Self {
        Self {
            tread_h: 0.15,
            tread_w: 0.28,
        }
    }
}

impl RailingConfig {
    pub fn new(rail_h: f64, rail_w: f64) -> Self {
        Self {
            rail_h,
            rail_w,
            toggles: Vec::new(),
        }
    }

    /// Same panel dimensions with cyclic per-row toggles.
    pub fn with_toggles(mut self, toggles: Vec<bool>) -> Self {
        self.toggles = toggles;
        self
    }

    /// Whether the elevated row `row` (1-indexed) carries a railing.
    pub fn is_enabled(&self, row: usize) -> bool {
        if self.toggles.is_empty() {
            return true;
        }
        self.toggles[row % self.toggles.len()]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("rail_h", self.rail_h)?;
        check_finite("rail_w", self.rail_w)?;
        if self.rail_h < 0.0 {
            return Err(ConfigError::NegativeRailHeight { value: self.rail_h });
        }
        if self.rail_w < 0.0 {
            return Err(ConfigError::NegativeRailWidth { value: self.rail_w });
        }
        Ok(())
    }
}

impl Default for RailingConfig {
    fn default() -> Self {
        Self::new(1.0, 0.05)
    }
}

/// Validate all three configuration groups, reporting the first failure.
pub fn validate_configs(
    tribune: &TribuneConfig,
    stairs: &StairConfig,
    railings: &RailingConfig,
) -> Result<(), ConfigError> {
    tribune.validate()?;
    stairs.validate()?;
    railings.validate()
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}
