/// Rejected solver configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("row count must not be negative, got {rows}")]
    NegativeRows { rows: i32 },

    #[error("row width must be positive, got {value}")]
    NonPositiveRowWidth { value: f64 },

    #[error("tread height must be positive, got {value}")]
    NonPositiveTreadHeight { value: f64 },

    #[error("tread width must be positive, got {value}")]
    NonPositiveTreadWidth { value: f64 },

    #[error("railing height must not be negative, got {value}")]
    NegativeRailHeight { value: f64 },

    #[error("railing width must not be negative, got {value}")]
    NegativeRailWidth { value: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Geometry that breaks a structural rule, typically after deserialization.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("polyline needs at least two points, got {count}")]
    TooFewPoints { count: usize },
}
