use serde::{Deserialize, Serialize};

use profile_solver::{Placement, Point2d, RailingConfig, StairConfig, TribuneConfig};

/// Flat parameter set supplied by the host. Missing fields take the standard
/// tribune defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostParameters {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_row_width")]
    pub row_width: f64,
    #[serde(default = "default_elev_counts", alias = "elev")]
    pub elev_counts: Vec<i32>,
    #[serde(default = "default_tread_h")]
    pub tread_h: f64,
    #[serde(default = "default_tread_w")]
    pub tread_w: f64,
    #[serde(default = "default_rail_h")]
    pub rail_h: f64,
    #[serde(default = "default_rail_w")]
    pub rail_w: f64,
    #[serde(default)]
    pub stair_insets: Vec<bool>,
    #[serde(default)]
    pub railing_toggles: Vec<bool>,
    #[serde(default)]
    pub flip: bool,
    #[serde(default)]
    pub origin: Option<Point2d>,
}

fn default_rows() -> i32 {
    TribuneConfig::default().rows
}

fn default_row_width() -> f64 {
    TribuneConfig::default().row_width
}

fn default_elev_counts() -> Vec<i32> {
    TribuneConfig::default().elev_counts
}

fn default_tread_h() -> f64 {
    StairConfig::default().tread_h
}

fn default_tread_w() -> f64 {
    StairConfig::default().tread_w
}

fn default_rail_h() -> f64 {
    RailingConfig::default().rail_h
}

fn default_rail_w() -> f64 {
    RailingConfig::default().rail_w
}

impl Default for HostParameters {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            row_width: default_row_width(),
            elev_counts: default_elev_counts(),
            tread_h: default_tread_h(),
            tread_w: default_tread_w(),
            rail_h: default_rail_h(),
            rail_w: default_rail_w(),
            stair_insets: Vec::new(),
            railing_toggles: Vec::new(),
            flip: false,
            origin: None,
        }
    }
}

impl HostParameters {
    pub fn tribune(&self) -> TribuneConfig {
        TribuneConfig::new(self.rows, self.row_width, self.elev_counts.clone())
            .with_stair_insets(self.stair_insets.clone())
    }

    pub fn stairs(&self) -> StairConfig {
        StairConfig::new(self.tread_h, self.tread_w)
    }

    pub fn railings(&self) -> RailingConfig {
        RailingConfig::new(self.rail_h, self.rail_w).with_toggles(self.railing_toggles.clone())
    }

    pub fn placement(&self) -> Placement {
        Placement {
            flip: self.flip,
            origin: self.origin.unwrap_or(Point2d::ORIGIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let params: HostParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(params, HostParameters::default());
        assert_eq!(params.rows, 10);
        assert_eq!(params.row_width, 0.8);
        assert_eq!(params.elev_counts, vec![2]);
        assert_eq!(params.tread_h, 0.15);
        assert_eq!(params.tread_w, 0.28);
        assert_eq!(params.rail_h, 1.0);
        assert_eq!(params.rail_w, 0.05);
    }

    #[test]
    fn test_partial_override() {
        let params: HostParameters =
            serde_json::from_str(r#"{"rows": 3, "elev": [1, 2]}"#).unwrap();
        assert_eq!(params.rows, 3);
        assert_eq!(params.elev_counts, vec![1, 2]);
        assert_eq!(params.tread_w, 0.28);
        assert!(params.stair_insets.is_empty());
    }

    #[test]
    fn test_stair_insets_reach_tribune_config() {
        let params: HostParameters =
            serde_json::from_str(r#"{"stair_insets": [false, true]}"#).unwrap();
        let tribune = params.tribune();
        assert_eq!(tribune.stair_insets, vec![false, true]);
        assert!(tribune.is_inset(1));
    }

    #[test]
    fn test_placement_from_params() {
        let params = HostParameters {
            flip: true,
            origin: Some(Point2d::new(2.0, 0.0)),
            ..HostParameters::default()
        };
        let placement = params.placement();
        assert!(placement.flip);
        assert_eq!(placement.origin, Point2d::new(2.0, 0.0));
        assert!(HostParameters::default().placement().is_identity());
    }
}
