use approx::assert_relative_eq;
use host_bridge::*;

// ── Helper functions ─────────────────────────────────────────────────────

fn solved(response: SolverToHost) -> ProfileOutputs {
    match response {
        SolverToHost::Solved { outputs } => *outputs,
        other => panic!("expected Solved, got {:?}", other),
    }
}

fn two_row_params() -> HostParameters {
    HostParameters {
        rows: 2,
        row_width: 1.0,
        elev_counts: vec![2, 3],
        tread_h: 0.1,
        tread_w: 0.3,
        rail_h: 1.0,
        rail_w: 0.05,
        ..HostParameters::default()
    }
}

// ── Dispatch ─────────────────────────────────────────────────────────────

#[test]
fn solve_publishes_profiles_and_echoes() {
    let outputs = solved(dispatch(HostToSolver::Solve {
        params: two_row_params(),
    }));

    let tribune = outputs.tribune_profile.as_ref().unwrap();
    assert_eq!(tribune.len(), 6);
    assert_relative_eq!(tribune[5][0], 3.0, epsilon = 1e-9);
    assert_eq!(tribune[5][1], 0.0);
    assert_relative_eq!(tribune[5][2], 0.5, epsilon = 1e-9);

    let stairs = outputs.stairs_profile.as_ref().unwrap();
    assert_relative_eq!(stairs.last().unwrap()[2], 0.5, epsilon = 1e-9);

    assert_eq!(outputs.railings_profile.len(), 2);
    for loop_pts in &outputs.railings_profile {
        assert_eq!(loop_pts.len(), 5);
        assert_eq!(loop_pts[0], loop_pts[4]);
    }
    assert_eq!(outputs.gaps, 0.0);

    assert_eq!(outputs.tribune_setup.rows, 2);
    assert_eq!(outputs.stair_setup.tread_w, 0.3);
    assert_eq!(outputs.rail_setup.rail_w, 0.05);
}

#[test]
fn zero_rows_publish_absent_profiles() {
    let outputs = solved(dispatch(HostToSolver::Solve {
        params: HostParameters {
            rows: 0,
            ..HostParameters::default()
        },
    }));
    assert!(outputs.tribune_profile.is_none());
    assert!(outputs.stairs_profile.is_none());
    assert!(outputs.railings_profile.is_empty());
    assert_eq!(outputs.gaps, 0.0);
}

#[test]
fn invalid_params_become_error_message() {
    let response = dispatch(HostToSolver::Solve {
        params: HostParameters {
            row_width: -1.0,
            ..HostParameters::default()
        },
    });
    match response {
        SolverToHost::Error { message } => assert!(message.contains("row width"), "{message}"),
        other => panic!("expected Error, got {:?}", other),
    }
}

#[test]
fn validate_reports_first_problem() {
    match dispatch(HostToSolver::Validate {
        params: HostParameters {
            rows: -2,
            tread_h: 0.0,
            ..HostParameters::default()
        },
    }) {
        SolverToHost::Validated { valid, message } => {
            assert!(!valid);
            assert!(message.unwrap().contains("row count"));
        }
        other => panic!("expected Validated, got {:?}", other),
    }

    match dispatch(HostToSolver::Validate {
        params: HostParameters::default(),
    }) {
        SolverToHost::Validated { valid, message } => {
            assert!(valid);
            assert!(message.is_none());
        }
        other => panic!("expected Validated, got {:?}", other),
    }
}

#[test]
fn defaults_message_returns_standard_set() {
    match dispatch(HostToSolver::Defaults) {
        SolverToHost::Defaults { params } => assert_eq!(params, HostParameters::default()),
        other => panic!("expected Defaults, got {:?}", other),
    }
}

// ── JSON round trip ──────────────────────────────────────────────────────

#[test]
fn json_solve_with_missing_params_uses_defaults() {
    let response = handle_json(r#"{"type": "Solve"}"#);
    let parsed: SolverToHost = serde_json::from_str(&response).unwrap();
    let outputs = solved(parsed);

    assert_eq!(outputs.tribune_setup.rows, 10);
    assert_eq!(outputs.summary.tribune_points, 22);
    assert_eq!(outputs.summary.railing_count, 10);
}

#[test]
fn json_partial_params() {
    let response = handle_json(
        r#"{"type": "Solve", "params": {"rows": 3, "elev": [4], "row_width": 1.5}}"#,
    );
    let outputs = solved(serde_json::from_str(&response).unwrap());
    assert_eq!(outputs.tribune_setup.elev_counts, vec![4]);
    let top = outputs.tribune_profile.unwrap().last().copied().unwrap();
    assert_relative_eq!(top[2], 3.0 * 4.0 * 0.15, epsilon = 1e-9);
}

#[test]
fn json_malformed_request() {
    let response = handle_json("{not json");
    let value: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(value["type"], "Error");
    assert!(value["message"]
        .as_str()
        .unwrap()
        .starts_with("serialization error"));
}

#[test]
fn json_unknown_message_type() {
    let response = handle_json(r#"{"type": "Extrude"}"#);
    let value: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(value["type"], "Error");
}

#[test]
fn json_flip_mirrors_published_points() {
    let response = handle_json(r#"{"type": "Solve", "params": {"rows": 2, "flip": true}}"#);
    let outputs = solved(serde_json::from_str(&response).unwrap());
    let tribune = outputs.tribune_profile.unwrap();
    assert!(tribune.iter().skip(1).all(|p| p[0] < 0.0));
    assert_relative_eq!(outputs.summary.total_run, 2.4, epsilon = 1e-9);
    assert_relative_eq!(outputs.row_lines[2][1][0], -2.4, epsilon = 1e-9);
}

#[test]
fn json_stair_insets_and_row_lines() {
    let response = handle_json(
        r#"{"type": "Solve", "params": {"rows": 2, "stair_insets": [true]}}"#,
    );
    let outputs = solved(serde_json::from_str(&response).unwrap());
    assert_eq!(outputs.tribune_setup.stair_insets, vec![true]);
    assert_eq!(outputs.row_lines.len(), 3);
    for line in &outputs.row_lines {
        assert_relative_eq!(line[1][0] - line[0][0], 0.8, epsilon = 1e-9);
        assert_eq!(line[0][1], 0.0);
    }

    // Two default steps: the first flight starts 0.8 - 0.28 + 0.05 from the origin.
    let stairs = outputs.stairs_profile.unwrap();
    assert_relative_eq!(stairs[0][0], 0.57, epsilon = 1e-9);
}
