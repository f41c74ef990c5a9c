use tracing::{debug, warn};

use profile_solver::{validate_configs, ProfileSolver};

use crate::messages::{HostToSolver, SolverToHost};
use crate::outputs::ProfileOutputs;
use crate::params::HostParameters;

/// Errors from the host bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("solve error: {0}")]
    Solve(#[from] profile_solver::SolveError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

/// Dispatch a host message to the solver and return a response.
///
/// Never fails: errors are reported back as `SolverToHost::Error`.
pub fn dispatch(msg: HostToSolver) -> SolverToHost {
    match handle_message(msg) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "host request failed");
            SolverToHost::Error {
                message: e.to_string(),
            }
        }
    }
}

fn handle_message(msg: HostToSolver) -> Result<SolverToHost, BridgeError> {
    match msg {
        HostToSolver::Solve { params } => {
            let outputs = solve_params(&params)?;
            Ok(SolverToHost::Solved {
                outputs: Box::new(outputs),
            })
        }

        HostToSolver::Validate { params } => {
            let result = validate_configs(&params.tribune(), &params.stairs(), &params.railings());
            Ok(SolverToHost::Validated {
                valid: result.is_ok(),
                message: result.err().map(|e| e.to_string()),
            })
        }

        HostToSolver::Defaults => Ok(SolverToHost::Defaults {
            params: HostParameters::default(),
        }),
    }
}

/// Solve a host parameter set and package the outputs for publishing.
pub fn solve_params(params: &HostParameters) -> Result<ProfileOutputs, BridgeError> {
    let tribune = params.tribune();
    let stairs = params.stairs();
    let railings = params.railings();

    let solution = ProfileSolver::new(tribune.clone(), stairs, railings.clone())
        .with_placement(params.placement())
        .solve()?;
    debug!(railings = solution.railings.len(), "host solve complete");

    Ok(ProfileOutputs::new(solution, tribune, stairs, railings))
}

/// Decode a JSON request, dispatch it, and encode the JSON response.
pub fn handle_json(request: &str) -> String {
    let response = match serde_json::from_str::<HostToSolver>(request) {
        Ok(msg) => dispatch(msg),
        Err(e) => {
            let err = BridgeError::Serialization {
                reason: e.to_string(),
            };
            warn!(error = %err, "malformed host request");
            SolverToHost::Error {
                message: err.to_string(),
            }
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        serde_json::json!({
            "type": "Error",
            "message": format!("serialization error: {e}"),
        })
        .to_string()
    })
}
