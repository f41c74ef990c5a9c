use serde::{Deserialize, Serialize};

use crate::outputs::ProfileOutputs;
use crate::params::HostParameters;

/// Messages from the host environment to the solver.
/// Serialized as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostToSolver {
    /// Validate and solve. Missing parameters take their defaults.
    Solve {
        #[serde(default)]
        params: HostParameters,
    },
    /// Validate only, without generating geometry.
    Validate {
        #[serde(default)]
        params: HostParameters,
    },
    /// Ask for the default parameter set.
    Defaults,
}

/// Messages from the solver back to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SolverToHost {
    /// Solve completed; outputs are ready to publish.
    Solved { outputs: Box<ProfileOutputs> },

    /// Validation result. `message` describes the first problem found.
    Validated {
        valid: bool,
        message: Option<String>,
    },

    Defaults { params: HostParameters },

    /// The request could not be handled.
    Error { message: String },
}
