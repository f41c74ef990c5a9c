//! Glue between a host design environment and the profile solver.
//!
//! The host sends flat parameters as JSON; the bridge validates and solves
//! them and answers with host-ready point lists. Publishing those outputs is
//! left to the caller.

pub mod dispatch;
pub mod messages;
pub mod outputs;
pub mod params;

pub use dispatch::{dispatch, handle_json, solve_params, BridgeError};
pub use messages::{HostToSolver, SolverToHost};
pub use outputs::{HostPoint, ProfileOutputs};
pub use params::HostParameters;
