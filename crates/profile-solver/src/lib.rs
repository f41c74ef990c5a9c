pub mod diagnostics;
pub mod gap;
pub mod placement;
pub mod railing;
pub mod solver;
pub mod stairs;
pub mod steps;
pub mod tribune;

pub use placement::Placement;
pub use solver::{solve_profile, ProfileSolver, SolveError};
pub use steps::{resolve_step_count, resolve_step_counts};
pub use tribune_types::*;
