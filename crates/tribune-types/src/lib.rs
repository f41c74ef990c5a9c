pub mod config;
pub mod error;
pub mod geometry;
pub mod solution;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use solution::*;
