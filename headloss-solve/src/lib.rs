//! Numerical solvers used by the headloss crates.

mod observe;

pub mod fixed_point;

pub use observe::Observer;
