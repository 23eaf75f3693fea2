//! Core types shared across the headloss crates.

pub mod constraint;
