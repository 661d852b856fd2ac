//! Step definitions for command dispatch scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
