//! Domain model for game mutations.

mod outcome;

pub use outcome::DisableGameOutcome;
