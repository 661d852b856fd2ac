//! Adapter implementations for game persistence.

pub mod memory;
pub mod postgres;
