//! Command dispatch gateway.
//!
//! Inbound text is matched against registered patterns, bound parameters
//! are handed to the command's handler, and the handler answers through a
//! conversation-scoped [`ports::ResponseWriter`]. The module follows the
//! crate's hexagonal layout:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Routing services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
