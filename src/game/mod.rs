//! Game administration: the single mutation the bot performs.
//!
//! `disable game {game}` flips the `disabled` flag of the named row in the
//! `games` table. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Command handlers in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
