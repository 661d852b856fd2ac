//! Gamebot: a chat command gateway for game administration.
//!
//! The bot listens for commands on Slack, matches them against registered
//! `{placeholder}` patterns and runs the bound handler. The one
//! administrative command, `disable game {game}`, flips a row in the `games`
//! table and reports the outcome back to the conversation.
//!
//! # Architecture
//!
//! Gamebot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (Postgres, Slack, etc.)
//!
//! # Modules
//!
//! - [`command`]: Pattern matching, command routing, built-in commands
//! - [`game`]: The `disable game` mutation and its stores
//! - [`observer`]: Bounded command event channel and its logging consumer
//! - [`session`]: Slack and console message sources
//! - [`config`]: Settings resolved from the environment and an env file
//! - [`app`]: Router wiring

pub mod app;
pub mod command;
pub mod config;
pub mod game;
pub mod observer;
pub mod session;
