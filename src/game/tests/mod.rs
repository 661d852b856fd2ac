//! Unit tests for the game module.

mod connection_tests;
