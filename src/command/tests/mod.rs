//! Unit tests for the command module.

mod help_tests;
