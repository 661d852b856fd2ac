//! Unit tests for bot sessions.

mod console_tests;
