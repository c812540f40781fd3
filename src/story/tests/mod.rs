//! Unit tests for the story module.
