//! Unit tests for the CLI runtime.

mod output_tests;
mod support;
