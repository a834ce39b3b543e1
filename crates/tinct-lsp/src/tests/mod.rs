//! Unit tests for the LSP adapter.

mod encoder_tests;
mod encoding_tests;
mod legend_tests;
