//! Unit tests for `tinct-core`.

mod support;

mod collector_tests;
