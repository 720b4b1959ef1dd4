//! Unit tests for dragresize.

mod perf_tests;
mod resize_tests;
mod rotation_tests;
mod snapshot_tests;
