//! # lessonplan
//!
//! Library half of the lesson plan binary: the HTTP surface and
//! configuration, exposed for the CLI and for integration tests.

pub mod api;
pub mod config;
