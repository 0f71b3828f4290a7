//! Shared output utilities

pub mod display;

pub use display::{ColorOutput, GridRenderer, RunFormatter};
