//! Simulation driving loop

pub mod runner;

pub use runner::{Outcome, RunReport, Simulation};
