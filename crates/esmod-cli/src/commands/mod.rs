//! Command implementations.

pub mod run;

pub use run::execute as run_execute;
