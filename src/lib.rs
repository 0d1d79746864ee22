// Library crate exposing modules for integration tests and benches

pub mod cli;
pub mod estimator;
pub mod model;
pub mod report;
pub mod repository;
pub mod util;
