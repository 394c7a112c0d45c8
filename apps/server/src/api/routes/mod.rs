pub mod metrics;
pub mod recipes;
