pub mod build;
pub mod outcome;
