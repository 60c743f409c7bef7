mod artifact;
mod display;
mod outcome;

pub use artifact::Artifact;
pub use display::{DisplayModel, Metric, MetricKind, Section, Theme};
pub use outcome::Outcome;
