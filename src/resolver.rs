use tracing::{debug, warn};

use crate::helpers::find_similar;
use crate::models::Outcome;

const FAILURE_VALUE: &str = "true";

/// Turn the raw failure-injection toggle into an [`Outcome`].
///
/// Only `true` (trimmed, any case) forces a failure. Anything else, including
/// an absent or empty value, is a success.
pub fn resolve(signal: Option<&str>) -> Outcome {
    let normalized = signal.map(|s| s.trim().to_ascii_lowercase());

    let outcome = match normalized.as_deref() {
        Some(FAILURE_VALUE) => Outcome::Failure,
        Some(other) => {
            if let Some(suggestion) = find_similar(other, &[FAILURE_VALUE]) {
                warn!("Failure toggle value {other:?} is ignored. Did you mean: {suggestion}");
            }
            Outcome::Success
        }
        None => Outcome::Success,
    };

    debug!(?signal, %outcome, "resolved build outcome");
    outcome
}
