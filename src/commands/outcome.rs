use crate::config::Config;
use crate::models::Outcome;
use crate::resolver::resolve;

/// Resolve the outcome from the configured toggle without rendering anything.
pub fn run(config: &Config) -> Outcome {
    let signal = std::env::var(&config.fail_env).ok();
    resolve(signal.as_deref())
}
