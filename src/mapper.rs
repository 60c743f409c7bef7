//! Maps an [`Outcome`] to everything the dashboard displays.
//!
//! All copy, colors and icons are fixed per outcome. The only varying inputs
//! are the clock and the random source, both passed in by the caller.

use std::collections::BTreeMap;
use std::ops::Range;

use jiff::Timestamp;

use crate::models::{DisplayModel, Metric, MetricKind, Outcome, Section, Theme};
use crate::rng::RandomSource;

pub const SUCCESS_STATUS: &str = "BUILD SUCCESSFUL";
pub const FAILURE_STATUS: &str = "BUILD FAILED";

pub const BUILD_TIME_SECS: Range<u32> = 15..45;
pub const TESTS_PASSED: Range<u32> = 20..70;
pub const TESTS_FAILED: Range<u32> = 5..20;
pub const ERRORS: Range<u32> = 2..10;

const SUCCESS_TRANSCRIPT: &[&str] = &[
    "> cargo test",
    "✓ All tests passed",
    "> cargo run --release -- build",
    "✓ Build completed successfully",
    "> Artifacts archived",
];

const FAILURE_TRANSCRIPT: &[&str] = &[
    "> cargo test",
    "❌ Test suite failed",
    "> Error: expected 5, received 4",
    "> Tests: 1 failed, 0 passed",
    "> cargo run --release -- build",
    "⚠️  Build completed with errors",
    "> Artifacts generated with warnings",
];

fn icon_for(outcome: Outcome, section: Section) -> &'static str {
    match (outcome, section) {
        (Outcome::Success, Section::BuildStatus) => "✅",
        (Outcome::Failure, Section::BuildStatus) => "❌",
        (Outcome::Success, Section::TestResults) => "🧪",
        (Outcome::Failure, Section::TestResults) => "🧨",
        (_, Section::Artifacts) => "📦",
        (Outcome::Success, Section::Deployment) => "🚀",
        (Outcome::Failure, Section::Deployment) => "🚫",
    }
}

fn narrative_for(outcome: Outcome, section: Section) -> &'static str {
    match (outcome, section) {
        (Outcome::Success, Section::BuildStatus) => {
            "All tests passed successfully. The application has been built and is ready for deployment."
        }
        (Outcome::Failure, Section::BuildStatus) => {
            "Build process encountered errors during test execution. Review logs for detailed information."
        }
        (Outcome::Success, Section::TestResults) => {
            "Unit tests executed with full coverage. All assertions validated against expected behavior."
        }
        (Outcome::Failure, Section::TestResults) => {
            "Unit tests failed during execution. Assertion errors detected in test suite validation."
        }
        (Outcome::Success, Section::Artifacts) => {
            "Build artifacts generated and archived. Ready for distribution to target environments."
        }
        (Outcome::Failure, Section::Artifacts) => {
            "Build artifacts generated with warnings. Manual review required before deployment."
        }
        (Outcome::Success, Section::Deployment) => {
            "Pipeline ready for deployment. All quality gates passed with automated validation."
        }
        (Outcome::Failure, Section::Deployment) => {
            "Deployment blocked due to failed quality gates. Fix issues before proceeding."
        }
    }
}

/// Samples happen in a fixed order (build time, tests, errors) so a seeded
/// source always yields the same numbers.
fn sample_metrics(outcome: Outcome, rng: &mut dyn RandomSource) -> Vec<Metric> {
    let build_time = Metric::new(MetricKind::BuildTime, rng.gen_range(BUILD_TIME_SECS));

    match outcome {
        Outcome::Success => vec![
            Metric::new(MetricKind::SuccessRate, 100),
            build_time,
            Metric::new(MetricKind::TestsPassed, rng.gen_range(TESTS_PASSED)),
            Metric::new(MetricKind::Errors, 0),
        ],
        Outcome::Failure => {
            let failed = rng.gen_range(TESTS_FAILED);
            let errors = rng.gen_range(ERRORS);
            vec![
                Metric::new(MetricKind::SuccessRate, 0),
                build_time,
                Metric::new(MetricKind::TestsFailed, failed),
                Metric::new(MetricKind::Errors, errors),
            ]
        }
    }
}

pub fn to_display_model(
    outcome: Outcome,
    now: Timestamp,
    rng: &mut dyn RandomSource,
) -> DisplayModel {
    let (theme, status_text, transcript) = match outcome {
        Outcome::Success => (Theme::SUCCESS, SUCCESS_STATUS, SUCCESS_TRANSCRIPT),
        Outcome::Failure => (Theme::FAILURE, FAILURE_STATUS, FAILURE_TRANSCRIPT),
    };

    let icons: BTreeMap<_, _> = Section::ALL
        .iter()
        .map(|&s| (s, icon_for(outcome, s)))
        .collect();
    let narrative: BTreeMap<_, _> = Section::ALL
        .iter()
        .map(|&s| (s, narrative_for(outcome, s)))
        .collect();

    DisplayModel::new(
        theme,
        status_text,
        icons,
        narrative,
        sample_metrics(outcome, rng),
        transcript.to_vec(),
        now,
    )
}
