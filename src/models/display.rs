use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::Serialize;
use strum::{AsRefStr, Display};

/// Colors and animation names for one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    status_color: &'static str,
    glow_rgb: &'static str,
    backdrop_tint: &'static str,
    metric_color: &'static str,
    header_animation: &'static str,
    banner_animation: &'static str,
}

impl Theme {
    pub const SUCCESS: Self = Self {
        status_color: "#00ff41",
        glow_rgb: "0, 255, 65",
        backdrop_tint: "#0f0f23",
        metric_color: "#007bff",
        header_animation: "scan",
        banner_animation: "pulse",
    };

    pub const FAILURE: Self = Self {
        status_color: "#ff0055",
        glow_rgb: "255, 0, 85",
        backdrop_tint: "#230f0f",
        metric_color: "#ff0055",
        header_animation: "error-pulse",
        banner_animation: "error-blink",
    };

    pub fn status_color(&self) -> &'static str {
        self.status_color
    }

    /// Comma-separated RGB triple, used inside `rgba(...)` glows.
    pub fn glow_rgb(&self) -> &'static str {
        self.glow_rgb
    }

    pub fn backdrop_tint(&self) -> &'static str {
        self.backdrop_tint
    }

    pub fn metric_color(&self) -> &'static str {
        self.metric_color
    }

    pub fn header_animation(&self) -> &'static str {
        self.header_animation
    }

    pub fn banner_animation(&self) -> &'static str {
        self.banner_animation
    }
}

/// Dashboard card, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display,
)]
pub enum Section {
    #[strum(to_string = "Build Status")]
    BuildStatus,
    #[strum(to_string = "Test Results")]
    TestResults,
    #[strum(to_string = "Artifacts")]
    Artifacts,
    #[strum(to_string = "Deployment")]
    Deployment,
}

impl Section {
    pub const ALL: [Self; 4] = [
        Self::BuildStatus,
        Self::TestResults,
        Self::Artifacts,
        Self::Deployment,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    #[strum(to_string = "Success Rate")]
    SuccessRate,
    #[strum(to_string = "Build Time")]
    BuildTime,
    #[strum(to_string = "Tests Passed")]
    TestsPassed,
    #[strum(to_string = "Tests Failed")]
    TestsFailed,
    #[strum(to_string = "Errors")]
    Errors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    kind: MetricKind,
    value: u32,
}

impl Metric {
    pub fn new(kind: MetricKind, value: u32) -> Self {
        Self { kind, value }
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn label(&self) -> String {
        self.kind.to_string()
    }

    /// Value with its unit, as shown on the dashboard (`100%`, `23s`, `7`).
    pub fn display_value(&self) -> String {
        match self.kind {
            MetricKind::SuccessRate => format!("{}%", self.value),
            MetricKind::BuildTime => format!("{}s", self.value),
            MetricKind::TestsPassed | MetricKind::TestsFailed | MetricKind::Errors => {
                self.value.to_string()
            }
        }
    }
}

/// Everything the dashboard shows, resolved from a single outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    theme: Theme,
    status_text: &'static str,
    icons: BTreeMap<Section, &'static str>,
    narrative: BTreeMap<Section, &'static str>,
    metrics: Vec<Metric>,
    transcript_lines: Vec<&'static str>,
    timestamp: Timestamp,
}

impl DisplayModel {
    pub fn new(
        theme: Theme,
        status_text: &'static str,
        icons: BTreeMap<Section, &'static str>,
        narrative: BTreeMap<Section, &'static str>,
        metrics: Vec<Metric>,
        transcript_lines: Vec<&'static str>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            theme,
            status_text,
            icons,
            narrative,
            metrics,
            transcript_lines,
            timestamp,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn status_color(&self) -> &'static str {
        self.theme.status_color()
    }

    pub fn status_text(&self) -> &'static str {
        self.status_text
    }

    pub fn icon(&self, section: Section) -> &'static str {
        self.icons.get(&section).copied().unwrap_or_default()
    }

    pub fn narrative(&self, section: Section) -> &'static str {
        self.narrative.get(&section).copied().unwrap_or_default()
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn metric(&self, kind: MetricKind) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.kind() == kind)
    }

    pub fn transcript_lines(&self) -> &[&'static str] {
        &self.transcript_lines
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
