use anyhow::Result;
use console::{Style, Term, style};
use serde::Serialize;

use crate::commands::build::BuildReport;
use crate::models::Outcome;
use crate::render::BRAND;

pub struct Output {
    term: Term,
    json: bool,
}

#[derive(Serialize)]
struct OutcomeJson<'a> {
    outcome: Outcome,
    fail_env: &'a str,
}

fn outcome_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::Success => Style::new().green(),
        Outcome::Failure => Style::new().red(),
    }
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    pub fn built(&self, report: &BuildReport) -> Result<()> {
        if self.json {
            return self.print_json(report);
        }

        let outcome = report.outcome();
        self.term.write_line(&format!(
            "{}: Built dashboard ({} mode) -> {}",
            style(BRAND).bold(),
            outcome_style(outcome).bold().apply_to(outcome.mode()),
            style(report.path().display()).cyan()
        ))?;
        for metric in report.metrics() {
            self.term.write_line(&format!(
                "  {}: {}",
                metric.label(),
                metric.display_value()
            ))?;
        }
        Ok(())
    }

    pub fn outcome(&self, outcome: Outcome, fail_env: &str) -> Result<()> {
        if self.json {
            return self.print_json(&OutcomeJson { outcome, fail_env });
        }

        self.term
            .write_line(&outcome_style(outcome).apply_to(outcome.as_ref()).to_string())?;
        Ok(())
    }
}
