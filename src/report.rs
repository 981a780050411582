//! Merged validation report: pass/fail classification, exit code and
//! human-readable rendering.

use colored::{Color, Colorize};
use serde::Serialize;

use crate::error::Findings;

pub const EXIT_PASS: u8 = 0;
pub const EXIT_FAIL: u8 = 1;
/// The document could not be loaded, so no validator ran.
pub const EXIT_LOAD_ERROR: u8 = 2;

const RULE_WIDTH: usize = 50;
const HEADER: &str = "Workflow Validation Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Pass,
    PassWithWarnings,
    Fail,
}

impl Outcome {
    /// Warnings never change the exit code.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Pass | Outcome::PassWithWarnings => EXIT_PASS,
            Outcome::Fail => EXIT_FAIL,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub status: Outcome,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<Findings> for Report {
    fn from(findings: Findings) -> Self {
        let status = if findings.has_errors() {
            Outcome::Fail
        } else if findings.warnings.is_empty() {
            Outcome::Pass
        } else {
            Outcome::PassWithWarnings
        };
        Report {
            status,
            errors: findings.errors,
            warnings: findings.warnings,
        }
    }
}

impl Report {
    pub fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }

    /// Render the text report. `color` toggles ANSI styling.
    pub fn render(&self, color: bool) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        blank(&mut out);
        line(&mut out, &rule);
        line(&mut out, &paint(HEADER, Color::Blue, color));
        line(&mut out, &rule);

        if self.status == Outcome::Pass {
            line(
                &mut out,
                &paint("✅ Workflow validation passed with no issues!", Color::Green, color),
            );
            return out;
        }

        if !self.errors.is_empty() {
            blank(&mut out);
            let heading = format!("❌ Found {} error(s):", self.errors.len());
            line(&mut out, &paint(&heading, Color::Red, color));
            numbered(&mut out, &self.errors, Color::Red, color);
        }

        if !self.warnings.is_empty() {
            blank(&mut out);
            let heading = format!("⚠️  Found {} warning(s):", self.warnings.len());
            line(&mut out, &paint(&heading, Color::Yellow, color));
            numbered(&mut out, &self.warnings, Color::Yellow, color);
        }

        blank(&mut out);
        line(&mut out, &rule);

        let summary = match self.status {
            Outcome::Fail => paint(
                "❌ Validation failed - please fix errors before deployment",
                Color::Red,
                color,
            ),
            _ => paint(
                "⚠️  Validation passed with warnings - review before deployment",
                Color::Yellow,
                color,
            ),
        };
        line(&mut out, &summary);

        out
    }
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn blank(out: &mut String) {
    out.push('\n');
}

fn numbered(out: &mut String, items: &[String], color: Color, enabled: bool) {
    for (i, item) in items.iter().enumerate() {
        line(out, &paint(&format!("{}. {}", i + 1, item), color, enabled));
    }
}
