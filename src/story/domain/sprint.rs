//! Sprint value object parsed from list names.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static SPRINT_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Sprint\.\s+[0-9]+\s+\(([0-9]{4})([0-9]{2})([0-9]{2})\)")
        .expect("sprint pattern compiles")
});

/// A dated work period, derived from a list named `Sprint. <n> (YYYYMMDD)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sprint {
    label: String,
    due_date: NaiveDate,
}

impl Sprint {
    /// Creates a sprint from an already-known label and due date.
    #[must_use]
    pub fn new(label: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            due_date,
        }
    }

    /// Parses a list name into a sprint.
    ///
    /// Returns `None` when the name does not follow the sprint convention or
    /// when the encoded digits do not form a calendar date.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let captures = SPRINT_LIST.captures(label)?;
        let year = captures.get(1)?.as_str().parse().ok()?;
        let month = captures.get(2)?.as_str().parse().ok()?;
        let day = captures.get(3)?.as_str().parse().ok()?;
        let due_date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self::new(label, due_date))
    }

    /// Returns the full list name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}
