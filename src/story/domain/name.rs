//! Card-name grammar.
//!
//! A card name encodes a story identifier, optional effort numbers, a title,
//! dependency markers, and an optional parent marker:
//!
//! ```text
//! <id>: [([<es90>/]<es50>/<spent>) ]<body>
//! ```
//!
//! Inside `<body>`, every ` &<id>` names a dependency and the first ` #<id>`
//! names the parent. A name with a parent is a story; one without is an
//! issue. Anything that does not match the header shape is invalid.

use super::StoryId;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static NAME_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+):\s*(?:\((?:([0-9]+)/)?([0-9]+)/([0-9]+)\)\s+)?(.*)$")
        .expect("name header pattern compiles")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static PARENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+#([0-9]+)").expect("parent marker pattern compiles"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static DEPENDENCY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+&([0-9]+)").expect("dependency marker pattern compiles"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static ANY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[#&][0-9]+").expect("marker pattern compiles"));

/// Effort numbers carried by a story.
///
/// Each field is `None` when the name did not mention it; `Some(0)` is a
/// real zero estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effort {
    /// Time already spent.
    pub spent: Option<u32>,
    /// Estimate with 50% confidence.
    pub estimate50: Option<u32>,
    /// Estimate with 90% confidence.
    pub estimate90: Option<u32>,
}

impl Effort {
    /// Returns `true` when no effort number was given.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.spent.is_none() && self.estimate50.is_none() && self.estimate90.is_none()
    }
}

/// Fields shared by every well-formed card name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseParsed {
    /// Identifier from the name header.
    pub id: StoryId,
    /// Body text with every marker removed and whitespace trimmed.
    pub title: String,
    /// Dependency identifiers in order of appearance, duplicates kept.
    pub dependency_ids: Vec<StoryId>,
}

/// Result of parsing one card name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedName {
    /// Top-level unit without a parent marker.
    Issue(BaseParsed),
    /// Sub-unit with a parent marker.
    Story {
        /// Shared name fields.
        #[serde(flatten)]
        base: BaseParsed,
        /// Identifier of the parent issue or story.
        parent_id: StoryId,
        /// Effort numbers from the header.
        effort: Effort,
    },
    /// Text that does not follow the grammar at all.
    Invalid {
        /// The raw card name, untouched.
        title: String,
    },
}

impl ParsedName {
    /// Parses a raw card name.
    ///
    /// Never fails: names outside the grammar become [`ParsedName::Invalid`]
    /// carrying the raw text. No partial parse is attempted, so a header whose
    /// digits overflow is invalid as a whole.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        parse_well_formed(raw).unwrap_or_else(|| Self::Invalid {
            title: raw.to_owned(),
        })
    }

    /// Returns the story identifier, or `None` for invalid names.
    #[must_use]
    pub const fn id(&self) -> Option<StoryId> {
        match self {
            Self::Issue(base) | Self::Story { base, .. } => Some(base.id),
            Self::Invalid { .. } => None,
        }
    }

    /// Returns the cleaned title, or the raw text for invalid names.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Issue(base) | Self::Story { base, .. } => &base.title,
            Self::Invalid { title } => title,
        }
    }
}

fn parse_well_formed(raw: &str) -> Option<ParsedName> {
    let captures = NAME_HEADER.captures(raw)?;
    let id = StoryId::new(captures.get(1)?.as_str().parse().ok()?);
    let body = captures.get(5).map_or("", |body| body.as_str());

    let dependency_ids = DEPENDENCY_MARKER
        .captures_iter(body)
        .map(|marker| {
            marker
                .get(1)
                .and_then(|digits| digits.as_str().parse().ok())
                .map(StoryId::new)
        })
        .collect::<Option<Vec<_>>>()?;

    let parent_id = match PARENT_MARKER.captures(body) {
        Some(marker) => Some(StoryId::new(marker.get(1)?.as_str().parse().ok()?)),
        None => None,
    };

    let base = BaseParsed {
        id,
        title: ANY_MARKER.replace_all(body, "").trim().to_owned(),
        dependency_ids,
    };

    Some(match parent_id {
        Some(parent) => ParsedName::Story {
            base,
            parent_id: parent,
            effort: Effort {
                spent: parse_optional(captures.get(4))?,
                estimate50: parse_optional(captures.get(3))?,
                estimate90: parse_optional(captures.get(2))?,
            },
        },
        None => ParsedName::Issue(base),
    })
}

/// Parses an optional digit group; the outer `None` means overflow.
fn parse_optional(group: Option<regex::Match<'_>>) -> Option<Option<u32>> {
    match group {
        Some(digits) => digits.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}

/// Renders the canonical card name.
///
/// Effort numbers are written only when both the 50% estimate and the spent
/// time are known, since the grammar cannot express one without the other.
impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { title } => write!(f, "{title}"),
            Self::Issue(base) => {
                write!(f, "{}: {}", base.id, base.title)?;
                write_dependencies(f, &base.dependency_ids)
            }
            Self::Story {
                base,
                parent_id,
                effort,
            } => {
                write!(f, "{}: ", base.id)?;
                if let (Some(estimate50), Some(spent)) = (effort.estimate50, effort.spent) {
                    write!(f, "(")?;
                    if let Some(estimate90) = effort.estimate90 {
                        write!(f, "{estimate90}/")?;
                    }
                    write!(f, "{estimate50}/{spent}) ")?;
                }
                write!(f, "{} #{parent_id}", base.title)?;
                write_dependencies(f, &base.dependency_ids)
            }
        }
    }
}

fn write_dependencies(f: &mut fmt::Formatter<'_>, dependency_ids: &[StoryId]) -> fmt::Result {
    for dependency in dependency_ids {
        write!(f, " &{dependency}")?;
    }
    Ok(())
}
