//! Recommendation output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall classification of a prospective roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollAction {
    /// Rolling looks favorable.
    Roll,
    /// Keep (or close) the current call instead of rolling.
    Hold,
    /// Close call; leave it to the trader's outlook.
    Neutral,
}

impl RollAction {
    /// Scores at or above this classify as [`RollAction::Roll`].
    pub const ROLL_THRESHOLD: i32 = 30;
    /// Scores at or below this classify as [`RollAction::Hold`].
    pub const HOLD_THRESHOLD: i32 = -30;

    /// Classify a rule-table score.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        if score >= Self::ROLL_THRESHOLD {
            Self::Roll
        } else if score <= Self::HOLD_THRESHOLD {
            Self::Hold
        } else {
            Self::Neutral
        }
    }

    /// One-line summary shown with the action.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Roll => {
                "Rolling appears favorable based on premium collection and effective sale price improvement."
            }
            Self::Hold => {
                "Consider holding current position or closing rather than rolling. The economics may not justify the roll."
            }
            Self::Neutral => {
                "The roll decision is close. Review the factors below and decide based on your current market outlook."
            }
        }
    }
}

impl fmt::Display for RollAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roll => write!(f, "ROLL"),
            Self::Hold => write!(f, "HOLD"),
            Self::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Tone of a single recommendation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Supports rolling.
    Positive,
    /// Argues strongly against rolling.
    Warning,
    /// Argues mildly against rolling.
    Caution,
    /// Context only.
    Info,
}

/// A single human-readable finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    /// Tone of the finding.
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Short heading.
    pub title: String,
    /// Message with the computed figures.
    pub message: String,
}

impl RecommendationItem {
    /// Create a new item.
    pub fn new(kind: RecommendationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Result of scoring a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Classification of `score`.
    pub action: RollAction,
    /// Sum of the fired rules' score deltas.
    pub score: i32,
    /// Findings in rule order.
    #[serde(rename = "recommendations")]
    pub items: Vec<RecommendationItem>,
    /// Summary for `action`.
    pub summary: String,
}

impl Recommendation {
    /// Count items of a given kind.
    #[must_use]
    pub fn count_of(&self, kind: RecommendationKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}
