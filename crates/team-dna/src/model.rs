use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the eight activity-preference tags used to personalise trips.
///
/// Declaration order is significant: it is the tie-break order when ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Adventure,
    Nature,
    History,
    Culinary,
    Sports,
    Creative,
    Wellness,
    TeamBuilding,
}

impl Category {
    pub const COUNT: usize = 8;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Adventure,
        Category::Nature,
        Category::History,
        Category::Culinary,
        Category::Sports,
        Category::Creative,
        Category::Wellness,
        Category::TeamBuilding,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Adventure => "adventure",
            Category::Nature => "nature",
            Category::History => "history",
            Category::Culinary => "culinary",
            Category::Sports => "sports",
            Category::Creative => "creative",
            Category::Wellness => "wellness",
            Category::TeamBuilding => "teambuilding",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Case-insensitive lookup by key.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text shown to visitors in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub he: &'static str,
    pub en: &'static str,
}

/// A quiz answer and the category weights it contributes when selected.
#[derive(Debug, Clone, Copy)]
pub struct AnswerOption {
    pub text: Localized,
    pub weights: &'static [(Category, u32)],
}

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub text: Localized,
    pub answers: &'static [AnswerOption],
}

/// An activity description and its partial category profile.
#[derive(Debug, Clone, Copy)]
pub struct ActivityDna {
    pub activity: &'static str,
    pub weights: &'static [(Category, u32)],
}

/// Per-category breakdown of a finished quiz.
///
/// `scores` and `percentages` always carry all eight categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizResults {
    pub scores: BTreeMap<Category, u32>,
    pub percentages: BTreeMap<Category, u32>,
    /// The three highest percentages, best first.
    pub top_categories: Vec<Category>,
}

impl QuizResults {
    pub fn percentage(&self, category: Category) -> u32 {
        self.percentages.get(&category).copied().unwrap_or(0)
    }
}

/// A scored quiz as persisted for the visitor and sent to analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StoredResult {
    pub session_id: String,
    /// Unix seconds.
    pub completed_at: u64,
    pub results: QuizResults,
}

impl StoredResult {
    /// Flat row layout of the remote analytics table.
    pub fn to_analytics_row(&self) -> serde_json::Value {
        serde_json::json!({
            "session_id": self.session_id,
            "scores": self.results.scores,
            "percentages": self.results.percentages,
            "top_categories": self.results.top_categories,
            "completed_at": self.completed_at,
        })
    }
}
