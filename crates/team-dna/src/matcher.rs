//! Keyword classification of free-text chat messages.
//!
//! A message is tagged with a category when it contains one of the category's keywords, or
//! when it contains a token (4+ letters) of an activity description whose profile gives that
//! category a weight of at least [`ACTIVITY_WEIGHT_THRESHOLD`]. Matching is case-insensitive
//! substring search; there is no stemming.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::Serialize;

use crate::activities::ACTIVITY_DNA;
use crate::model::{ActivityDna, Category};

pub const MIN_TOKEN_CHARS: usize = 4;
pub const ACTIVITY_WEIGHT_THRESHOLD: u32 = 3;

static TOKEN_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\p{P}]+").expect("valid regex"));

static DEFAULT_MATCHER: LazyLock<KeywordMatcher> =
    LazyLock::new(|| KeywordMatcher::new(ACTIVITY_DNA));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MessageMatch {
    /// Matched categories in declaration order, without duplicates.
    pub categories: Vec<Category>,
    pub matched_keywords: Vec<String>,
    pub matched_activities: Vec<String>,
}

struct ActivityTokens {
    activity: &'static str,
    tokens: Vec<String>,
    categories: Vec<Category>,
}

pub struct KeywordMatcher {
    activities: Vec<ActivityTokens>,
}

impl KeywordMatcher {
    pub fn new(activities: &'static [ActivityDna]) -> Self {
        let activities = activities
            .iter()
            .map(|entry| ActivityTokens {
                activity: entry.activity,
                tokens: activity_tokens(entry.activity),
                categories: entry
                    .weights
                    .iter()
                    .filter(|&&(_, weight)| weight >= ACTIVITY_WEIGHT_THRESHOLD)
                    .map(|&(category, _)| category)
                    .collect(),
            })
            .collect();
        Self { activities }
    }

    pub fn analyze(&self, text: &str) -> MessageMatch {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return MessageMatch::default();
        }

        let mut hit = [false; Category::COUNT];
        let mut matched_keywords = Vec::new();
        let mut matched_activities = Vec::new();

        for category in Category::ALL {
            for keyword in category.keywords() {
                if text.contains(keyword) {
                    hit[category.index()] = true;
                    matched_keywords.push((*keyword).to_string());
                }
            }
        }

        for entry in &self.activities {
            if entry.tokens.iter().any(|token| text.contains(token.as_str())) {
                for category in &entry.categories {
                    hit[category.index()] = true;
                }
                matched_activities.push(entry.activity.to_string());
            }
        }

        MessageMatch {
            categories: Category::ALL
                .into_iter()
                .filter(|c| hit[c.index()])
                .collect(),
            matched_keywords,
            matched_activities,
        }
    }

    pub fn match_categories(&self, text: &str) -> Vec<Category> {
        self.analyze(text).categories
    }
}

/// Classify `text` against the built-in keyword lists and activity catalogue.
pub fn analyze_message(text: &str) -> MessageMatch {
    DEFAULT_MATCHER.analyze(text)
}

pub fn match_categories(text: &str) -> Vec<Category> {
    DEFAULT_MATCHER.match_categories(text)
}

fn activity_tokens(activity: &str) -> Vec<String> {
    TOKEN_SPLIT
        .split(&activity.to_lowercase())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: &[ActivityDna] = &[
        ActivityDna {
            activity: "Sunset Kayak, Jordan river",
            weights: &[(Category::Sports, 4), (Category::Nature, 3), (Category::Adventure, 2)],
        },
        ActivityDna {
            activity: "Olive oil press",
            weights: &[(Category::Culinary, 2)],
        },
    ];

    #[test]
    fn empty_input_matches_nothing() {
        assert!(match_categories("").is_empty());
        assert!(match_categories("   \n").is_empty());
    }

    #[test]
    fn unrelated_text_matches_nothing() {
        assert!(match_categories("hello there, what time is it?").is_empty());
    }

    #[test]
    fn exact_keyword_matches_its_category() {
        assert_eq!(match_categories("הרפתקה"), [Category::Adventure]);
        assert!(match_categories("Wellness").contains(&Category::Wellness));
    }

    #[test]
    fn keywords_match_case_insensitively_inside_sentences() {
        let categories = match_categories("We want a WINERY visit and some YOGA");
        assert_eq!(categories, [Category::Culinary, Category::Wellness]);
    }

    #[test]
    fn activity_tokens_pull_in_heavy_categories_only() {
        let matcher = KeywordMatcher::new(SAMPLE);
        let result = matcher.analyze("is the jordan trip available in may?");
        assert_eq!(result.categories, [Category::Nature, Category::Sports]);
        assert_eq!(result.matched_activities, ["Sunset Kayak, Jordan river"]);
    }

    #[test]
    fn short_activity_tokens_are_ignored() {
        let matcher = KeywordMatcher::new(SAMPLE);
        // "oil" is shorter than four letters; "press" matches but carries no weight >= 3.
        let result = matcher.analyze("oil and press");
        assert!(result.categories.is_empty());
        assert_eq!(result.matched_activities, ["Olive oil press"]);
    }

    #[test]
    fn hebrew_activity_token_matches() {
        let result = analyze_message("יש לכם משהו בכנרת עם רפסודות?");
        assert!(result.categories.contains(&Category::TeamBuilding));
        assert!(result
            .matched_activities
            .iter()
            .any(|a| a.contains("רפסודות")));
    }

    #[test]
    fn tokens_split_on_punctuation() {
        assert_eq!(
            activity_tokens("Sunset Kayak, Jordan river"),
            ["sunset", "kayak", "jordan", "river"]
        );
        assert_eq!(activity_tokens("טיול ג'יפים ברמת הגולן"), ["טיול", "יפים", "ברמת", "הגולן"]);
    }
}
