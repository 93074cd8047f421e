use schemars::JsonSchema;
use serde::Serialize;

use crate::activities::ACTIVITY_DNA;
use crate::model::{ActivityDna, Category, QuizResults};

pub const DEFAULT_RECOMMENDATIONS: usize = 5;
pub const MAX_RECOMMENDATIONS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ActivityRecommendation {
    pub activity: String,
    /// Sum of `percentage × weight` over the activity's categories.
    pub score: u32,
    /// Categories of the activity that the visitor scored on, strongest contribution first.
    pub matched_categories: Vec<Category>,
}

/// Rank `activities` against a visitor's percentages. Zero-score activities are dropped;
/// equal scores keep catalogue order.
pub fn recommend(
    activities: &[ActivityDna],
    results: &QuizResults,
    limit: usize,
) -> Vec<ActivityRecommendation> {
    let mut ranked: Vec<ActivityRecommendation> = activities
        .iter()
        .filter_map(|entry| {
            let mut contributions: Vec<(Category, u32)> = entry
                .weights
                .iter()
                .map(|&(category, weight)| (category, results.percentage(category) * weight))
                .filter(|&(_, contribution)| contribution > 0)
                .collect();
            if contributions.is_empty() {
                return None;
            }
            contributions.sort_by(|a, b| b.1.cmp(&a.1));

            Some(ActivityRecommendation {
                activity: entry.activity.to_string(),
                score: contributions.iter().map(|&(_, c)| c).sum(),
                matched_categories: contributions.into_iter().map(|(c, _)| c).collect(),
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit.min(MAX_RECOMMENDATIONS));
    ranked
}

/// Rank the built-in activity catalogue.
pub fn recommend_activities(results: &QuizResults, limit: usize) -> Vec<ActivityRecommendation> {
    recommend(ACTIVITY_DNA, results, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_team_dna;

    static CATALOGUE: &[ActivityDna] = &[
        ActivityDna {
            activity: "wine",
            weights: &[(Category::Culinary, 4)],
        },
        ActivityDna {
            activity: "jeeps",
            weights: &[(Category::Adventure, 5), (Category::Nature, 3)],
        },
        ActivityDna {
            activity: "spa",
            weights: &[(Category::Wellness, 5)],
        },
        ActivityDna {
            activity: "hike",
            weights: &[(Category::Nature, 5)],
        },
    ];

    fn results_with(percentages: &[(Category, u32)]) -> QuizResults {
        let mut results = score_team_dna(&[]).unwrap();
        for &(category, pct) in percentages {
            results.percentages.insert(category, pct);
        }
        results
    }

    #[test]
    fn ranks_by_weighted_percentage() {
        let results = results_with(&[(Category::Adventure, 60), (Category::Nature, 40)]);
        let recs = recommend(CATALOGUE, &results, 10);

        let names: Vec<&str> = recs.iter().map(|r| r.activity.as_str()).collect();
        assert_eq!(names, ["jeeps", "hike"]);
        assert_eq!(recs[0].score, 60 * 5 + 40 * 3);
        assert_eq!(
            recs[0].matched_categories,
            [Category::Adventure, Category::Nature]
        );
        assert_eq!(recs[1].score, 200);
    }

    #[test]
    fn equal_scores_keep_catalogue_order() {
        let results = results_with(&[(Category::Culinary, 50), (Category::Wellness, 40)]);
        let recs = recommend(CATALOGUE, &results, 10);
        let names: Vec<&str> = recs.iter().map(|r| r.activity.as_str()).collect();
        assert_eq!(names, ["wine", "spa"]);
    }

    #[test]
    fn limit_is_applied_and_capped() {
        let results = results_with(&[(Category::Nature, 100)]);
        assert_eq!(recommend(CATALOGUE, &results, 1).len(), 1);

        let all = score_team_dna(&(0..8).map(|_| vec![0, 1, 2, 3]).collect::<Vec<_>>()).unwrap();
        assert!(recommend_activities(&all, 1_000).len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn empty_results_recommend_nothing() {
        let results = score_team_dna(&[]).unwrap();
        assert!(recommend_activities(&results, DEFAULT_RECOMMENDATIONS).is_empty());
    }
}
