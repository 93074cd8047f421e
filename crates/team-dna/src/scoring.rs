//! Quiz scoring: weighted answer sums normalised to percentages.
//!
//! Ranking ties keep `Category` declaration order (the sort is stable over `Category::ALL`).

use std::collections::BTreeMap;

use crate::error::AppError;
use crate::model::{Category, QuizQuestion, QuizResults};
use crate::quiz::TEAM_DNA_QUIZ;

pub const TOP_CATEGORY_COUNT: usize = 3;

/// Score `selections` (one list of answer indices per question, by position) against
/// `questions`. Missing trailing lists are unanswered questions; repeated indices within a
/// question count once.
pub fn score(questions: &[QuizQuestion], selections: &[Vec<usize>]) -> Result<QuizResults, AppError> {
    if selections.len() > questions.len() {
        return Err(AppError::TooManySelections {
            given: selections.len(),
            questions: questions.len(),
        });
    }

    let mut totals = [0u32; Category::COUNT];
    for (question_index, (question, selected)) in questions.iter().zip(selections).enumerate() {
        let mut counted: Vec<usize> = Vec::with_capacity(selected.len());
        for &answer_index in selected {
            let answer = question
                .answers
                .get(answer_index)
                .ok_or_else(|| AppError::AnswerOutOfRange {
                    question: question_index,
                    answer: answer_index,
                    available: question.answers.len(),
                })?;
            if counted.contains(&answer_index) {
                continue;
            }
            counted.push(answer_index);

            for &(category, weight) in answer.weights {
                totals[category.index()] += weight;
            }
        }
    }

    Ok(results_from_totals(totals))
}

/// Score against the built-in Team DNA questionnaire.
pub fn score_team_dna(selections: &[Vec<usize>]) -> Result<QuizResults, AppError> {
    score(TEAM_DNA_QUIZ, selections)
}

/// Index of the first question without any selected answer.
pub fn first_unanswered(questions: &[QuizQuestion], selections: &[Vec<usize>]) -> Option<usize> {
    (0..questions.len()).find(|&i| selections.get(i).map_or(true, |s| s.is_empty()))
}

fn results_from_totals(totals: [u32; Category::COUNT]) -> QuizResults {
    let sum: u32 = totals.iter().sum();
    let percentages = totals.map(|total| percentage(total, sum));

    let mut ranked = Category::ALL;
    ranked.sort_by(|a, b| percentages[b.index()].cmp(&percentages[a.index()]));

    QuizResults {
        scores: by_category(&totals),
        percentages: by_category(&percentages),
        top_categories: ranked[..TOP_CATEGORY_COUNT].to_vec(),
    }
}

fn percentage(total: u32, sum: u32) -> u32 {
    if sum == 0 {
        return 0;
    }
    (100.0 * f64::from(total) / f64::from(sum)).round() as u32
}

fn by_category(values: &[u32; Category::COUNT]) -> BTreeMap<Category, u32> {
    Category::ALL
        .into_iter()
        .map(|c| (c, values[c.index()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Localized};

    const TEXT: Localized = Localized { he: "", en: "" };

    static TWO_ANSWERS: &[QuizQuestion] = &[QuizQuestion {
        id: "q1",
        text: TEXT,
        answers: &[
            AnswerOption {
                text: TEXT,
                weights: &[(Category::Adventure, 5)],
            },
            AnswerOption {
                text: TEXT,
                weights: &[(Category::Nature, 3)],
            },
        ],
    }];

    static TIED: &[QuizQuestion] = &[QuizQuestion {
        id: "tied",
        text: TEXT,
        answers: &[AnswerOption {
            text: TEXT,
            weights: &[
                (Category::Culinary, 2),
                (Category::TeamBuilding, 2),
                (Category::Nature, 2),
                (Category::Adventure, 2),
            ],
        }],
    }];

    fn assert_well_formed(results: &QuizResults) {
        assert_eq!(results.scores.len(), Category::COUNT);
        assert_eq!(results.percentages.len(), Category::COUNT);
        assert_eq!(results.top_categories.len(), TOP_CATEGORY_COUNT);

        let total_score: u32 = results.scores.values().sum();
        let total_pct: u32 = results.percentages.values().sum();
        if total_score == 0 {
            assert_eq!(total_pct, 0);
        } else {
            let slack = Category::COUNT as u32;
            assert!(
                (100 - slack..=100 + slack).contains(&total_pct),
                "percentages sum to {total_pct}"
            );
        }

        let top: Vec<u32> = results
            .top_categories
            .iter()
            .map(|&c| results.percentage(c))
            .collect();
        assert!(top.windows(2).all(|w| w[0] >= w[1]), "top not sorted: {top:?}");
        let best_rest = Category::ALL
            .iter()
            .filter(|c| !results.top_categories.contains(*c))
            .map(|&c| results.percentage(c))
            .max()
            .unwrap_or(0);
        assert!(top[TOP_CATEGORY_COUNT - 1] >= best_rest);
    }

    #[test]
    fn single_answer_takes_everything() {
        let results = score(TWO_ANSWERS, &[vec![0]]).unwrap();
        assert_eq!(results.percentage(Category::Adventure), 100);
        for category in Category::ALL.into_iter().skip(1) {
            assert_eq!(results.percentage(category), 0, "{category}");
        }
        assert_eq!(results.scores[&Category::Adventure], 5);
        assert_eq!(results.top_categories[0], Category::Adventure);
        assert_well_formed(&results);
    }

    #[test]
    fn both_answers_split_by_weight() {
        let results = score(TWO_ANSWERS, &[vec![0, 1]]).unwrap();
        assert_eq!(results.percentage(Category::Adventure), 63);
        assert_eq!(results.percentage(Category::Nature), 38);
        assert_eq!(
            results.top_categories,
            [Category::Adventure, Category::Nature, Category::History]
        );
    }

    #[test]
    fn no_answers_yield_all_zero_percentages() {
        for selections in [vec![], vec![vec![]; TEAM_DNA_QUIZ.len()]] {
            let results = score_team_dna(&selections).unwrap();
            assert!(results.percentages.values().all(|&p| p == 0));
            assert!(results.scores.values().all(|&s| s == 0));
            assert_eq!(
                results.top_categories,
                [Category::Adventure, Category::Nature, Category::History]
            );
        }
    }

    #[test]
    fn ties_keep_declaration_order() {
        let results = score(TIED, &[vec![0]]).unwrap();
        assert_eq!(
            results.top_categories,
            [Category::Adventure, Category::Nature, Category::Culinary]
        );
    }

    #[test]
    fn duplicate_indices_count_once() {
        let once = score(TWO_ANSWERS, &[vec![1]]).unwrap();
        let twice = score(TWO_ANSWERS, &[vec![1, 1]]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let err = score(TWO_ANSWERS, &[vec![2]]).unwrap_err();
        assert!(matches!(
            err,
            AppError::AnswerOutOfRange {
                question: 0,
                answer: 2,
                available: 2
            }
        ));
    }

    #[test]
    fn extra_selection_lists_are_rejected() {
        let err = score(TWO_ANSWERS, &[vec![0], vec![0]]).unwrap_err();
        assert!(matches!(
            err,
            AppError::TooManySelections {
                given: 2,
                questions: 1
            }
        ));
    }

    #[test]
    fn scoring_is_idempotent() {
        let selections: Vec<Vec<usize>> = (0..TEAM_DNA_QUIZ.len()).map(|i| vec![i % 4]).collect();
        let first = score_team_dna(&selections).unwrap();
        let second = score_team_dna(&selections).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn built_in_quiz_results_are_well_formed() {
        // Every uniform answer pattern plus a deterministic walk through mixed ones.
        let mut seed: u64 = 0x5eed;
        let mut patterns: Vec<Vec<Vec<usize>>> = (0..4)
            .map(|a| TEAM_DNA_QUIZ.iter().map(|_| vec![a]).collect())
            .collect();
        for _ in 0..500 {
            let pattern = TEAM_DNA_QUIZ
                .iter()
                .map(|q| {
                    seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    vec![(seed >> 33) as usize % q.answers.len()]
                })
                .collect();
            patterns.push(pattern);
        }

        for selections in patterns {
            let results = score_team_dna(&selections).unwrap();
            assert_well_formed(&results);
        }
    }

    #[test]
    fn first_unanswered_finds_gaps() {
        let questions = TEAM_DNA_QUIZ;
        let mut selections: Vec<Vec<usize>> = questions.iter().map(|_| vec![0]).collect();
        assert_eq!(first_unanswered(questions, &selections), None);

        selections[3].clear();
        assert_eq!(first_unanswered(questions, &selections), Some(3));

        selections.truncate(2);
        assert_eq!(first_unanswered(questions, &selections), Some(2));
    }
}
