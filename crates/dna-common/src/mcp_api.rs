use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCategoryParams {
    /// Category key such as "adventure" or "teambuilding".
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScoreQuizParams {
    /// One list of selected answer indices per question, in question order.
    /// Missing trailing lists mean the question was not answered.
    pub selections: Vec<Vec<usize>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmitQuizParams {
    /// Opaque identifier of the visitor whose result slot is written.
    pub visitor_id: String,
    /// One list of selected answer indices per question. Every question must be answered.
    pub selections: Vec<Vec<usize>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetResultsParams {
    /// Visitor identifier used when the quiz was submitted.
    pub visitor_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MatchMessageParams {
    /// Free-text chat message, Hebrew or English.
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecommendActivitiesParams {
    /// Use the stored result of this visitor.
    pub visitor_id: Option<String>,
    /// Score these selections instead of reading a stored result.
    pub selections: Option<Vec<Vec<usize>>>,
    /// Maximum number of activities to return (default: 5, max: 20).
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompletionStats {
    pub total_completions: u64,
    pub categories: Vec<CategoryCompletionStats>,
    pub redis_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCompletionStats {
    pub category: String,
    /// Completions where this category ranked first.
    pub leading: u64,
    /// Completions where this category made the top three.
    pub in_top3: u64,
}
