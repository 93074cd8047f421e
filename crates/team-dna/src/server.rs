use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::info;

use crate::catalog::{self, CategoryInfo};
use crate::error::AppError;
use crate::matcher::{self, MessageMatch};
use crate::model::{Category, QuizResults, StoredResult};
use crate::quiz::TEAM_DNA_QUIZ;
use crate::recommend::{self, ActivityRecommendation, DEFAULT_RECOMMENDATIONS};
use crate::recorder::ResultRecorder;
use crate::scoring;
use crate::store::ResultStore;
use dna_common::mcp_api::{
    CompletionStats, GetCategoryParams, GetResultsParams, MatchMessageParams,
    RecommendActivitiesParams, ScoreQuizParams, SubmitQuizParams,
};
use dna_common::session;

const MAX_VISITOR_ID_LEN: usize = 128;

#[derive(Clone)]
pub struct TeamDnaServer {
    store: Arc<ResultStore>,
    recorder: ResultRecorder,
    tool_router: ToolRouter<TeamDnaServer>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct CategoryListResponse {
    categories: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct QuizResponse {
    questions: Vec<QuestionView>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct QuestionView {
    index: usize,
    id: String,
    text_he: String,
    text_en: String,
    answers: Vec<AnswerView>,
}

#[derive(Debug, Serialize, JsonSchema)]
struct AnswerView {
    index: usize,
    text_he: String,
    text_en: String,
}

#[derive(Debug, Serialize, JsonSchema)]
struct SubmitQuizResponse {
    result: StoredResult,
    /// Whether the result was written to the visitor's slot.
    saved: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
struct RecommendationsResponse {
    top_categories: Vec<Category>,
    recommendations: Vec<ActivityRecommendation>,
}

impl TeamDnaServer {
    pub fn new(store: Arc<ResultStore>, recorder: ResultRecorder) -> Self {
        Self {
            store,
            recorder,
            tool_router: Self::tool_router(),
        }
    }

    async fn submit(
        &self,
        visitor_id: &str,
        selections: &[Vec<usize>],
    ) -> Result<SubmitQuizResponse, AppError> {
        let visitor_id = validate_visitor_id(visitor_id)?;
        if let Some(question) = scoring::first_unanswered(TEAM_DNA_QUIZ, selections) {
            return Err(AppError::Incomplete { question });
        }
        let results = scoring::score_team_dna(selections)?;

        let result = StoredResult {
            session_id: session::new_session_id(),
            completed_at: session::unix_timestamp(),
            results,
        };
        let saved = self.store.save(visitor_id, &result).await;
        let _recording = self.recorder.record(&result);

        info!(
            session_id = %result.session_id,
            top = ?result.results.top_categories,
            saved,
            "quiz submitted"
        );
        Ok(SubmitQuizResponse { result, saved })
    }

    async fn stored_result(&self, visitor_id: &str) -> Result<StoredResult, AppError> {
        let visitor_id = validate_visitor_id(visitor_id)?;
        self.store
            .load(visitor_id)
            .await
            .ok_or_else(|| AppError::NotFound(visitor_id.to_string()))
    }

    async fn recommendations(
        &self,
        params: RecommendActivitiesParams,
    ) -> Result<RecommendationsResponse, AppError> {
        let results: QuizResults = match (params.selections, params.visitor_id) {
            (Some(selections), _) => scoring::score_team_dna(&selections)?,
            (None, Some(visitor_id)) => self.stored_result(&visitor_id).await?.results,
            (None, None) => {
                return Err(AppError::InvalidRequest(
                    "provide either visitor_id or selections".to_string(),
                ))
            }
        };
        let limit = params
            .limit
            .map(|l| l as usize)
            .unwrap_or(DEFAULT_RECOMMENDATIONS);

        Ok(RecommendationsResponse {
            recommendations: recommend::recommend_activities(&results, limit),
            top_categories: results.top_categories,
        })
    }
}

fn validate_visitor_id(visitor_id: &str) -> Result<&str, AppError> {
    let visitor_id = visitor_id.trim();
    if visitor_id.is_empty() {
        return Err(AppError::InvalidRequest("visitor_id must not be empty".to_string()));
    }
    if visitor_id.chars().count() > MAX_VISITOR_ID_LEN {
        return Err(AppError::InvalidRequest(format!(
            "visitor_id must be at most {MAX_VISITOR_ID_LEN} characters"
        )));
    }
    Ok(visitor_id)
}

fn quiz_view() -> QuizResponse {
    let questions = TEAM_DNA_QUIZ
        .iter()
        .enumerate()
        .map(|(index, q)| QuestionView {
            index,
            id: q.id.to_string(),
            text_he: q.text.he.to_string(),
            text_en: q.text.en.to_string(),
            answers: q
                .answers
                .iter()
                .enumerate()
                .map(|(index, a)| AnswerView {
                    index,
                    text_he: a.text.he.to_string(),
                    text_en: a.text.en.to_string(),
                })
                .collect(),
        })
        .collect();
    QuizResponse { questions }
}

#[tool_router]
impl TeamDnaServer {
    #[tool(description = "List the eight Team DNA categories with Hebrew/English names, icon, description and colour gradient.")]
    async fn list_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        Ok(Json(CategoryListResponse {
            categories: catalog::list_categories(),
        }))
    }

    #[tool(description = "Get one Team DNA category by key (e.g. 'adventure', 'teambuilding').")]
    async fn get_category(
        &self,
        Parameters(params): Parameters<GetCategoryParams>,
    ) -> Result<Json<CategoryInfo>, String> {
        catalog::find_category(&params.category)
            .map(Json)
            .map_err(|e| e.to_string())
    }

    #[tool(description = "Get the Team DNA quiz: questions and answer options in Hebrew and English, with their indices.")]
    async fn get_quiz(&self) -> Result<Json<QuizResponse>, String> {
        Ok(Json(quiz_view()))
    }

    #[tool(description = "Score quiz selections (one list of answer indices per question) without storing anything. Returns raw scores, percentages and the top 3 categories.")]
    async fn score_quiz(
        &self,
        Parameters(params): Parameters<ScoreQuizParams>,
    ) -> Result<Json<QuizResults>, String> {
        scoring::score_team_dna(&params.selections)
            .map(Json)
            .map_err(|e| format!("scoring failed: {e}"))
    }

    #[tool(description = "Submit a completed quiz for a visitor. Every question must be answered. Stores the result in the visitor's slot and records analytics in the background.")]
    async fn submit_quiz(
        &self,
        Parameters(params): Parameters<SubmitQuizParams>,
    ) -> Result<Json<SubmitQuizResponse>, String> {
        self.submit(&params.visitor_id, &params.selections)
            .await
            .map(Json)
            .map_err(|e| format!("submit failed: {e}"))
    }

    #[tool(description = "Get the last stored quiz result of a visitor.")]
    async fn get_results(
        &self,
        Parameters(params): Parameters<GetResultsParams>,
    ) -> Result<Json<StoredResult>, String> {
        self.stored_result(&params.visitor_id)
            .await
            .map(Json)
            .map_err(|e| e.to_string())
    }

    #[tool(description = "Tag a free-text chat message (Hebrew or English) with Team DNA categories using keyword and activity matching.")]
    async fn match_message(
        &self,
        Parameters(params): Parameters<MatchMessageParams>,
    ) -> Result<Json<MessageMatch>, String> {
        Ok(Json(matcher::analyze_message(&params.message)))
    }

    #[tool(description = "Recommend activities for a visitor's stored result, or for ad-hoc selections. Returns up to `limit` activities (default 5, max 20).")]
    async fn recommend_activities(
        &self,
        Parameters(params): Parameters<RecommendActivitiesParams>,
    ) -> Result<Json<RecommendationsResponse>, String> {
        self.recommendations(params)
            .await
            .map(Json)
            .map_err(|e| format!("recommendation failed: {e}"))
    }

    #[tool(description = "Get quiz completion counts: total runs and, per category, how often it ranked first or in the top 3.")]
    async fn get_dna_stats(&self) -> Result<Json<CompletionStats>, String> {
        Ok(Json(self.recorder.counter().get_stats().await))
    }
}

#[tool_handler]
impl ServerHandler for TeamDnaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "team-dna".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Team DNA preference engine for trips and team-building days. Use get_quiz to \
                 render the questionnaire, score_quiz for previews, submit_quiz when a visitor \
                 finishes, get_results to personalise later visits, recommend_activities for \
                 matching activities, and match_message to tag chat messages with categories."
                    .to_string(),
            ),
        }
    }
}
