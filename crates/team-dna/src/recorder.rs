use tokio::task::JoinHandle;
use tracing::info;

use crate::model::StoredResult;
use dna_common::analytics::AnalyticsClient;
use dna_common::session::CompletionCounter;

/// Best-effort bookkeeping for finished quizzes: the remote analytics row and the Redis
/// completion counters. Nothing here can fail the caller.
#[derive(Clone)]
pub struct ResultRecorder {
    analytics: AnalyticsClient,
    counter: CompletionCounter,
}

impl ResultRecorder {
    pub fn new(analytics: AnalyticsClient, counter: CompletionCounter) -> Self {
        Self { analytics, counter }
    }

    /// Start recording in the background and return immediately.
    pub fn record(&self, result: &StoredResult) -> JoinHandle<()> {
        let analytics_task = self.analytics.record_detached(&result.to_analytics_row());
        let counter = self.counter.clone();
        let top: Vec<&'static str> = result
            .results
            .top_categories
            .iter()
            .map(|c| c.key())
            .collect();
        let session_id = result.session_id.clone();

        tokio::spawn(async move {
            counter.record(&top).await;
            if let Some(task) = analytics_task {
                let _ = task.await;
            }
            info!(session_id, "quiz completion recorded");
        })
    }

    pub fn counter(&self) -> &CompletionCounter {
        &self.counter
    }
}
