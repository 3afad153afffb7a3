//! Research Dashboard page state
//!
//! ```text
//!  Idle ──submit──▶ Researching ──────────────────────────────▶ Idle
//!                   │ Generation → Reflection → Ranking →        (Ready | NoResult)
//!                   │ Evolution → Proximity → Meta-Review → POST /research
//! ```
//!
//! The phase walk is cosmetic and runs to completion before the request.
//! The topic and loading flag live in the shared [`ResearchStore`]; bookmarks
//! go through the shared [`BookmarkStore`].

use crate::api::ResearchApi;
use crate::error::Result;
use crate::sequencer::{AgentPhase, PhaseSequencer, MAX_PROGRESS};
use crate::stores::{BookmarkStore, ResearchStore};
use crate::types::{Bookmark, ResearchResult};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::PaperCard;

pub const EMPTY_TOPIC_ALERT: &str = "Please enter a research topic";
pub const EMPTY_STATE_MESSAGE: &str = "Enter a research topic to begin the discovery process.";

/// What the results panel shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultState {
    #[default]
    NoResult,
    Loading,
    Ready(ResearchResult),
}

/// Heading above the result score
pub const SCORE_HEADING: &str = "Research Quality Score";

/// Titled blocks of the results panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSection {
    TopResult,
    Insights,
    RelatedPapers,
    Feedback,
}

impl ResultSection {
    pub const ALL: [ResultSection; 4] = [
        ResultSection::TopResult,
        ResultSection::Insights,
        ResultSection::RelatedPapers,
        ResultSection::Feedback,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ResultSection::TopResult => "Top Result",
            ResultSection::Insights => "Research Insights",
            ResultSection::RelatedPapers => "Related Papers",
            ResultSection::Feedback => "Process Feedback",
        }
    }

    /// Empty sections are not shown
    pub fn has_content(self, result: &ResearchResult) -> bool {
        match self {
            ResultSection::TopResult => result.top_paper.is_some(),
            ResultSection::Insights => !result.insights.is_empty(),
            ResultSection::RelatedPapers => !result.related_papers.is_empty(),
            ResultSection::Feedback => !result.feedback.is_empty(),
        }
    }
}

/// Progress reported by a running research job
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    PhaseStarted { phase: AgentPhase, progress: u8 },
    Completed(ResearchResult),
    Failed(String),
}

/// Drive one search: the simulated phases, then the real request.
///
/// Every step is reported through `emit`; exactly one of `Completed` or
/// `Failed` is emitted last.
pub async fn research_job<F>(
    topic: &str,
    api: &dyn ResearchApi,
    sequencer: &PhaseSequencer,
    mut emit: F,
) where
    F: FnMut(DashboardEvent) + Send,
{
    sequencer
        .run(|phase, progress| emit(DashboardEvent::PhaseStarted { phase, progress }))
        .await;

    match api.research(topic).await {
        Ok(result) => emit(DashboardEvent::Completed(result)),
        Err(e) => emit(DashboardEvent::Failed(e.to_string())),
    }
}

pub struct ResearchDashboard {
    api: Arc<dyn ResearchApi>,
    research: Arc<dyn ResearchStore>,
    bookmarks: Arc<dyn BookmarkStore>,
    sequencer: PhaseSequencer,
    result: ResultState,
    progress: u8,
    active_phase: Option<AgentPhase>,
    alert: Option<String>,
}

impl ResearchDashboard {
    pub fn new(
        api: Arc<dyn ResearchApi>,
        research: Arc<dyn ResearchStore>,
        bookmarks: Arc<dyn BookmarkStore>,
        sequencer: PhaseSequencer,
    ) -> Self {
        Self {
            api,
            research,
            bookmarks,
            sequencer,
            result: ResultState::NoResult,
            progress: 0,
            active_phase: None,
            alert: None,
        }
    }

    pub fn api(&self) -> Arc<dyn ResearchApi> {
        Arc::clone(&self.api)
    }

    pub fn sequencer(&self) -> &PhaseSequencer {
        &self.sequencer
    }

    // ========================================================================
    // Read side
    // ========================================================================

    pub fn topic(&self) -> String {
        self.research.topic()
    }

    pub fn set_topic(&self, topic: impl Into<String>) {
        self.research.set_topic(topic.into());
    }

    pub fn is_loading(&self) -> bool {
        self.research.is_loading()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn active_phase(&self) -> Option<AgentPhase> {
        self.active_phase
    }

    pub fn result_state(&self) -> &ResultState {
        &self.result
    }

    pub fn result(&self) -> Option<&ResearchResult> {
        match &self.result {
            ResultState::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Pending validation message, if the last submit was rejected
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_loading() {
            "Processing..."
        } else {
            "Ready"
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            "Researching..."
        } else {
            "Start Research"
        }
    }

    pub fn phase_status(&self, phase: AgentPhase) -> &'static str {
        if self.active_phase == Some(phase) {
            "Processing..."
        } else {
            "Ready"
        }
    }

    /// Cards for the results panel: the top paper first (highlighted), then related papers
    pub fn paper_cards(&self) -> Vec<PaperCard> {
        let Some(result) = self.result() else {
            return Vec::new();
        };

        result
            .top_paper
            .iter()
            .map(|paper| PaperCard::new(paper, true))
            .chain(
                result
                    .related_papers
                    .iter()
                    .map(|paper| PaperCard::new(paper, false)),
            )
            .collect()
    }

    /// Sections of the current result that have something to show
    pub fn result_sections(&self) -> Vec<ResultSection> {
        let Some(result) = self.result() else {
            return Vec::new();
        };

        ResultSection::ALL
            .into_iter()
            .filter(|section| section.has_content(result))
            .collect()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Validate and enter the Researching state.
    ///
    /// Returns the topic to research, or `None` when the submission is
    /// rejected (blank topic raises the alert; a running search is ignored).
    pub fn begin_search(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        let topic = self.topic();
        if topic.trim().is_empty() {
            debug!("Rejected research: empty topic");
            self.alert = Some(EMPTY_TOPIC_ALERT.to_string());
            return None;
        }

        info!("Starting research: {}", topic);
        self.alert = None;
        self.research.set_loading(true);
        self.result = ResultState::Loading;
        self.progress = 0;
        self.active_phase = None;
        Some(topic)
    }

    /// Fold one job event into the page state
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::PhaseStarted { phase, progress } => {
                debug!("Agent phase: {} ({}%)", phase, progress);
                self.active_phase = Some(phase);
                self.progress = self.progress.max(progress).min(MAX_PROGRESS);
            }
            DashboardEvent::Completed(result) => {
                self.progress = MAX_PROGRESS;
                self.result = ResultState::Ready(result);
                self.finish();
            }
            DashboardEvent::Failed(message) => {
                error!("Research failed: {}", message);
                self.result = ResultState::NoResult;
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.research.set_loading(false);
        self.active_phase = None;
    }

    /// Run a whole search in place
    pub async fn search(&mut self) {
        let Some(topic) = self.begin_search() else {
            return;
        };
        let api = self.api();
        let sequencer = self.sequencer.clone();
        research_job(&topic, api.as_ref(), &sequencer, |event| self.apply(event)).await;
    }

    // ========================================================================
    // Bookmarks
    // ========================================================================

    pub fn is_bookmarked(&self) -> bool {
        self.bookmarks
            .is_bookmarked(&self.topic())
            .unwrap_or_else(|e| {
                warn!("Bookmark lookup failed: {}", e);
                false
            })
    }

    /// Save or unsave the current topic; does nothing without a result
    pub fn toggle_bookmark(&mut self) -> Result<()> {
        let ResultState::Ready(result) = &self.result else {
            return Ok(());
        };

        let topic = self.topic();
        if self.bookmarks.is_bookmarked(&topic)? {
            self.bookmarks.remove_bookmark(&topic)?;
            info!("Removed bookmark: {}", topic);
        } else {
            self.bookmarks
                .add_bookmark(Bookmark::from_result(topic.clone(), result))?;
            info!("Bookmarked: {}", topic);
        }
        Ok(())
    }

    pub fn saved_bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks.list_bookmarks().unwrap_or_else(|e| {
            warn!("Failed to list bookmarks: {}", e);
            Vec::new()
        })
    }

    pub fn remove_saved(&mut self, topic: &str) -> Result<()> {
        self.bookmarks.remove_bookmark(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockResearchApi;
    use crate::error::{ApiError, Error};
    use crate::sequencer::Sleeper;
    use crate::stores::{MemoryBookmarkStore, ResearchState};
    use crate::types::{PaperSource, ResearchPaper};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    struct NoSleep;

    #[async_trait]
    impl Sleeper for NoSleep {
        async fn sleep(&self, _duration: Duration) {}
    }

    fn sample_result() -> ResearchResult {
        let mut result = ResearchResult::with_score(8.0);
        result.top_paper = Some(ResearchPaper::new("Top", PaperSource::Arxiv));
        result.related_papers = vec![
            ResearchPaper::new("Second", PaperSource::Ieee),
            ResearchPaper::new("Third", PaperSource::Other("ACM".into())),
        ];
        result.insights = vec!["insight".into()];
        result
    }

    fn dashboard(api: MockResearchApi) -> (ResearchDashboard, Arc<MemoryBookmarkStore>) {
        let bookmarks = Arc::new(MemoryBookmarkStore::new());
        let page = ResearchDashboard::new(
            Arc::new(api),
            Arc::new(ResearchState::new()),
            bookmarks.clone(),
            PhaseSequencer::with_sleeper(Duration::from_secs(1), Arc::new(NoSleep)),
        );
        (page, bookmarks)
    }

    fn succeeding_api() -> MockResearchApi {
        let mut api = MockResearchApi::new();
        api.expect_research().returning(|_| Ok(sample_result()));
        api
    }

    #[tokio::test]
    async fn test_blank_topic_raises_alert() {
        let mut api = MockResearchApi::new();
        api.expect_research().never();
        let (mut page, _) = dashboard(api);

        page.set_topic("  ");
        page.search().await;

        assert_eq!(page.alert(), Some(EMPTY_TOPIC_ALERT));
        assert_eq!(page.result_state(), &ResultState::NoResult);
        assert!(!page.is_loading());
    }

    #[tokio::test]
    async fn test_job_events_are_ordered_and_monotonic() {
        let api = succeeding_api();
        let sequencer = PhaseSequencer::with_sleeper(Duration::ZERO, Arc::new(NoSleep));
        let mut events = Vec::new();

        research_job("T", &api, &sequencer, |e| events.push(e)).await;

        let phases: Vec<(AgentPhase, u8)> = events
            .iter()
            .filter_map(|e| match e {
                DashboardEvent::PhaseStarted { phase, progress } => Some((*phase, *progress)),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases.iter().map(|(p, _)| *p).collect::<Vec<_>>(),
            AgentPhase::ALL.to_vec()
        );
        assert!(phases.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(events.last(), Some(&DashboardEvent::Completed(sample_result())));
    }

    #[tokio::test]
    async fn test_success_reaches_full_progress() {
        let (mut page, _) = dashboard(succeeding_api());
        page.set_topic("Machine Unlearning");

        page.search().await;

        assert_eq!(page.progress(), 100);
        assert_eq!(page.result(), Some(&sample_result()));
        assert_eq!(page.active_phase(), None);
        assert!(!page.is_loading());
        assert_eq!(page.status_label(), "Ready");
    }

    #[tokio::test]
    async fn test_failure_stores_nothing() {
        let mut api = MockResearchApi::new();
        api.expect_research().returning(|_| {
            Err(Error::Api(ApiError::Status {
                endpoint: "/research".into(),
                status: 500,
            }))
        });
        let (mut page, _) = dashboard(api);
        page.set_topic("T");

        page.search().await;

        assert_eq!(page.result_state(), &ResultState::NoResult);
        assert_eq!(page.active_phase(), None);
        assert!(!page.is_loading());
    }

    #[tokio::test]
    async fn test_new_search_resets_progress() {
        let (mut page, _) = dashboard(succeeding_api());
        page.set_topic("T");
        page.search().await;
        assert_eq!(page.progress(), 100);

        page.begin_search();

        assert_eq!(page.progress(), 0);
        assert_eq!(page.result_state(), &ResultState::Loading);
        assert!(page.is_loading());
        assert_eq!(page.button_label(), "Researching...");
    }

    #[test]
    fn test_progress_never_decreases() {
        let (mut page, _) = dashboard(MockResearchApi::new());
        page.set_topic("T");
        page.begin_search();

        page.apply(DashboardEvent::PhaseStarted {
            phase: AgentPhase::Ranking,
            progress: 51,
        });
        page.apply(DashboardEvent::PhaseStarted {
            phase: AgentPhase::Evolution,
            progress: 34,
        });

        assert_eq!(page.progress(), 51);
        assert_eq!(page.active_phase(), Some(AgentPhase::Evolution));
        assert_eq!(page.phase_status(AgentPhase::Evolution), "Processing...");
        assert_eq!(page.phase_status(AgentPhase::Ranking), "Ready");
    }

    #[test]
    fn test_toggle_without_result_is_noop() {
        let (mut page, bookmarks) = dashboard(MockResearchApi::new());
        page.set_topic("T");

        page.toggle_bookmark().unwrap();

        assert!(bookmarks.list_bookmarks().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_membership() {
        let (mut page, bookmarks) = dashboard(succeeding_api());
        page.set_topic("T");
        page.search().await;

        page.toggle_bookmark().unwrap();
        let saved = bookmarks.list_bookmarks().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].topic, "T");
        assert_eq!(saved[0].score, 8.0);
        assert!(page.is_bookmarked());

        page.toggle_bookmark().unwrap();
        assert!(bookmarks.list_bookmarks().unwrap().is_empty());
        assert!(!page.is_bookmarked());
    }

    #[tokio::test]
    async fn test_paper_cards_top_first() {
        let (mut page, _) = dashboard(succeeding_api());
        page.set_topic("T");
        page.search().await;

        let cards = page.paper_cards();

        assert_eq!(
            cards.iter().map(|c| (c.title.as_str(), c.is_main)).collect::<Vec<_>>(),
            vec![("Top", true), ("Second", false), ("Third", false)]
        );
    }

    #[tokio::test]
    async fn test_result_sections_skip_empty_blocks() {
        let (mut page, _) = dashboard(succeeding_api());
        assert!(page.result_sections().is_empty());

        page.set_topic("T");
        page.search().await;

        let titles: Vec<&str> = page
            .result_sections()
            .into_iter()
            .map(ResultSection::title)
            .collect();
        assert_eq!(titles, vec!["Top Result", "Research Insights", "Related Papers"]);
    }
}
