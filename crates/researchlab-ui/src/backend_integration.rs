//! Backend integration for GPUI
//!
//! GPUI owns the UI thread, so backend calls and phase timers run on a
//! shared Tokio runtime. Each job reports back over a channel which the
//! window drains from its 100 ms poll timer.

use researchlab_core::{
    research_job, DashboardEvent, Error, IdeaGenerator, IdeaSection, ResearchDashboard, Result,
};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Result of an async idea generation request
type IdeasResult = Result<Vec<IdeaSection>>;

/// Runs page jobs on the Tokio runtime and hands their results back
pub struct JobManager {
    /// Tokio runtime for async operations
    runtime: Arc<Runtime>,
    /// Pending idea generation result receiver
    pending_ideas_rx: Option<oneshot::Receiver<IdeasResult>>,
    /// Events from the running research job
    research_rx: Option<mpsc::UnboundedReceiver<DashboardEvent>>,
}

impl JobManager {
    pub fn new(runtime: Arc<Runtime>) -> Self {
        Self {
            runtime,
            pending_ideas_rx: None,
            research_rx: None,
        }
    }

    /// Build a manager with its own multi-threaded runtime
    pub fn with_new_runtime() -> std::io::Result<Self> {
        Ok(Self::new(Arc::new(Runtime::new()?)))
    }

    // ========================================================================
    // Innovation Lab
    // ========================================================================

    /// Submit the generator's topic (non-blocking).
    ///
    /// Returns false when the generator rejected the submission. Call
    /// [`poll_ideas`](Self::poll_ideas) to deliver the outcome.
    pub fn start_generate(&mut self, generator: &mut IdeaGenerator) -> bool {
        let Some(topic) = generator.begin_generate() else {
            return false;
        };

        info!("Starting idea generation for {:?}", topic);
        let (tx, rx) = oneshot::channel();
        self.pending_ideas_rx = Some(rx);

        let api = generator.api();
        self.runtime.spawn(async move {
            let result = api.generate_ideas(&topic).await;
            let _ = tx.send(result);
        });
        true
    }

    /// Deliver a finished idea request, if any. Returns true when the
    /// generator changed.
    pub fn poll_ideas(&mut self, generator: &mut IdeaGenerator) -> bool {
        let Some(mut rx) = self.pending_ideas_rx.take() else {
            return false;
        };

        match rx.try_recv() {
            Ok(result) => {
                generator.complete(result);
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => {
                // Still pending, put it back
                self.pending_ideas_rx = Some(rx);
                false
            }
            Err(oneshot::error::TryRecvError::Closed) => {
                generator.complete(Err(Error::Internal(
                    "Idea generation task cancelled".to_string(),
                )));
                true
            }
        }
    }

    // ========================================================================
    // Research Dashboard
    // ========================================================================

    /// Submit the dashboard's topic (non-blocking).
    ///
    /// The job walks the agent phases and then calls the backend; every step
    /// arrives through [`poll_research`](Self::poll_research).
    pub fn start_research(&mut self, dashboard: &mut ResearchDashboard) -> bool {
        let Some(topic) = dashboard.begin_search() else {
            return false;
        };

        info!("Starting research for {:?}", topic);
        let (tx, rx) = mpsc::unbounded_channel();
        self.research_rx = Some(rx);

        let api = dashboard.api();
        let sequencer = dashboard.sequencer().clone();
        self.runtime.spawn(async move {
            research_job(&topic, api.as_ref(), &sequencer, |event| {
                let _ = tx.send(event);
            })
            .await;
        });
        true
    }

    /// Apply every event the research job has sent so far. Returns true when
    /// the dashboard changed.
    pub fn poll_research(&mut self, dashboard: &mut ResearchDashboard) -> bool {
        let Some(rx) = self.research_rx.as_mut() else {
            return false;
        };

        let mut changed = false;
        let mut finished = false;
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    finished = matches!(
                        event,
                        DashboardEvent::Completed(_) | DashboardEvent::Failed(_)
                    );
                    dashboard.apply(event);
                    changed = true;
                    if finished {
                        debug!("Research job finished");
                        break;
                    }
                }
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    warn!("Research job ended without a result");
                    dashboard.apply(DashboardEvent::Failed(
                        "Research task cancelled".to_string(),
                    ));
                    changed = true;
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.research_rx = None;
        }
        changed
    }

    /// Check if there's a pending operation
    pub fn has_pending_operation(&self) -> bool {
        self.pending_ideas_rx.is_some() || self.research_rx.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use researchlab_core::{
        ApiError, IdeaApi, MemoryBookmarkStore, PhaseSequencer, ResearchApi, ResearchResult,
        ResearchState, ResultState,
    };
    use std::time::Duration;

    struct StubIdeas(Option<Vec<IdeaSection>>);

    #[async_trait]
    impl IdeaApi for StubIdeas {
        async fn generate_ideas(&self, _topic: &str) -> Result<Vec<IdeaSection>> {
            self.0.clone().ok_or_else(|| {
                ApiError::Status {
                    endpoint: "/innovation/generate".to_string(),
                    status: 503,
                }
                .into()
            })
        }
    }

    struct StubResearch(f64);

    #[async_trait]
    impl ResearchApi for StubResearch {
        async fn research(&self, _topic: &str) -> Result<ResearchResult> {
            Ok(ResearchResult::with_score(self.0))
        }
    }

    fn wait_until(mut done: impl FnMut() -> bool) {
        for _ in 0..500 {
            if done() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("job did not finish in time");
    }

    #[test]
    fn test_generate_delivers_sections() {
        let mut jobs = JobManager::with_new_runtime().unwrap();
        let sections = vec![IdeaSection::new("A", vec!["x".into(), "y".into()])];
        let mut generator = IdeaGenerator::new(Arc::new(StubIdeas(Some(sections.clone()))));
        generator.set_topic("quantum sensing");

        assert!(jobs.start_generate(&mut generator));
        assert!(generator.is_loading());
        assert!(jobs.has_pending_operation());

        wait_until(|| jobs.poll_ideas(&mut generator));

        assert!(!generator.is_loading());
        assert_eq!(generator.sections(), sections.as_slice());
        assert!(!jobs.has_pending_operation());
    }

    #[test]
    fn test_generate_failure_sets_error() {
        let mut jobs = JobManager::with_new_runtime().unwrap();
        let mut generator = IdeaGenerator::new(Arc::new(StubIdeas(None)));
        generator.set_topic("quantum sensing");

        jobs.start_generate(&mut generator);
        wait_until(|| jobs.poll_ideas(&mut generator));

        assert!(!generator.is_loading());
        assert!(generator.sections().is_empty());
        assert!(generator.error().is_some());
    }

    #[test]
    fn test_empty_topic_spawns_nothing() {
        let mut jobs = JobManager::with_new_runtime().unwrap();
        let mut generator = IdeaGenerator::new(Arc::new(StubIdeas(Some(vec![]))));

        assert!(!jobs.start_generate(&mut generator));
        assert!(!jobs.has_pending_operation());
        assert!(!jobs.poll_ideas(&mut generator));
    }

    #[test]
    fn test_research_runs_all_phases() {
        let mut jobs = JobManager::with_new_runtime().unwrap();
        let mut dashboard = ResearchDashboard::new(
            Arc::new(StubResearch(8.5)),
            Arc::new(ResearchState::new()),
            Arc::new(MemoryBookmarkStore::new()),
            PhaseSequencer::uniform(Duration::from_millis(1)),
        );
        dashboard.set_topic("protein folding");

        assert!(jobs.start_research(&mut dashboard));
        assert!(dashboard.is_loading());

        let mut seen = Vec::new();
        wait_until(|| {
            jobs.poll_research(&mut dashboard);
            seen.push(dashboard.progress());
            !jobs.has_pending_operation()
        });

        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(dashboard.progress(), 100);
        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.active_phase(), None);
        assert_eq!(
            dashboard.result_state(),
            &ResultState::Ready(ResearchResult::with_score(8.5))
        );
    }
}
