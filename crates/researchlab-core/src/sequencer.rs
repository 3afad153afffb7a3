//! Simulated agent-activity sequence for the research dashboard
//!
//! The dashboard walks through the backend's six agent phases on a fixed
//! timer before it issues the real request. The timing is cosmetic and is not
//! tied to backend progress. Timing goes through [`Sleeper`] so tests can run
//! the sequence instantly and a streaming backend could replace it later.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Progress is expressed on a 0-100 scale
pub const MAX_PROGRESS: u8 = 100;

/// Named stage of the backend research pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentPhase {
    Generation,
    Reflection,
    Ranking,
    Evolution,
    Proximity,
    MetaReview,
}

impl AgentPhase {
    /// All phases in pipeline order
    pub const ALL: [AgentPhase; 6] = [
        AgentPhase::Generation,
        AgentPhase::Reflection,
        AgentPhase::Ranking,
        AgentPhase::Evolution,
        AgentPhase::Proximity,
        AgentPhase::MetaReview,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Generation => "generationAgent",
            Self::Reflection => "reflectionAgent",
            Self::Ranking => "rankingAgent",
            Self::Evolution => "evolutionAgent",
            Self::Proximity => "proximityAgent",
            Self::MetaReview => "metaReviewAgent",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Generation => "Generation Agent",
            Self::Reflection => "Reflection Agent",
            Self::Ranking => "Ranking Agent",
            Self::Evolution => "Evolution Agent",
            Self::Proximity => "Proximity Agent",
            Self::MetaReview => "Meta-Review Agent",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Generation => "🧠",
            Self::Reflection => "🔍",
            Self::Ranking => "📊",
            Self::Evolution => "🔄",
            Self::Proximity => "🔗",
            Self::MetaReview => "📝",
        }
    }
}

impl fmt::Display for AgentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Advance progress by one phase's share: `min(round(prev + 100 / phases), 100)`
pub fn advance_progress(prev: u8, phase_count: usize) -> u8 {
    if phase_count == 0 {
        return MAX_PROGRESS;
    }
    let share = f64::from(MAX_PROGRESS) / phase_count as f64;
    let next = (f64::from(prev) + share).round();
    next.min(f64::from(MAX_PROGRESS)) as u8
}

/// Suspends the sequence between phases
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real timer backed by Tokio
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// One step of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStep {
    pub phase: AgentPhase,
    pub duration: Duration,
}

/// Ordered list of timed phases
#[derive(Clone)]
pub struct PhaseSequencer {
    steps: Vec<PhaseStep>,
    sleeper: Arc<dyn Sleeper>,
}

impl PhaseSequencer {
    /// All six phases with the same pause each, on the Tokio timer
    pub fn uniform(delay: Duration) -> Self {
        Self::with_sleeper(delay, Arc::new(TokioSleeper))
    }

    pub fn with_sleeper(delay: Duration, sleeper: Arc<dyn Sleeper>) -> Self {
        let steps = AgentPhase::ALL
            .iter()
            .map(|&phase| PhaseStep {
                phase,
                duration: delay,
            })
            .collect();
        Self { steps, sleeper }
    }

    pub fn steps(&self) -> &[PhaseStep] {
        &self.steps
    }

    /// Walk the phases strictly in order.
    ///
    /// `on_phase` is called as each phase becomes active, with the progress
    /// value for that phase, before the phase's pause begins.
    pub async fn run<F>(&self, mut on_phase: F)
    where
        F: FnMut(AgentPhase, u8) + Send,
    {
        let count = self.steps.len();
        let mut progress = 0u8;
        for step in &self.steps {
            progress = advance_progress(progress, count);
            on_phase(step.phase, progress);
            self.sleeper.sleep(step.duration).await;
        }
    }
}

impl fmt::Debug for PhaseSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseSequencer")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    #[test]
    fn test_progress_values() {
        let mut progress = 0;
        let mut seen = Vec::new();
        for _ in 0..6 {
            progress = advance_progress(progress, 6);
            seen.push(progress);
        }
        assert_eq!(seen, vec![17, 34, 51, 68, 85, 100]);
    }

    #[test]
    fn test_progress_caps_at_max() {
        assert_eq!(advance_progress(100, 6), 100);
        assert_eq!(advance_progress(95, 6), 100);
        assert_eq!(advance_progress(0, 0), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_in_order_with_fixed_pauses() {
        let sequencer = PhaseSequencer::uniform(Duration::from_secs(1));
        let start = Instant::now();
        let mut calls = Vec::new();

        sequencer
            .run(|phase, progress| calls.push((phase, progress, start.elapsed().as_secs())))
            .await;

        assert_eq!(
            calls,
            vec![
                (AgentPhase::Generation, 17, 0),
                (AgentPhase::Reflection, 34, 1),
                (AgentPhase::Ranking, 51, 2),
                (AgentPhase::Evolution, 68, 3),
                (AgentPhase::Proximity, 85, 4),
                (AgentPhase::MetaReview, 100, 5),
            ]
        );
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(AgentPhase::MetaReview.name(), "Meta-Review Agent");
        assert_eq!(AgentPhase::MetaReview.id(), "metaReviewAgent");
        assert_eq!(AgentPhase::ALL.len(), 6);
    }
}
