//! Research topic and loading flag shared with the dashboard

use super::ResearchStore;
use parking_lot::RwLock;

#[derive(Default)]
pub struct ResearchState {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    topic: String,
    is_loading: bool,
}

impl ResearchState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResearchStore for ResearchState {
    fn topic(&self) -> String {
        self.inner.read().topic.clone()
    }

    fn set_topic(&self, topic: String) {
        self.inner.write().topic = topic;
    }

    fn is_loading(&self) -> bool {
        self.inner.read().is_loading
    }

    fn set_loading(&self, loading: bool) {
        self.inner.write().is_loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_and_loading() {
        let state = ResearchState::new();
        assert_eq!(state.topic(), "");
        assert!(!state.is_loading());

        state.set_topic("Quantum Computing".to_string());
        state.set_loading(true);

        assert_eq!(state.topic(), "Quantum Computing");
        assert!(state.is_loading());
    }
}
