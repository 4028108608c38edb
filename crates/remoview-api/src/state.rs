use remoview_llm::ports::Generator;
use remoview_session::SessionProcessor;
use remoview_store::ports::HistoryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub processor: SessionProcessor,
}

impl AppState {
    pub fn new(generator: Arc<dyn Generator>, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            processor: SessionProcessor::new(generator, history),
        }
    }
}
