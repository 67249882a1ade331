use std::sync::Arc;

use briefing_core::BriefingService;

#[derive(Clone)]
pub struct AppState {
    pub briefing: Arc<BriefingService>,
}

impl AppState {
    pub fn new(briefing: BriefingService) -> Self {
        Self {
            briefing: Arc::new(briefing),
        }
    }
}
