use std::sync::Arc;

use crate::application::services::UtterancePipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<UtterancePipeline>,
}
