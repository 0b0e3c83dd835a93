use std::sync::Arc;

use crate::application::services::{ClickService, PostbackService};

#[derive(Clone)]
pub struct AppState {
    pub click_service: Arc<ClickService>,
    pub postback_service: Arc<PostbackService>,
}

impl AppState {
    pub fn new(click_service: Arc<ClickService>, postback_service: Arc<PostbackService>) -> Self {
        Self {
            click_service,
            postback_service,
        }
    }
}
