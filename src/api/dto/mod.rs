//! Request and response DTOs.

pub mod clicks;
pub mod health;
pub mod postback;

pub use clicks::{ClickResponse, CreateClickRequest, TokenDto, UpsertClickRequest};
pub use health::HealthResponse;
pub use postback::{PostbackPreviewRequest, PostbackPreviewResponse};
