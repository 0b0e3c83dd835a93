//! HTTP request handlers.

pub mod clicks;
pub mod health;
pub mod postback;

pub use clicks::{
    create_click_handler, get_click_by_public_id_handler, get_click_handler, upsert_click_handler,
};
pub use health::health_handler;
pub use postback::{postback_preview_by_public_id_handler, postback_preview_handler};
