//! Application services orchestrating domain logic.

pub mod click_service;
pub mod postback_service;

pub use click_service::ClickService;
pub use postback_service::PostbackService;
