//! Shared utilities.

pub mod public_id;
pub mod time_format;
