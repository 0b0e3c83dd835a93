//! Postback macro table and URL template substitution.

pub mod macros;
pub mod substitute;

pub use macros::{PostbackMacro, macro_map};
pub use substitute::substitute;
