//! Repository traits abstracting the record store.

pub mod click_repository;

pub use click_repository::{ClickRecord, ClickRepository, ClickWrite};

#[cfg(test)]
pub use click_repository::MockClickRepository;
