//! Persistence implementations.

pub mod pg_click_repository;

pub use pg_click_repository::PgClickRepository;
