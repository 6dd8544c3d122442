//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters.
//!
//! # Repositories
//!
//! - [`PgUrlMappingRepository`] - Url mapping storage, lookup and hit counting

pub mod pg_url_mapping_repository;

pub use pg_url_mapping_repository::PgUrlMappingRepository;
