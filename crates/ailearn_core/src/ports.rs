//! crates/ailearn_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits are the boundary between the pure domain and whatever holds
//! the data: an in-memory store today, a relational backend later.

use async_trait::async_trait;

use crate::blog::BlogPost;
use crate::catalog::{CatalogCourse, CatalogError, CourseDraft};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Invalid input: {0}")]
    Invalid(#[from] CatalogError),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Every course, in display (insertion) order.
    async fn list_courses(&self) -> PortResult<Vec<CatalogCourse>>;

    /// Appends a course built from `draft` and returns it.
    async fn add_course(&self, draft: CourseDraft) -> PortResult<CatalogCourse>;
}

#[async_trait]
pub trait BlogService: Send + Sync {
    /// Every post, in listing order.
    async fn list_posts(&self) -> PortResult<Vec<BlogPost>>;
}
