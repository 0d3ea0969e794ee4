//! services/web/src/adapters/memory.rs
//!
//! In-process adapters for the catalog and blog ports. Nothing here outlives
//! the process: a restart brings back the seed content.

use ailearn_core::blog::BlogPost;
use ailearn_core::catalog::{CatalogCourse, CatalogError, CatalogStore, CourseDraft};
use ailearn_core::ports::{BlogService, CatalogService, PortError, PortResult};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

//=========================================================================================
// Catalog
//=========================================================================================

/// Implements `CatalogService` over a `CatalogStore` behind a read-write lock.
///
/// Id assignment and append happen under the write lock, so concurrent adds
/// never observe the same counter value.
pub struct InMemoryCatalog {
    store: RwLock<CatalogStore>,
}

impl InMemoryCatalog {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// A catalog holding the four seed courses.
    pub fn seeded() -> Self {
        Self::new(CatalogStore::seeded())
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn list_courses(&self) -> PortResult<Vec<CatalogCourse>> {
        let store = self.store.read().await;
        Ok(store.courses().to_vec())
    }

    async fn add_course(&self, draft: CourseDraft) -> PortResult<CatalogCourse> {
        let mut store = self.store.write().await;
        match store.add(draft) {
            Ok(course) => {
                info!(id = %course.id, title = %course.title, "Course added to catalog");
                Ok(course.clone())
            }
            Err(CatalogError::IdsExhausted) => {
                error!("Course id counter exhausted");
                Err(PortError::Unexpected(
                    CatalogError::IdsExhausted.to_string(),
                ))
            }
            Err(e) => {
                warn!("Rejected course draft: {}", e);
                Err(e.into())
            }
        }
    }
}

//=========================================================================================
// Blog
//=========================================================================================

/// Serves a fixed list of posts.
pub struct StaticBlog {
    posts: Vec<BlogPost>,
}

impl StaticBlog {
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }

    pub fn seeded() -> Self {
        Self::new(ailearn_core::seed::seed_posts())
    }
}

#[async_trait]
impl BlogService for StaticBlog {
    async fn list_posts(&self) -> PortResult<Vec<BlogPost>> {
        Ok(self.posts.clone())
    }
}
