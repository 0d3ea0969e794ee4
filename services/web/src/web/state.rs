//! services/web/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use ailearn_core::catalog::CourseDraft;
use ailearn_core::ports::{BlogService, CatalogService, PortResult};
use ailearn_core::shell::{Credentials, ModalState, ShellEvent, ShellSnapshot};
use std::sync::Arc;

use crate::adapters::{InMemoryCatalog, StaticBlog};

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// Modal visibility is not stored here: it is per-visitor and travels in the
/// URL. Every shell transition that touches both goes through the methods
/// below.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub blog: Arc<dyn BlogService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// State backed by the in-memory adapters and their seed content.
    pub fn in_memory(config: Arc<Config>) -> Self {
        Self {
            catalog: Arc::new(InMemoryCatalog::seeded()),
            blog: Arc::new(StaticBlog::seeded()),
            config,
        }
    }

    /// The catalog as it stands, paired with one visitor's modal state.
    pub async fn snapshot(&self, modals: ModalState) -> PortResult<ShellSnapshot> {
        let courses = self.catalog.list_courses().await?;
        Ok(ShellSnapshot { courses, modals })
    }

    /// Appends `draft` to the catalog and returns the modal state that
    /// follows. On error the modal state is left to the caller.
    pub async fn submit_course(
        &self,
        modals: ModalState,
        draft: CourseDraft,
    ) -> PortResult<ModalState> {
        self.catalog.add_course(draft).await?;
        Ok(modals.apply(ShellEvent::CourseSubmitted))
    }

    /// Discards `credentials` and returns the modal state that follows.
    pub fn submit_auth(modals: ModalState, credentials: Credentials) -> ModalState {
        drop(credentials);
        modals.apply(ShellEvent::AuthSubmitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ailearn_core::catalog::CourseLevel;
    use ailearn_core::shell::AuthMode;
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        AppState::in_memory(Arc::new(Config::default()))
    }

    fn draft(title: &str) -> CourseDraft {
        CourseDraft {
            title: title.into(),
            description: "D".into(),
            image: "url".into(),
            price: "$10".into(),
            level: CourseLevel::Beginner,
            duration: "2 weeks".into(),
            instructor: "X".into(),
        }
    }

    #[tokio::test]
    async fn submitting_a_course_appends_and_closes_the_modal() {
        let state = state();
        let open = ModalState::default().apply(ShellEvent::OpenAddCourse);

        let next = state.submit_course(open, draft("Test")).await.unwrap();
        assert!(!next.add_course);

        let snapshot = state.snapshot(next).await.unwrap();
        assert_eq!(snapshot.courses.len(), 5);
        let last = &snapshot.courses[4];
        assert_eq!(last.id, "5");
        assert_eq!(last.title, "Test");
        assert_eq!(last.enrolled_students, 0);
        assert_eq!(last.rating.value(), 0.0);
    }

    #[tokio::test]
    async fn rejected_course_leaves_the_catalog_untouched() {
        let state = state();
        let result = state
            .submit_course(ModalState::default(), draft("  "))
            .await;

        assert!(result.is_err());
        assert_eq!(state.snapshot(ModalState::default()).await.unwrap().courses.len(), 4);
    }

    #[test]
    fn submitting_auth_closes_only_the_auth_modal() {
        let modals = ModalState {
            add_course: true,
            auth: Some(AuthMode::SignUp),
        };
        let credentials = Credentials {
            email: "ada@example.com".into(),
            password: "hunter2".into(),
            full_name: None,
        };

        let next = AppState::submit_auth(modals, credentials);
        assert_eq!(
            next,
            ModalState {
                add_course: true,
                auth: None,
            }
        );
    }
}
