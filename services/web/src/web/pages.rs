//! services/web/src/web/pages.rs
//!
//! Handlers for the two HTML pages and the add-course form post.

use crate::web::forms::CourseForm;
use crate::web::state::AppState;
use crate::web::views::{self, FormFeedback};
use ailearn_core::catalog::CatalogError;
use ailearn_core::ports::PortError;
use ailearn_core::shell::{ModalState, Route, ShellEvent};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;
use tracing::{error, warn};

type PageError = (StatusCode, String);

fn internal(context: &str, e: PortError) -> PageError {
    error!("{}: {:?}", context, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error.".to_string(),
    )
}

/// Renders `route` for the given modal state.
async fn render(
    state: &AppState,
    route: Route,
    modals: ModalState,
    feedback: Option<&FormFeedback>,
) -> Result<String, PageError> {
    let site_name = &state.config.site_name;
    match route {
        Route::Home => {
            let snapshot = state
                .snapshot(modals)
                .await
                .map_err(|e| internal("Failed to list courses", e))?;
            Ok(views::landing_page(site_name, &snapshot, feedback))
        }
        Route::Blog => {
            let posts = state
                .blog
                .list_posts()
                .await
                .map_err(|e| internal("Failed to list blog posts", e))?;
            Ok(views::blog_page(site_name, &posts, modals, feedback))
        }
    }
}

/// GET / - landing page with hero, features and the course grid.
pub async fn landing_handler(
    State(state): State<Arc<AppState>>,
    Query(modals): Query<ModalState>,
) -> Result<Html<String>, PageError> {
    render(&state, Route::Home, modals, None).await.map(Html)
}

/// GET /blog - static post listing.
pub async fn blog_handler(
    State(state): State<Arc<AppState>>,
    Query(modals): Query<ModalState>,
) -> Result<Html<String>, PageError> {
    render(&state, Route::Blog, modals, None).await.map(Html)
}

/// Where the browser lands after the modal closes.
fn after_submit(route: Route, modals: ModalState) -> String {
    let anchor = match route {
        Route::Home => "#courses",
        Route::Blog => "",
    };
    format!("{}{}{}", route.path(), modals.to_query(), anchor)
}

/// POST /courses - the add-course form.
///
/// On success the course is appended and the browser is redirected with the
/// modal closed. A rejected draft re-renders the page with the modal still
/// open, the error shown, and the input preserved.
pub async fn add_course_handler(
    State(state): State<Arc<AppState>>,
    Query(modals): Query<ModalState>,
    Form(form): Form<CourseForm>,
) -> Result<Response, PageError> {
    let route = form.return_route();

    let rejection: CatalogError = match form.to_draft() {
        Ok(draft) => match state.submit_course(modals, draft).await {
            Ok(closed) => {
                return Ok(Redirect::to(&after_submit(route, closed)).into_response());
            }
            Err(PortError::Invalid(e)) => e,
            Err(e) => return Err(internal("Failed to add course", e)),
        },
        Err(e) => e,
    };

    warn!("Add-course form rejected: {}", rejection);
    let feedback = FormFeedback {
        message: rejection.to_string(),
        values: form,
    };
    let reopened = modals.apply(ShellEvent::OpenAddCourse);
    let body = render(&state, route, reopened, Some(&feedback)).await?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(body)).into_response())
}
