//! services/web/src/web/rest.rs
//!
//! Contains the Axum handlers for the JSON API over the catalog and blog, and
//! the master definition for the OpenAPI document.

use crate::web::state::AppState;
use ailearn_core::blog::BlogPost;
use ailearn_core::catalog::{CatalogCourse, CatalogError, CourseDraft, CourseLevel};
use ailearn_core::ports::PortError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_courses_handler,
        create_course_handler,
        list_posts_handler,
    ),
    components(
        schemas(CourseResponse, CourseDraftPayload, BlogPostResponse)
    ),
    tags(
        (name = "AILearn API", description = "Course catalog and blog endpoints.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// A catalog course as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    id: String,
    title: String,
    description: String,
    image: String,
    price: String,
    /// One of `Beginner`, `Intermediate`, `Advanced`.
    level: String,
    duration: String,
    instructor: String,
    enrolled_students: u32,
    /// 0.0 to 5.0.
    rating: f64,
}

impl From<CatalogCourse> for CourseResponse {
    fn from(course: CatalogCourse) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            image: course.image,
            price: course.price,
            level: course.level.to_string(),
            duration: course.duration,
            instructor: course.instructor,
            enrolled_students: course.enrolled_students,
            rating: course.rating.value(),
        }
    }
}

/// The payload for creating a course. Every field is required and non-blank.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraftPayload {
    title: String,
    description: String,
    image: String,
    price: String,
    /// One of `Beginner`, `Intermediate`, `Advanced` (case-insensitive).
    level: String,
    duration: String,
    instructor: String,
}

impl TryFrom<CourseDraftPayload> for CourseDraft {
    type Error = CatalogError;

    fn try_from(payload: CourseDraftPayload) -> Result<Self, Self::Error> {
        Ok(CourseDraft {
            level: payload.level.parse::<CourseLevel>()?,
            title: payload.title,
            description: payload.description,
            image: payload.image,
            price: payload.price,
            duration: payload.duration,
            instructor: payload.instructor,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    title: String,
    excerpt: String,
    author: String,
    date: String,
    read_time: String,
    image: String,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            title: post.title,
            excerpt: post.excerpt,
            author: post.author,
            date: post.date,
            read_time: post.read_time,
            image: post.image,
        }
    }
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

fn internal_error(context: &str, e: PortError) -> (StatusCode, String) {
    error!("{}: {:?}", context, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("{} failed", context),
    )
}

/// List every catalog course in display order.
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Courses in display order", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_courses_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let courses = app_state
        .catalog
        .list_courses()
        .await
        .map_err(|e| internal_error("Listing courses", e))?;

    let body: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();
    Ok(Json(body))
}

/// Append a course to the catalog.
///
/// The new course starts with no students and a zero rating, and is listed last.
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseDraftPayload,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 422, description = "A field is blank or the level is unknown"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_course_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CourseDraftPayload>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let draft = CourseDraft::try_from(payload)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    match app_state.catalog.add_course(draft).await {
        Ok(course) => Ok((StatusCode::CREATED, Json(CourseResponse::from(course)))),
        Err(PortError::Invalid(e)) => Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
        Err(e) => Err(internal_error("Creating course", e)),
    }
}

/// List the blog posts.
#[utoipa::path(
    get,
    path = "/api/blog",
    responses(
        (status = 200, description = "Posts in listing order", body = Vec<BlogPostResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_posts_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let posts = app_state
        .blog
        .list_posts()
        .await
        .map_err(|e| internal_error("Listing blog posts", e))?;

    let body: Vec<BlogPostResponse> = posts.into_iter().map(BlogPostResponse::from).collect();
    Ok(Json(body))
}
