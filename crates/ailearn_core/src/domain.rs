//! crates/ailearn_core/src/domain.rs
//!
//! Defines the relational schema the platform is built around: profiles,
//! courses, modules, lessons, enrollments, progress, assignments, submissions.
//!
//! Every table has two shapes. The stored record carries every column. The
//! `New*` creation payload carries only what a client supplies; columns the
//! store defaults (ids, timestamps, a few flags) are filled in by
//! `into_record`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Points an assignment is worth when the creator does not say otherwise.
pub const DEFAULT_TOTAL_POINTS: u32 = 100;

/// Generates a fresh opaque row id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

//=========================================================================================
// Profiles
//=========================================================================================

/// The role a profile plays on the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    #[default]
    Student,
    Instructor,
}

impl ProfileRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
        }
    }
}

impl fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub role: ProfileRole,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profiles share their id with the identity provider's user, so the caller
/// always supplies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: String,
    #[serde(default)]
    pub role: ProfileRole,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl NewProfile {
    pub fn into_record(self, now: DateTime<Utc>) -> Profile {
        Profile {
            id: self.id,
            role: self.role,
            full_name: self.full_name,
            avatar_url: self.avatar_url,
            created_at: now,
            updated_at: now,
        }
    }
}

//=========================================================================================
// Courses, modules, lessons
//=========================================================================================

/// A course as stored, owned by one instructor profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub instructor_id: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub price: f64,
    pub level: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCourse {
    pub instructor_id: String,
    pub title: String,
    pub level: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

impl NewCourse {
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> Course {
        Course {
            id,
            instructor_id: self.instructor_id,
            title: self.title,
            description: self.description,
            thumbnail_url: self.thumbnail_url,
            price: self.price.unwrap_or(0.0),
            level: self.level,
            is_published: self.is_published.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A module belongs to one course; `order_index` places it within the course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub order_index: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewModule {
    pub course_id: String,
    pub title: String,
    pub order_index: u32,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewModule {
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> Module {
        Module {
            id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            order_index: self.order_index,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A lesson belongs to one module; `order_index` places it within the module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub module_id: String,
    pub title: String,
    pub description: Option<String>,
    pub content_type: String,
    pub content: String,
    pub order_index: u32,
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLesson {
    pub module_id: String,
    pub title: String,
    pub content_type: String,
    pub content: String,
    pub order_index: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl NewLesson {
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> Lesson {
        Lesson {
            id,
            module_id: self.module_id,
            title: self.title,
            description: self.description,
            content_type: self.content_type,
            content: self.content,
            order_index: self.order_index,
            duration: self.duration,
            created_at: now,
            updated_at: now,
        }
    }
}

//=========================================================================================
// Enrollment and progress
//=========================================================================================

/// Links a student profile to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub student_id: String,
    pub course_id: String,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl NewEnrollment {
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> Enrollment {
        Enrollment {
            id,
            student_id: self.student_id,
            course_id: self.course_id,
            enrolled_at: now,
            completed_at: self.completed_at,
        }
    }
}

/// Marks one lesson as completed within one enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub id: String,
    pub enrollment_id: String,
    pub lesson_id: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProgress {
    pub enrollment_id: String,
    pub lesson_id: String,
}

impl NewProgress {
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> Progress {
        Progress {
            id,
            enrollment_id: self.enrollment_id,
            lesson_id: self.lesson_id,
            completed_at: now,
        }
    }
}

//=========================================================================================
// Assignments and submissions
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub total_points: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssignment {
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_points: Option<u32>,
}

impl NewAssignment {
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> Assignment {
        Assignment {
            id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            total_points: self.total_points.unwrap_or(DEFAULT_TOTAL_POINTS),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A student's answer to an assignment, optionally graded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub content: String,
    pub score: Option<f64>,
    pub submitted_at: DateTime<Utc>,
    pub graded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubmission {
    pub assignment_id: String,
    pub student_id: String,
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub graded_at: Option<DateTime<Utc>>,
}

impl NewSubmission {
    pub fn into_record(self, id: String, now: DateTime<Utc>) -> Submission {
        Submission {
            id,
            assignment_id: self.assignment_id,
            student_id: self.student_id,
            content: self.content,
            score: self.score,
            submitted_at: now,
            graded_at: self.graded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_course_fills_store_defaults() {
        let draft = NewCourse {
            instructor_id: "inst-1".into(),
            title: "Intro".into(),
            level: "Beginner".into(),
            description: None,
            thumbnail_url: None,
            price: None,
            is_published: None,
        };

        let course = draft.into_record("c-1".into(), fixed_now());

        assert_eq!(course.id, "c-1");
        assert_eq!(course.price, 0.0);
        assert!(!course.is_published);
        assert_eq!(course.created_at, fixed_now());
        assert_eq!(course.updated_at, fixed_now());
    }

    #[test]
    fn new_profile_defaults_to_student_when_role_is_omitted() {
        let payload: NewProfile = serde_json::from_str(r#"{"id":"user-9"}"#).unwrap();
        assert_eq!(payload.role, ProfileRole::Student);

        let profile = payload.into_record(fixed_now());
        assert_eq!(profile.id, "user-9");
        assert_eq!(profile.full_name, None);
    }

    #[test]
    fn profile_role_serializes_in_snake_case() {
        let json = serde_json::to_string(&ProfileRole::Instructor).unwrap();
        assert_eq!(json, r#""instructor""#);
        assert_eq!(ProfileRole::Student.to_string(), "student");
    }

    #[test]
    fn new_assignment_defaults_total_points() {
        let payload: NewAssignment =
            serde_json::from_str(r#"{"course_id":"c-1","title":"Essay"}"#).unwrap();
        let assignment = payload.into_record(new_id(), fixed_now());
        assert_eq!(assignment.total_points, DEFAULT_TOTAL_POINTS);
        assert_eq!(assignment.due_date, None);
    }

    #[test]
    fn enrollment_and_progress_take_insert_time() {
        let enrollment = NewEnrollment {
            student_id: "s-1".into(),
            course_id: "c-1".into(),
            completed_at: None,
        }
        .into_record("e-1".into(), fixed_now());
        assert_eq!(enrollment.enrolled_at, fixed_now());
        assert!(!enrollment.is_completed());

        let progress = NewProgress {
            enrollment_id: enrollment.id.clone(),
            lesson_id: "l-1".into(),
        }
        .into_record("p-1".into(), fixed_now());
        assert_eq!(progress.completed_at, fixed_now());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
