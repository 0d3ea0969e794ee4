//! crates/ailearn_core/src/aggregates.rs
//!
//! Read models that join schema records into the shapes a learner dashboard
//! renders: a course tree with per-lesson completion, and an assignment with
//! the student's submission.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::{Assignment, Course, Enrollment, Lesson, Module, Progress, Submission};
use crate::ordering::is_consecutive;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonWithCompletion {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleWithLessons {
    #[serde(flatten)]
    pub module: Module,
    pub lessons: Vec<LessonWithCompletion>,
}

/// A course with its ordered module/lesson tree and the learner's progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseWithProgress {
    #[serde(flatten)]
    pub course: Course,
    pub modules: Vec<ModuleWithLessons>,
    pub enrollment: Option<Enrollment>,
    pub total_lessons: usize,
    pub completed_lessons: usize,
}

impl CourseWithProgress {
    /// Builds the tree for `course`.
    ///
    /// Modules of other courses and lessons of other modules are dropped.
    /// Modules and lessons are sorted by `order_index`. A lesson counts as
    /// completed only when a progress row of `enrollment` points at it.
    pub fn assemble(
        course: Course,
        modules: Vec<Module>,
        lessons: Vec<Lesson>,
        enrollment: Option<Enrollment>,
        progress: &[Progress],
    ) -> Self {
        let done: HashSet<&str> = match &enrollment {
            Some(e) => progress
                .iter()
                .filter(|p| p.enrollment_id == e.id)
                .map(|p| p.lesson_id.as_str())
                .collect(),
            None => HashSet::new(),
        };

        let mut modules: Vec<Module> = modules
            .into_iter()
            .filter(|m| m.course_id == course.id)
            .collect();
        modules.sort_by_key(|m| m.order_index);

        let mut tree = Vec::with_capacity(modules.len());
        let mut total_lessons = 0;
        let mut completed_lessons = 0;

        for module in modules {
            let mut owned: Vec<&Lesson> =
                lessons.iter().filter(|l| l.module_id == module.id).collect();
            owned.sort_by_key(|l| l.order_index);

            let lessons: Vec<LessonWithCompletion> = owned
                .into_iter()
                .map(|lesson| LessonWithCompletion {
                    completed: done.contains(lesson.id.as_str()),
                    lesson: lesson.clone(),
                })
                .collect();

            total_lessons += lessons.len();
            completed_lessons += lessons.iter().filter(|l| l.completed).count();
            tree.push(ModuleWithLessons { module, lessons });
        }

        Self {
            course,
            modules: tree,
            enrollment,
            total_lessons,
            completed_lessons,
        }
    }

    /// Fraction of lessons completed, 0.0 for an empty course.
    pub fn completion_ratio(&self) -> f64 {
        if self.total_lessons == 0 {
            return 0.0;
        }
        self.completed_lessons as f64 / self.total_lessons as f64
    }

    /// True when module indices, and each module's lesson indices, form
    /// gap-free runs without duplicates.
    pub fn is_well_ordered(&self) -> bool {
        is_consecutive(self.modules.iter().map(|m| m.module.order_index))
            && self
                .modules
                .iter()
                .all(|m| is_consecutive(m.lessons.iter().map(|l| l.lesson.order_index)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentWithSubmission {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub submission: Option<Submission>,
}

impl AssignmentWithSubmission {
    pub fn is_graded(&self) -> bool {
        self.submission
            .as_ref()
            .is_some_and(|s| s.score.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewCourse, NewEnrollment, NewLesson, NewModule, NewProgress};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn course() -> Course {
        NewCourse {
            instructor_id: "inst".into(),
            title: "Deep Learning".into(),
            level: "Advanced".into(),
            description: None,
            thumbnail_url: None,
            price: Some(89.0),
            is_published: Some(true),
        }
        .into_record("c1".into(), Utc.timestamp_opt(0, 0).unwrap())
    }

    fn module(id: &str, course_id: &str, order_index: u32) -> Module {
        NewModule {
            course_id: course_id.into(),
            title: format!("Module {id}"),
            order_index,
            description: None,
        }
        .into_record(id.into(), Utc.timestamp_opt(0, 0).unwrap())
    }

    fn lesson(id: &str, module_id: &str, order_index: u32) -> Lesson {
        NewLesson {
            module_id: module_id.into(),
            title: format!("Lesson {id}"),
            content_type: "text".into(),
            content: "...".into(),
            order_index,
            description: None,
            duration: None,
        }
        .into_record(id.into(), Utc.timestamp_opt(0, 0).unwrap())
    }

    #[test]
    fn assemble_orders_tree_and_counts_completion() {
        let enrollment = NewEnrollment {
            student_id: "s1".into(),
            course_id: "c1".into(),
            completed_at: None,
        }
        .into_record("e1".into(), Utc.timestamp_opt(0, 0).unwrap());
        let progress = vec![
            NewProgress {
                enrollment_id: "e1".into(),
                lesson_id: "l2".into(),
            }
            .into_record("p1".into(), Utc.timestamp_opt(0, 0).unwrap()),
            // Someone else's progress must not count.
            NewProgress {
                enrollment_id: "e2".into(),
                lesson_id: "l1".into(),
            }
            .into_record("p2".into(), Utc.timestamp_opt(0, 0).unwrap()),
        ];

        let view = CourseWithProgress::assemble(
            course(),
            vec![module("m2", "c1", 2), module("m1", "c1", 1), module("mx", "other", 1)],
            vec![lesson("l2", "m1", 2), lesson("l1", "m1", 1), lesson("l3", "m2", 1)],
            Some(enrollment),
            &progress,
        );

        let module_ids: Vec<&str> = view.modules.iter().map(|m| m.module.id.as_str()).collect();
        assert_eq!(module_ids, vec!["m1", "m2"]);

        let first: Vec<(&str, bool)> = view.modules[0]
            .lessons
            .iter()
            .map(|l| (l.lesson.id.as_str(), l.completed))
            .collect();
        assert_eq!(first, vec![("l1", false), ("l2", true)]);

        assert_eq!(view.total_lessons, 3);
        assert_eq!(view.completed_lessons, 1);
        assert!((view.completion_ratio() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gaps_in_lesson_indices_are_detected() {
        let ordered = CourseWithProgress::assemble(
            course(),
            vec![module("m1", "c1", 1), module("m2", "c1", 2)],
            vec![lesson("l1", "m1", 1), lesson("l2", "m1", 2), lesson("l3", "m2", 1)],
            None,
            &[],
        );
        assert!(ordered.is_well_ordered());

        let gapped = CourseWithProgress::assemble(
            course(),
            vec![module("m1", "c1", 1)],
            vec![lesson("l1", "m1", 1), lesson("l3", "m1", 3)],
            None,
            &[],
        );
        assert!(!gapped.is_well_ordered());
    }

    #[test]
    fn assemble_without_enrollment_marks_nothing_complete() {
        let view = CourseWithProgress::assemble(
            course(),
            vec![module("m1", "c1", 1)],
            vec![lesson("l1", "m1", 1)],
            None,
            &[],
        );
        assert_eq!(view.completed_lessons, 0);
        assert!(!view.modules[0].lessons[0].completed);
    }

    #[test]
    fn assignment_is_graded_only_with_a_score() {
        use crate::domain::{NewAssignment, NewSubmission};

        let now = Utc.timestamp_opt(0, 0).unwrap();
        let assignment = NewAssignment {
            course_id: "c1".into(),
            title: "Essay".into(),
            description: None,
            due_date: None,
            total_points: None,
        }
        .into_record("a1".into(), now);
        let submission = NewSubmission {
            assignment_id: "a1".into(),
            student_id: "s1".into(),
            content: "My essay".into(),
            score: None,
            graded_at: None,
        }
        .into_record("sub1".into(), now);

        let mut view = AssignmentWithSubmission {
            assignment,
            submission: None,
        };
        assert!(!view.is_graded());

        view.submission = Some(submission);
        assert!(!view.is_graded());

        if let Some(s) = view.submission.as_mut() {
            s.score = Some(92.0);
        }
        assert!(view.is_graded());
    }

    #[test]
    fn empty_course_has_zero_ratio() {
        let view = CourseWithProgress::assemble(course(), vec![], vec![], None, &[]);
        assert_eq!(view.total_lessons, 0);
        assert_eq!(view.completion_ratio(), 0.0);
    }
}
