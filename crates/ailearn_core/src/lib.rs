pub mod aggregates;
pub mod blog;
pub mod catalog;
pub mod domain;
pub mod ordering;
pub mod ports;
pub mod seed;
pub mod shell;

pub use aggregates::{AssignmentWithSubmission, CourseWithProgress};
pub use blog::BlogPost;
pub use catalog::{CatalogCourse, CatalogError, CatalogStore, CourseDraft, CourseLevel, Rating};
pub use domain::{
    Assignment, Course, Enrollment, Lesson, Module, Profile, ProfileRole, Progress, Submission,
};
pub use ports::{BlogService, CatalogService, PortError, PortResult};
pub use shell::{AuthMode, Credentials, ModalState, Route, ShellEvent, ShellSnapshot};
