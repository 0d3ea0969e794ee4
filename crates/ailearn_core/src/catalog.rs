//! crates/ailearn_core/src/catalog.rs
//!
//! The course catalog shown on the landing page: the display record, the
//! draft the add-course form produces, and the in-memory store that holds
//! them in insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors raised while building catalog records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("The field '{0}' is required")]
    MissingField(&'static str),
    #[error("Unknown course level: {0}")]
    UnknownLevel(String),
    #[error("Rating {0} is outside 0.0..=5.0")]
    RatingOutOfRange(f64),
    #[error("No course ids are left to assign")]
    IdsExhausted,
}

//=========================================================================================
// Value types
//=========================================================================================

/// Difficulty badge shown on a course card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(CatalogError::UnknownLevel(s.to_string())),
        }
    }
}

/// Average review score, always within `0.0..=5.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Result<Self, CatalogError> {
        if value.is_finite() && (0.0..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CatalogError::RatingOutOfRange(value))
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// One decimal place, rounding the stored binary value to nearest and
    /// exact halves up: 4.75 -> "4.8", 4.25 -> "4.3", 4.35 -> "4.3" (4.35 is
    /// stored just below the half).
    pub fn display(self) -> String {
        // Only quarter values (x.25, x.75) sit exactly on a tie at one decimal.
        let quarters = self.0 * 4.0;
        if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
            format!("{:.1}", (self.0 * 10.0).round() / 10.0)
        } else {
            format!("{:.1}", self.0)
        }
    }
}

impl TryFrom<f64> for Rating {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

//=========================================================================================
// Records
//=========================================================================================

/// A course as listed in the catalog grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCourse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: String,
    pub level: CourseLevel,
    pub duration: String,
    pub instructor: String,
    pub enrolled_students: u32,
    pub rating: Rating,
}

/// What the add-course form collects: a course without id, enrollment count
/// or rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: String,
    pub level: CourseLevel,
    pub duration: String,
    pub instructor: String,
}

impl CourseDraft {
    /// Fails on the first empty or whitespace-only field, in form order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let fields = [
            ("title", &self.title),
            ("description", &self.description),
            ("image", &self.image),
            ("price", &self.price),
            ("duration", &self.duration),
            ("instructor", &self.instructor),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField(name));
            }
        }
        Ok(())
    }
}

//=========================================================================================
// Store
//=========================================================================================

/// Ordered, append-only course collection.
///
/// Ids come from a counter owned by the store, so they never depend on how
/// many courses are currently held.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    courses: Vec<CatalogCourse>,
    /// `None` once `u64::MAX` has been handed out.
    next_id: Option<u64>,
}

impl CatalogStore {
    /// The store as the landing page first shows it.
    pub fn seeded() -> Self {
        Self::from_seed(crate::seed::seed_courses())
    }

    /// The counter starts past every numeric seed id and past the seed length.
    pub fn from_seed(courses: Vec<CatalogCourse>) -> Self {
        let highest = courses
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = highest.max(courses.len() as u64).checked_add(1);
        Self { courses, next_id }
    }

    pub fn courses(&self) -> &[CatalogCourse] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Validates `draft` and appends it as a new course with no students and
    /// no rating.
    pub fn add(&mut self, draft: CourseDraft) -> Result<&CatalogCourse, CatalogError> {
        draft.validate()?;

        let id = self.next_id.ok_or(CatalogError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        let id = id.to_string();

        self.courses.push(CatalogCourse {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            price: draft.price,
            level: draft.level,
            duration: draft.duration,
            instructor: draft.instructor,
            enrolled_students: 0,
            rating: Rating::default(),
        });

        Ok(&self.courses[self.courses.len() - 1])
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

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

    #[test]
    fn seeded_store_holds_four_courses_in_order() {
        let store = CatalogStore::seeded();
        let ids: Vec<&str> = store.courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn adds_get_sequential_ids_and_zeroed_stats() {
        let mut store = CatalogStore::seeded();
        for k in 1..=6u32 {
            let added = store.add(draft(&format!("Course {k}"))).unwrap();
            assert_eq!(added.id, (4 + k).to_string());
            assert_eq!(added.enrolled_students, 0);
            assert_eq!(added.rating.value(), 0.0);
        }
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn display_order_is_insertion_order() {
        let mut store = CatalogStore::seeded();
        let mut expected: Vec<String> = store.courses().iter().map(|c| c.title.clone()).collect();

        store.add(draft("Zeta")).unwrap();
        store.add(draft("Alpha")).unwrap();
        expected.push("Zeta".into());
        expected.push("Alpha".into());

        let titles: Vec<String> = store.courses().iter().map(|c| c.title.clone()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn ids_do_not_collide_with_sparse_seed() {
        let mut seed = crate::seed::seed_courses();
        seed.truncate(2);
        seed[1].id = "7".into();

        let mut store = CatalogStore::from_seed(seed);
        let added = store.add(draft("After sparse seed")).unwrap();
        assert_eq!(added.id, "8");
    }

    #[test]
    fn ids_stop_at_the_counter_limit() {
        let mut seed = crate::seed::seed_courses();
        seed.truncate(1);
        seed[0].id = (u64::MAX - 1).to_string();

        let mut store = CatalogStore::from_seed(seed);
        assert_eq!(store.add(draft("Last")).unwrap().id, u64::MAX.to_string());
        assert_eq!(store.add(draft("Too many")), Err(CatalogError::IdsExhausted));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn seed_at_the_counter_limit_does_not_panic() {
        let mut seed = crate::seed::seed_courses();
        seed[0].id = u64::MAX.to_string();

        let mut store = CatalogStore::from_seed(seed);
        assert_eq!(store.add(draft("Nope")), Err(CatalogError::IdsExhausted));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = CatalogStore::from_seed(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.add(draft("First")).unwrap().id, "1");
    }

    #[test]
    fn blank_field_is_rejected_and_nothing_is_appended() {
        let mut store = CatalogStore::seeded();
        let mut bad = draft("Test");
        bad.instructor = "   ".into();

        assert_eq!(store.add(bad), Err(CatalogError::MissingField("instructor")));
        assert_eq!(store.len(), 4);

        // A rejected draft does not burn an id.
        assert_eq!(store.add(draft("Next")).unwrap().id, "5");
    }

    #[rstest]
    #[case(4.75, "4.8")]
    #[case(4.8, "4.8")]
    #[case(0.0, "0.0")]
    #[case(5.0, "5.0")]
    #[case(4.25, "4.3")]
    #[case(4.35, "4.3")]
    #[case(4.45, "4.5")]
    #[case(0.05, "0.1")]
    #[case(4.5, "4.5")]
    fn rating_display_rounds_to_one_decimal(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(Rating::new(value).unwrap().display(), expected);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(5.01)]
    #[case(f64::NAN)]
    fn rating_rejects_out_of_range(#[case] value: f64) {
        assert!(matches!(
            Rating::new(value),
            Err(CatalogError::RatingOutOfRange(_))
        ));
    }

    #[rstest]
    #[case("Beginner", CourseLevel::Beginner)]
    #[case("intermediate", CourseLevel::Intermediate)]
    #[case(" ADVANCED ", CourseLevel::Advanced)]
    fn level_parses_case_insensitively(#[case] input: &str, #[case] expected: CourseLevel) {
        assert_eq!(input.parse::<CourseLevel>().unwrap(), expected);
    }

    #[test]
    fn unknown_level_is_an_error() {
        assert_eq!(
            "Expert".parse::<CourseLevel>(),
            Err(CatalogError::UnknownLevel("Expert".into()))
        );
    }

    #[test]
    fn catalog_course_uses_camel_case_keys() {
        let store = CatalogStore::seeded();
        let json = serde_json::to_value(&store.courses()[0]).unwrap();
        assert_eq!(json["enrolledStudents"], 1234);
        assert_eq!(json["rating"], 4.8);
        assert_eq!(json["level"], "Beginner");
    }

    #[test]
    fn deserializing_an_out_of_range_rating_fails() {
        let err = serde_json::from_str::<Rating>("7.5");
        assert!(err.is_err());
    }
}
