//! services/web/src/web/forms.rs
//!
//! URL-encoded form bodies posted by the two modals.

use ailearn_core::catalog::{CatalogError, CourseDraft, CourseLevel};
use ailearn_core::shell::{AuthMode, Credentials, Route};
use serde::Deserialize;

/// Raw add-course form. Every field is kept as typed so the form can be
/// re-rendered with the user's input after a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: String,
    pub level: String,
    pub duration: String,
    pub instructor: String,
    /// Path of the page the modal was opened on.
    pub return_to: Option<String>,
}

impl CourseForm {
    pub fn to_draft(&self) -> Result<CourseDraft, CatalogError> {
        let draft = CourseDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            level: self.level.parse::<CourseLevel>()?,
            duration: self.duration.clone(),
            instructor: self.instructor.clone(),
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn return_route(&self) -> Route {
        return_route(self.return_to.as_deref())
    }
}

/// Raw auth form, either mode. `full_name` is only sent in sign-up mode.
///
/// Nothing is validated: missing fields read as empty.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub return_to: Option<String>,
}

impl AuthForm {
    pub fn into_credentials(self) -> Credentials {
        Credentials {
            email: self.email,
            password: self.password,
            full_name: self.full_name,
        }
    }

    pub fn return_route(&self) -> Route {
        return_route(self.return_to.as_deref())
    }
}

/// Unknown or missing paths go back to the landing page.
fn return_route(path: Option<&str>) -> Route {
    path.and_then(Route::parse).unwrap_or(Route::Home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> CourseForm {
        CourseForm {
            title: "Test".into(),
            description: "D".into(),
            image: "url".into(),
            price: "$10".into(),
            level: "Beginner".into(),
            duration: "2 weeks".into(),
            instructor: "X".into(),
            return_to: None,
        }
    }

    #[test]
    fn complete_form_becomes_a_draft() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.level, CourseLevel::Beginner);
        assert_eq!(draft.price, "$10");
    }

    #[test]
    fn missing_level_is_reported_as_unknown() {
        let mut form = filled();
        form.level.clear();
        assert_eq!(
            form.to_draft(),
            Err(CatalogError::UnknownLevel(String::new()))
        );
    }

    #[test]
    fn blank_description_is_reported() {
        let mut form = filled();
        form.description = " ".into();
        assert_eq!(
            form.to_draft(),
            Err(CatalogError::MissingField("description"))
        );
    }

    #[test]
    fn return_route_falls_back_to_home() {
        let mut form = filled();
        assert_eq!(form.return_route(), Route::Home);

        form.return_to = Some("/blog".into());
        assert_eq!(form.return_route(), Route::Blog);

        form.return_to = Some("https://elsewhere.example".into());
        assert_eq!(form.return_route(), Route::Home);
    }
}
