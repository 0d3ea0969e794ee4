//! services/web/src/web/auth.rs
//!
//! The auth modal's form post. There is no identity backend: credentials are
//! accepted, dropped, and the modal closes.

use crate::web::forms::AuthForm;
use crate::web::state::AppState;
use ailearn_core::shell::ModalState;
use axum::{extract::Query, response::Redirect, Form};
use tracing::debug;

/// POST /auth - accepts sign-in or sign-up input and discards it.
pub async fn auth_handler(Query(modals): Query<ModalState>, Form(form): Form<AuthForm>) -> Redirect {
    let route = form.return_route();
    debug!(mode = form.mode.as_str(), "Auth form submitted; credentials discarded");
    let closed = AppState::submit_auth(modals, form.into_credentials());
    Redirect::to(&format!("{}{}", route.path(), closed.to_query()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ailearn_core::shell::{AuthMode, ShellEvent};
    use axum::{
        http::{header::LOCATION, StatusCode},
        response::IntoResponse,
    };
    use pretty_assertions::assert_eq;

    fn sign_up_form(return_to: &str) -> AuthForm {
        AuthForm {
            mode: AuthMode::SignUp,
            email: "ada@example.com".into(),
            password: "hunter2".into(),
            full_name: Some("Ada Lovelace".into()),
            return_to: Some(return_to.into()),
        }
    }

    #[tokio::test]
    async fn submission_closes_only_the_auth_modal() {
        let modals = ModalState {
            add_course: true,
            auth: Some(AuthMode::SignUp),
        };

        let response = auth_handler(Query(modals), Form(sign_up_form("/")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/?add_course=true");
    }

    #[tokio::test]
    async fn submission_returns_to_the_originating_page() {
        let modals = ModalState::default().apply(ShellEvent::OpenAuth);
        let response = auth_handler(Query(modals), Form(sign_up_form("/blog")))
            .await
            .into_response();
        assert_eq!(response.headers()[LOCATION], "/blog");
    }
}
